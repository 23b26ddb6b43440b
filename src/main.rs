use log::error;
use product_store::ProductStore;
use serde_json::{json, Map, Value};
use std::env;

fn fields(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| "products.json".to_string());
    let store = ProductStore::new(&path);

    // Failed operations are logged and the sequence keeps going.
    if let Err(err) = store.add(fields(json!({
        "title": "Producto 1",
        "description": "Color red",
        "price": 10,
        "thumbnail": "img1.png",
        "code": "001",
        "stock": 5,
    }))) {
        error!("{err}");
    }

    let all_products = store.list();
    println!("{}", serde_json::to_string_pretty(&all_products)?);

    let product_by_id = store.get_by_id(2);
    println!("{}", serde_json::to_string_pretty(&product_by_id)?);

    if let Err(err) = store.update(
        2,
        fields(json!({
            "title": "Producto 2",
            "description": "Color blue",
            "price": 15,
            "thumbnail": "img2.png",
            "code": "001",
            "stock": 10,
        })),
    ) {
        error!("{err}");
    }

    if let Err(err) = store.delete(1) {
        error!("{err}");
    }

    Ok(())
}
