use product_store::{Product, ProductStore, StoreError};
use serde_json::{json, Map, Value};
use tempfile::TempDir;

fn fields(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn product(code: &str, title: &str) -> Map<String, Value> {
    fields(json!({
        "title": title,
        "description": "Color red",
        "price": 10,
        "thumbnail": "img1.png",
        "code": code,
        "stock": 5,
    }))
}

#[test]
fn full_crud_lifecycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");
    let store = ProductStore::new(&path);

    assert!(store.list().is_empty());

    store.add(product("001", "Producto 1")).unwrap();
    store.add(product("002", "Producto 2")).unwrap();

    let err = store.add(product("001", "Producto 3")).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateCode(_)));
    assert_eq!(store.list().len(), 2);

    store
        .update(2, fields(json!({ "price": 15, "description": "Color blue" })))
        .unwrap();
    let updated = store.get_by_id(2).unwrap();
    assert_eq!(updated.get("price"), Some(&json!(15)));
    assert_eq!(updated.get("title"), Some(&json!("Producto 2")));

    store.delete(1).unwrap();
    assert!(store.get_by_id(1).is_none());

    // a fresh store over the same file sees the persisted state
    let reopened = ProductStore::new(&path);
    let ids: Vec<_> = reopened.list().iter().filter_map(Product::id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn on_disk_shape_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");
    let store = ProductStore::new(&path);

    let mut input = product("001", "Producto 1");
    input.insert("tags".to_string(), json!(["sale", "new"]));
    store.add(input.clone()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let on_disk: Vec<Map<String, Value>> = serde_json::from_str(&raw).unwrap();

    let mut expected = input;
    expected.insert("id".to_string(), json!(1));
    assert_eq!(on_disk, vec![expected]);
}

#[test]
fn id_reset_scenario() {
    let dir = TempDir::new().unwrap();
    let store = ProductStore::new(dir.path().join("products.json"));

    store.add(product("001", "Producto 1")).unwrap();
    assert_eq!(store.list()[0].id(), Some(1));

    store.delete(1).unwrap();
    assert!(store.list().is_empty());

    store.add(product("001", "Producto 1")).unwrap();
    assert_eq!(store.list()[0].id(), Some(1));
}
