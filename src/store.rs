use crate::error::{Result, StoreError};
use crate::models::Product;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Flat-file product store. Every operation re-reads the backing file,
/// works on the full collection in memory, and writes the whole file back
/// on mutation. Nothing is cached between calls.
pub struct ProductStore {
    path: PathBuf,
}

impl ProductStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a product. `fields` must contain every required field; extra
    /// fields are stored as-is. The store assigns the `id` itself and does
    /// not return it; re-fetch via [`list`](Self::list) to see it.
    pub fn add(&self, fields: Map<String, Value>) -> Result<()> {
        let mut product = Product::new(fields);

        let missing = product.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::MissingFields(missing));
        }

        let mut products = self.load();

        if products.iter().any(|p| p.code() == product.code()) {
            let code = product.code().cloned().unwrap_or(Value::Null);
            return Err(StoreError::DuplicateCode(code));
        }

        product.set_id(next_id(&products));
        products.push(product);
        self.save(&products)
    }

    /// All products in insertion order. A missing or unreadable backing
    /// file reads as an empty collection; this never fails the caller.
    pub fn list(&self) -> Vec<Product> {
        self.load()
    }

    pub fn get_by_id(&self, id: u64) -> Option<Product> {
        let product = self.load().into_iter().find(|p| p.id() == Some(id));
        if product.is_none() {
            debug!("product {id} not found");
        }
        product
    }

    /// Shallow-merge `patch` onto the product with this id and persist.
    /// Fields absent from the patch are retained; an `id` key in the patch
    /// overwrites the stored id, and `code` uniqueness is not re-checked.
    pub fn update(&self, id: u64, patch: Map<String, Value>) -> Result<()> {
        let mut products = self.load();
        let index = products
            .iter()
            .position(|p| p.id() == Some(id))
            .ok_or(StoreError::NotFound(id))?;

        products[index].merge(patch);
        self.save(&products)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        let mut products = self.load();
        let index = products
            .iter()
            .position(|p| p.id() == Some(id))
            .ok_or(StoreError::NotFound(id))?;

        products.remove(index);
        self.save(&products)
    }

    /// Like [`list`](Self::list) but surfaces read and parse failures
    /// instead of degrading them to an empty collection.
    fn try_load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn load(&self) -> Vec<Product> {
        match self.try_load() {
            Ok(products) => products,
            Err(err) => {
                warn!("treating product file as empty: {err}");
                Vec::new()
            }
        }
    }

    fn save(&self, products: &[Product]) -> Result<()> {
        let raw = serde_json::to_string_pretty(products).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, raw).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Next id is `1 + max(existing ids)`. Computed from content, so deleting
/// every product resets the sequence to 1.
fn next_id(products: &[Product]) -> u64 {
    1 + products.iter().filter_map(Product::id).max().unwrap_or(0)
}
