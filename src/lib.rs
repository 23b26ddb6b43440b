//! Flat-file product record manager: a JSON array on disk with
//! add/list/get/update/delete over it.

pub mod error;
pub mod models;
pub mod store;

pub use error::{Result, StoreError};
pub use models::Product;
pub use store::ProductStore;
