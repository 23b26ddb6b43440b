use std::io;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("code {0} already in use")]
    DuplicateCode(Value),
    #[error("product {0} not found")]
    NotFound(u64),
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_lists_every_field() {
        let err = StoreError::MissingFields(vec!["title", "stock"]);
        assert_eq!(err.to_string(), "missing required fields: title, stock");
    }

    #[test]
    fn duplicate_code_shows_the_value() {
        let err = StoreError::DuplicateCode(json!("001"));
        assert_eq!(err.to_string(), "code \"001\" already in use");
    }
}
