use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields every product must carry; values are not type-checked.
pub const REQUIRED_FIELDS: [&str; 6] =
    ["title", "description", "price", "thumbnail", "code", "stock"];

const ID_FIELD: &str = "id";
const CODE_FIELD: &str = "code";

/// A product record: a JSON object with the required fields plus a
/// store-assigned `id`. Extra fields are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    fields: Map<String, Value>,
}

impl Product {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn id(&self) -> Option<u64> {
        self.fields.get(ID_FIELD).and_then(Value::as_u64)
    }

    pub fn set_id(&mut self, id: u64) {
        self.fields.insert(ID_FIELD.to_string(), Value::from(id));
    }

    pub fn code(&self) -> Option<&Value> {
        self.fields.get(CODE_FIELD)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Required fields not present on this record, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.fields.contains_key(*field))
            .collect()
    }

    /// Shallow merge: every entry in `patch` overwrites the matching field.
    /// An `id` entry in the patch overwrites the record's id too.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (field, value) in patch {
            self.fields.insert(field, value);
        }
    }
}

impl From<Map<String, Value>> for Product {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
