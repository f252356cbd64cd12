//! Catalog records as served by the remote endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a catalog item.
///
/// The endpoint sends ids as JSON strings, but numeric ids are accepted too and
/// normalized to their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(ItemId(s)),
            Value::Number(n) => Ok(ItemId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "item id must be a string or number, got {}",
                other
            ))),
        }
    }
}

/// A single entry of the entertainment catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Image URL
    pub image: String,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

impl CatalogItem {
    /// Text shown after "Difficulty Level:"; falsy or missing values read "N/A"
    pub fn difficulty_label(&self) -> String {
        match &self.difficulty {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            Some(Value::Bool(true)) => "true".to_string(),
            _ => "N/A".to_string(),
        }
    }
}
