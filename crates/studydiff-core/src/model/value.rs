//! Comparable field values

use serde::{Deserialize, Serialize};

use super::ids::ModuleId;

/// A tracked field value, normalised for comparison
///
/// Equality is plain value equality: `Null == Null`, and references compare
/// by the referenced id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Flag(bool),
    Reference(String),
}

impl FieldValue {
    pub fn text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Null, |s| FieldValue::Text(s.to_string()))
    }

    pub fn integer(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Null, |n| FieldValue::Integer(i64::from(n)))
    }

    pub fn flag(value: bool) -> Self {
        FieldValue::Flag(value)
    }

    pub fn module(value: Option<&ModuleId>) -> Self {
        value
            .filter(|m| !m.is_blank())
            .map_or(FieldValue::Null, |m| FieldValue::Reference(m.as_str().to_string()))
    }

    /// String form written to a changelog row; `None` for `Null`
    pub fn render(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) | FieldValue::Reference(s) => Some(s.clone()),
            FieldValue::Integer(n) => Some(n.to_string()),
            FieldValue::Flag(b) => Some(b.to_string()),
        }
    }
}
