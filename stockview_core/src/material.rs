use serde::{Deserialize, Serialize};

use std::fmt;

/// Ordered sequence of materials, as supplied by the store
pub type MaterialList = Vec<Material>;

/// Usage indicator attached to a material.
/// Input files may carry it as a number or as free text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UsageValue {
    Count(i64),
    Amount(f64),
    Text(String),
}

impl fmt::Display for UsageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageValue::Count(count) => write!(f, "{count}"),
            UsageValue::Amount(amount) => write!(f, "{amount}"),
            UsageValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for UsageValue {
    fn from(value: &str) -> Self {
        UsageValue::Text(value.to_string())
    }
}

impl From<String> for UsageValue {
    fn from(value: String) -> Self {
        UsageValue::Text(value)
    }
}

impl From<i64> for UsageValue {
    fn from(value: i64) -> Self {
        UsageValue::Count(value)
    }
}

impl From<f64> for UsageValue {
    fn from(value: f64) -> Self {
        UsageValue::Amount(value)
    }
}

/// A material record.
///
/// Every attribute is optional so that malformed input records can still be
/// loaded and displayed. Missing attributes are rendered as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<UsageValue>,
}

impl Material {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        used: impl Into<UsageValue>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            used: Some(used.into()),
        }
    }

    pub fn id_label(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn name_label(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn used_label(&self) -> String {
        self.used
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
