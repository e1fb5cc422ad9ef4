//! Overpass API response structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Interpreter response; only `elements` is read
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// A node, way or relation returned by the interpreter
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OverpassElement {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    /// Only set on nodes; ways and relations carry a `center` instead
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl OverpassElement {
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// First present tag among `keys`; an empty value still counts as present
    #[must_use]
    pub fn first_tag(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.tag(key))
    }

    /// Display name: `name`, else `operator`, skipping empty values
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        ["name", "operator"]
            .iter()
            .filter_map(|key| self.tag(key))
            .find(|value| !value.is_empty())
    }
}
