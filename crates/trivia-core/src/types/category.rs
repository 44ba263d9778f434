//! Category records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::scope::CategoryId;

/// A question category. Categories are seeded outside the catalog and only read by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display label, e.g. "Science".
    #[serde(rename = "type")]
    pub kind: String,
}

impl CategoryRecord {
    /// Create a new category record.
    pub fn new(id: impl Into<CategoryId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// Render categories as the `{id: type}` map used by listing responses.
pub fn category_map(categories: &[CategoryRecord]) -> BTreeMap<String, String> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), c.kind.clone()))
        .collect()
}
