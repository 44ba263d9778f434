//! Category identifiers and quiz/listing scope.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a category.
///
/// Identifiers reach the service either as JSON numbers or as string tokens
/// (`3` and `"3"`); both normalize to the same value here so comparisons are
/// independent of the source representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    /// Reserved id meaning "no category restriction". Never names a real category.
    pub const ALL: CategoryId = CategoryId(0);

    /// Whether this is the "all categories" sentinel.
    pub fn is_all(&self) -> bool {
        *self == Self::ALL
    }

    /// Normalize a loosely typed JSON value (number or numeric string).
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(CategoryId),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        CategoryId(id)
    }
}

impl FromStr for CategoryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(CategoryId)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Number(i64),
    Token(String),
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawCategoryId::deserialize(deserializer)? {
            RawCategoryId::Number(n) => Ok(CategoryId(n)),
            RawCategoryId::Token(s) => s.parse().map_err(|_| {
                serde::de::Error::custom(format!("invalid category id token '{}'", s))
            }),
        }
    }
}

/// Which questions a listing or quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryScope {
    /// Every question, regardless of category.
    #[default]
    All,
    /// Only questions of the given category.
    Only(CategoryId),
}

impl CategoryScope {
    /// Whether a record with `category` falls inside this scope.
    pub fn contains(&self, category: CategoryId) -> bool {
        match self {
            CategoryScope::All => true,
            CategoryScope::Only(id) => *id == category,
        }
    }
}

impl From<CategoryId> for CategoryScope {
    fn from(id: CategoryId) -> Self {
        if id.is_all() {
            CategoryScope::All
        } else {
            CategoryScope::Only(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_tokens_compare_equal() {
        let from_number: CategoryId = serde_json::from_str("3").unwrap();
        let from_token: CategoryId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(from_number, from_token);
        assert_eq!(from_number, CategoryId(3));
    }

    #[test]
    fn test_rejects_non_numeric_token() {
        assert!(serde_json::from_str::<CategoryId>("\"science\"").is_err());
        assert!(serde_json::from_str::<CategoryId>("true").is_err());
    }

    #[test]
    fn test_from_value() {
        assert_eq!(CategoryId::from_value(&serde_json::json!(5)), Some(CategoryId(5)));
        assert_eq!(CategoryId::from_value(&serde_json::json!(" 5 ")), Some(CategoryId(5)));
        assert_eq!(CategoryId::from_value(&serde_json::json!(1.5)), None);
        assert_eq!(CategoryId::from_value(&serde_json::Value::Null), None);
    }

    #[test]
    fn test_sentinel_maps_to_all_scope() {
        assert_eq!(CategoryScope::from(CategoryId::ALL), CategoryScope::All);
        assert_eq!(CategoryScope::from(CategoryId(2)), CategoryScope::Only(CategoryId(2)));
        assert!(CategoryScope::All.contains(CategoryId(99)));
        assert!(!CategoryScope::Only(CategoryId(1)).contains(CategoryId(2)));
    }
}
