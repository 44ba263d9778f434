//! Substring search and category scoping.

use super::QuestionFields;
use crate::types::CategoryScope;

/// Records whose question text contains `term`, ignoring case.
///
/// An empty term matches everything. Relative order is preserved.
pub fn search<T: QuestionFields + Clone>(records: &[T], term: &str) -> Vec<T> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Records inside `scope`. `CategoryScope::All` returns every record.
pub fn by_category<T: QuestionFields + Clone>(records: &[T], scope: CategoryScope) -> Vec<T> {
    match scope {
        CategoryScope::All => records.to_vec(),
        CategoryScope::Only(_) => records
            .iter()
            .filter(|r| scope.contains(r.category()))
            .cloned()
            .collect(),
    }
}
