//! The filter/sort engine.
//!
//! [`filter`] is a pure function of a catalog and a query: it has no hidden
//! state, so equal inputs always produce the same ordered output. Every
//! returned record is a reference into the catalog.

mod predicate;
mod sort;

pub use predicate::Predicate;
pub use sort::sort_by_time;

use crate::catalog::Catalog;
use crate::query::QueryState;
use crate::recipe::Recipe;

/// The ordered subset of a catalog that matches a query.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    /// Matching recipes in display order.
    pub records: Vec<&'a Recipe>,
    /// Number of matching recipes.
    pub count: usize,
}

impl<'a> FilterOutcome<'a> {
    fn new(records: Vec<&'a Recipe>) -> Self {
        let count = records.len();
        Self { records, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Recipe> + '_ {
        self.records.iter().copied()
    }

    /// Names of the matching recipes, in order.
    pub fn names(&self) -> Vec<&'a str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Reduces `catalog` to the recipes matching `query`, sorted by cooking time.
///
/// # Example
///
/// ```rust
/// use saji::prelude::*;
///
/// let catalog = Catalog::new(vec![
///     Recipe::new("Quinoa Boiled").with_time(20),
///     Recipe::new("Tomato Gravy").with_time(18),
/// ]);
/// let mut query = QueryState::default();
/// query.max_time = 19;
///
/// let outcome = filter(&catalog, &query);
/// assert_eq!(outcome.names(), vec!["Tomato Gravy"]);
/// ```
pub fn filter<'a>(catalog: &'a Catalog, query: &QueryState) -> FilterOutcome<'a> {
    let predicate = Predicate::compile(query);
    let mut records: Vec<&Recipe> = catalog.iter().filter(|r| predicate.matches(r)).collect();
    sort_by_time(&mut records, query.sort);
    FilterOutcome::new(records)
}
