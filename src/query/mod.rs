//! The query state: every filter and sort selection currently in effect.
//!
//! There is exactly one [`QueryState`] per session. It is mutated only
//! through [`QueryEvent`]s run by a [`QueryReducer`], and read by the engine
//! on every recomputation.

pub mod event;
pub mod surface;

pub use event::{QueryEvent, QueryReducer};
pub use surface::{ControlSurface, SurfaceKind};

use crate::facet::Facet;
use crate::recipe::DietClass;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cooking-time threshold a fresh or cleared query starts with.
pub const DEFAULT_MAX_TIME: u32 = 20;

/// A single-select facet selection.
///
/// `Any` means "do not filter on this attribute" and is distinct from every
/// concrete value, including a value that happens to be spelled "All".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    Any,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T> Selection<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::Any => None,
            Selection::Only(v) => Some(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Selection<U> {
        match self {
            Selection::Any => Selection::Any,
            Selection::Only(v) => Selection::Only(f(v)),
        }
    }

    /// `true` when unconstrained, otherwise the result of `test` on the value.
    pub fn admits(&self, test: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(v) => test(v),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::Any, Selection::Only)
    }
}

impl From<&str> for Selection<String> {
    fn from(value: &str) -> Self {
        Selection::Only(value.to_string())
    }
}

/// Direction of the cooking-time sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// All current filter and sort selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Free-text search against recipe names, case-insensitive.
    pub search: String,
    pub diet: Selection<DietClass>,
    pub mode: Selection<String>,
    pub cuisine: Selection<String>,
    pub category: Selection<String>,
    pub accessory: Selection<String>,
    /// Inclusive upper bound on cooking time, in minutes.
    pub max_time: u32,
    pub sort: SortOrder,
    /// Lower-cased ingredient terms; a recipe must match all of them.
    pub ingredients: Vec<String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TIME)
    }
}

impl QueryState {
    /// An unconstrained query with the given time threshold, sorted ascending.
    pub fn new(max_time: u32) -> Self {
        Self {
            search: String::new(),
            diet: Selection::Any,
            mode: Selection::Any,
            cuisine: Selection::Any,
            category: Selection::Any,
            accessory: Selection::Any,
            max_time,
            sort: SortOrder::Ascending,
            ingredients: Vec::new(),
        }
    }

    /// An unconstrained query whose time threshold admits every recipe that
    /// has a cooking time.
    pub fn unbounded() -> Self {
        Self::new(u32::MAX)
    }

    /// The selection for a facet, with the diet class rendered as its label.
    pub fn selection(&self, facet: Facet) -> Selection<&str> {
        match facet {
            Facet::Diet => self.diet.value().map(DietClass::label).into(),
            Facet::Mode => self.mode.value().map(String::as_str).into(),
            Facet::Cuisine => self.cuisine.value().map(String::as_str).into(),
            Facet::Category => self.category.value().map(String::as_str).into(),
            Facet::Accessory => self.accessory.value().map(String::as_str).into(),
        }
    }

    /// Whether any filter narrows the catalog besides the time threshold.
    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.diet.is_any()
            || !self.mode.is_any()
            || !self.cuisine.is_any()
            || !self.category.is_any()
            || !self.accessory.is_any()
            || !self.ingredients.is_empty()
    }
}
