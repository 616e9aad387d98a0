//! Distinct facet values for populating choice controls.

use crate::catalog::Catalog;
use crate::recipe::Recipe;
use ahash::AHashMap;
use itertools::Itertools;
use std::fmt;

/// A filterable attribute of a recipe with a closed set of observed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    /// Only recognised diet classes are offered. A record whose diet text
    /// could not be read has no diet value and contributes nothing here.
    Diet,
    Mode,
    Cuisine,
    Category,
    Accessory,
}

impl Facet {
    pub const ALL: [Facet; 5] = [
        Facet::Diet,
        Facet::Mode,
        Facet::Cuisine,
        Facet::Category,
        Facet::Accessory,
    ];

    /// The column heading used by the catalog source.
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Diet => "Veg/Non Veg",
            Facet::Mode => "Cooking Mode",
            Facet::Cuisine => "Cuisine",
            Facet::Category => "Category",
            Facet::Accessory => "Accessories",
        }
    }

    /// Whether a record can carry several values for this facet.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, Facet::Accessory)
    }

    /// The values a single recipe takes for this facet, as stored.
    pub fn values_of<'a>(&self, recipe: &'a Recipe) -> Vec<&'a str> {
        match self {
            Facet::Diet => recipe.diet.iter().map(|d| d.label()).collect(),
            Facet::Mode => vec![recipe.mode.as_str()],
            Facet::Cuisine => vec![recipe.cuisine.as_str()],
            Facet::Category => vec![recipe.category.as_str()],
            Facet::Accessory => recipe.accessories.iter().collect(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The distinct non-blank values `facet` takes across the catalog, in
/// lexicographic (byte) order.
///
/// Single-valued facets keep values exactly as stored so that selecting one
/// matches by equality. Accessory tokens are already split and trimmed.
pub fn distinct_values(catalog: &Catalog, facet: Facet) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|recipe| facet.values_of(recipe))
        .filter(|value| !value.trim().is_empty())
        .sorted_unstable()
        .dedup()
        .map(str::to_owned)
        .collect()
}

/// Distinct values for every facet, computed once per catalog load.
#[derive(Debug, Clone, Default)]
pub struct FacetIndex {
    values: AHashMap<Facet, Vec<String>>,
}

impl FacetIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let values = Facet::ALL
            .iter()
            .map(|&facet| (facet, distinct_values(catalog, facet)))
            .collect();
        Self { values }
    }

    /// The sorted values for a facet. Empty for an empty catalog.
    pub fn values(&self, facet: Facet) -> &[String] {
        self.values.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.values(facet)
            .binary_search_by(|v| v.as_str().cmp(value))
            .is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(Vec::is_empty)
    }
}
