use crate::error::CatalogError;
use crate::recipe::{IntoRecipe, RawRecipe, Recipe};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// The file name the catalog is served under.
pub const DEFAULT_CATALOG_FILE: &str = "recipes_updated.json";

/// The immutable, ordered collection of recipes for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// A catalog with no recipes.
    pub const fn empty() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// Builds a catalog from any record type that converts into a [`Recipe`].
    pub fn from_records<R, I>(records: I) -> Self
    where
        R: IntoRecipe,
        I: IntoIterator<Item = R>,
    {
        Self {
            recipes: records.into_iter().map(IntoRecipe::into_recipe).collect(),
        }
    }

    /// Parses the catalog JSON payload.
    ///
    /// The payload must be an array. Elements that are not record objects are
    /// skipped with a warning rather than failing the whole load.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let elements = match value {
            serde_json::Value::Array(elements) => elements,
            other => {
                return Err(CatalogError::NotAnArray {
                    found: json_kind(&other),
                });
            }
        };

        let total = elements.len();
        let recipes: Vec<Recipe> = elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                serde_json::from_value::<RawRecipe>(element)
                    .map_err(|e| warn!(index, "skipping malformed recipe record: {}", e))
                    .ok()
            })
            .map(IntoRecipe::into_recipe)
            .collect();

        if recipes.len() < total {
            warn!(
                skipped = total - recipes.len(),
                total, "some catalog records could not be read"
            );
        }
        Ok(Self { recipes })
    }

    /// Reads and parses a catalog file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(path = %path.display(), recipes = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
