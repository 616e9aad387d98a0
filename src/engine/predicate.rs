use crate::query::{QueryState, Selection};
use crate::recipe::{DietClass, Recipe};

/// A query compiled for evaluation against many records.
///
/// Normalization (trimming and lower-casing the search term and ingredient
/// terms) happens once here instead of once per record.
#[derive(Debug, Clone)]
pub struct Predicate<'q> {
    search: String,
    diet: Selection<DietClass>,
    mode: Selection<&'q str>,
    cuisine: Selection<&'q str>,
    category: Selection<&'q str>,
    accessory: Selection<&'q str>,
    max_time: u32,
    ingredients: Vec<String>,
}

impl<'q> Predicate<'q> {
    pub fn compile(query: &'q QueryState) -> Self {
        Self {
            search: query.search.trim().to_lowercase(),
            diet: query.diet.clone(),
            mode: borrowed(&query.mode),
            cuisine: borrowed(&query.cuisine),
            category: borrowed(&query.category),
            accessory: borrowed(&query.accessory),
            max_time: query.max_time,
            ingredients: query
                .ingredients
                .iter()
                .map(|i| i.trim().to_lowercase())
                .filter(|i| !i.is_empty())
                .collect(),
        }
    }

    /// Whether a recipe passes every criterion of the query.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_search(recipe)
            && self.diet.admits(|d| recipe.diet == Some(*d))
            && self.mode.admits(|m| recipe.mode == *m)
            && self.cuisine.admits(|c| recipe.cuisine == *c)
            && self.category.admits(|c| recipe.category == *c)
            && self.accessory.admits(|a| recipe.accessories.contains(a))
            && self.matches_time(recipe)
            && self.matches_ingredients(recipe)
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        self.search.is_empty() || recipe.name.to_lowercase().contains(&self.search)
    }

    /// A recipe without a usable cooking time never passes the threshold.
    fn matches_time(&self, recipe: &Recipe) -> bool {
        recipe
            .cooking_time()
            .is_some_and(|minutes| minutes <= self.max_time)
    }

    /// Every term must occur in at least one of the recipe's ingredients.
    fn matches_ingredients(&self, recipe: &Recipe) -> bool {
        if self.ingredients.is_empty() {
            return true;
        }
        let lowered: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|i| i.to_lowercase())
            .collect();
        self.ingredients
            .iter()
            .all(|term| lowered.iter().any(|i| i.contains(term.as_str())))
    }
}

fn borrowed(selection: &Selection<String>) -> Selection<&str> {
    selection.value().map(String::as_str).into()
}
