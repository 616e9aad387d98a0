//! View models for the presentation layer.
//!
//! These types carry display text only. Rendering them into widgets is up to
//! the caller.

use crate::engine::FilterOutcome;
use crate::facet::{Facet, FacetIndex};
use crate::media::PopupMedia;
use crate::query::{QueryState, Selection};
use crate::recipe::Recipe;
use crate::session::{CatalogPhase, Session};

/// Label of the choice option that leaves a facet unconstrained.
pub const ANY_OPTION_LABEL: &str = "All";
pub const NO_MATCHES_MESSAGE: &str = "No recipes found matching your filters.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load recipes.";
pub const LOADING_MESSAGE: &str = "Loading recipes...";

/// One recipe as displayed in the results grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub title: String,
    /// Cooking time badge, e.g. `"18m"`.
    pub time_badge: String,
    /// `"{diet} | {mode} | {cuisine}"`.
    pub meta: String,
    pub category: String,
    /// `"Accessory: ..."`, only when the recipe lists accessories.
    pub accessory_line: Option<String>,
    /// Stovetop time, e.g. `"Normal: 35 mins"`, when known.
    pub conventional_time: Option<String>,
    pub image: String,
    pub popup: Option<PopupMedia>,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        let diet = recipe.diet.map(|d| d.label()).unwrap_or_default();
        Self {
            title: recipe.name.clone(),
            time_badge: recipe
                .cooking_time()
                .map_or_else(|| "-".to_string(), |m| format!("{}m", m)),
            meta: format!("{} | {} | {}", diet, recipe.mode, recipe.cuisine),
            category: recipe.category.clone(),
            accessory_line: (!recipe.accessories.is_empty())
                .then(|| format!("Accessory: {}", recipe.accessories)),
            conventional_time: recipe
                .time
                .conventional
                .map(|m| format!("Normal: {} mins", m)),
            image: recipe.image.clone(),
            popup: recipe.popup.clone(),
        }
    }
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Loading,
    LoadFailed { message: String },
    Empty,
    Cards {
        count_label: String,
        cards: Vec<RecipeCard>,
    },
}

impl ResultsView {
    /// Builds the view for a computed outcome.
    pub fn from_outcome(outcome: &FilterOutcome<'_>) -> Self {
        if outcome.is_empty() {
            return ResultsView::Empty;
        }
        ResultsView::Cards {
            count_label: count_label(outcome.count),
            cards: outcome.iter().map(RecipeCard::from).collect(),
        }
    }

    /// Builds the view for the session's current state.
    pub fn for_session(session: &Session) -> Self {
        match session.phase() {
            CatalogPhase::Loading => ResultsView::Loading,
            CatalogPhase::Failed { .. } => ResultsView::LoadFailed {
                message: LOAD_FAILED_MESSAGE.to_string(),
            },
            CatalogPhase::Ready(_) => session
                .results()
                .map(|outcome| Self::from_outcome(&outcome))
                .unwrap_or(ResultsView::Loading),
        }
    }

    /// The status message shown instead of cards, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ResultsView::Loading => Some(LOADING_MESSAGE),
            ResultsView::LoadFailed { message } => Some(message),
            ResultsView::Empty => Some(NO_MATCHES_MESSAGE),
            ResultsView::Cards { .. } => None,
        }
    }
}

/// `"1 Recipe Found"` / `"N Recipes Found"`.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 Recipe Found".to_string()
    } else {
        format!("{} Recipes Found", count)
    }
}

/// One entry in a facet's choice control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub selection: Selection<String>,
}

/// The choice control for one facet: "All" followed by every observed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    pub facet: Facet,
    pub options: Vec<ChoiceOption>,
}

impl FacetOptions {
    pub fn new(facet: Facet, index: &FacetIndex) -> Self {
        let options = std::iter::once(ChoiceOption {
            label: ANY_OPTION_LABEL.to_string(),
            selection: Selection::Any,
        })
        .chain(index.values(facet).iter().map(|value| ChoiceOption {
            label: value.clone(),
            selection: Selection::Only(value.clone()),
        }))
        .collect();
        Self { facet, options }
    }

    /// Options for every facet, in [`Facet::ALL`] order.
    pub fn all(index: &FacetIndex) -> Vec<Self> {
        Facet::ALL.iter().map(|&f| Self::new(f, index)).collect()
    }

    /// The selection behind the option at `position`.
    pub fn selection_at(&self, position: usize) -> Option<&Selection<String>> {
        self.options.get(position).map(|o| &o.selection)
    }

    /// Position of the option matching the query's current selection.
    ///
    /// A selected value that is no longer offered maps to `None`.
    pub fn position_of(&self, query: &QueryState) -> Option<usize> {
        let current = query.selection(self.facet);
        self.options.iter().position(|o| match (&o.selection, &current) {
            (Selection::Any, Selection::Any) => true,
            (Selection::Only(value), Selection::Only(selected)) => value == selected,
            _ => false,
        })
    }
}
