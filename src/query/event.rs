use super::{QueryState, Selection, SortOrder};
use crate::facet::Facet;
use crate::recipe::DietClass;
use tracing::{debug, warn};

/// A single user interaction that changes the query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent {
    /// Replace the free-text search term.
    SetSearch(String),
    SetDiet(Selection<DietClass>),
    /// Select a value for a facet by its displayed text. For [`Facet::Diet`]
    /// the text is parsed into a [`DietClass`].
    SetFacet {
        facet: Facet,
        selection: Selection<String>,
    },
    SetMaxTime(u32),
    SetSort(SortOrder),
    ToggleSort,
    AddIngredient(String),
    RemoveIngredient(String),
    /// Reset every selection to the reducer's baseline.
    Clear,
    /// Replace the whole query with a control surface's local selections.
    Apply(Box<QueryState>),
}

impl QueryEvent {
    /// Whether recomputation after this event should wait for input to go
    /// quiet. Only free-text typing is rate-limited.
    pub fn is_debounced(&self) -> bool {
        matches!(self, QueryEvent::SetSearch(_))
    }
}

/// Applies [`QueryEvent`]s to a [`QueryState`].
///
/// The reducer is pure: it takes a state and an event and returns the next
/// state. The only thing it holds is the baseline that [`QueryEvent::Clear`]
/// returns to.
#[derive(Debug, Clone, Default)]
pub struct QueryReducer {
    baseline: QueryState,
}

impl QueryReducer {
    pub fn new(baseline: QueryState) -> Self {
        Self { baseline }
    }

    /// The state a cleared query returns to.
    pub fn baseline(&self) -> &QueryState {
        &self.baseline
    }

    /// Computes the state after `event`.
    pub fn reduce(&self, mut state: QueryState, event: QueryEvent) -> QueryState {
        match event {
            QueryEvent::SetSearch(term) => state.search = term,
            QueryEvent::SetDiet(selection) => state.diet = selection,
            QueryEvent::SetFacet { facet, selection } => match facet {
                Facet::Diet => match selection {
                    Selection::Any => state.diet = Selection::Any,
                    Selection::Only(raw) => match raw.parse::<DietClass>() {
                        Ok(diet) => state.diet = Selection::Only(diet),
                        Err(e) => warn!("ignoring diet selection: {}", e),
                    },
                },
                Facet::Mode => state.mode = selection,
                Facet::Cuisine => state.cuisine = selection,
                Facet::Category => state.category = selection,
                Facet::Accessory => state.accessory = selection,
            },
            QueryEvent::SetMaxTime(minutes) => state.max_time = minutes,
            QueryEvent::SetSort(order) => state.sort = order,
            QueryEvent::ToggleSort => state.sort = state.sort.toggled(),
            QueryEvent::AddIngredient(raw) => {
                let ingredient = raw.trim().to_lowercase();
                if !ingredient.is_empty() && !state.ingredients.contains(&ingredient) {
                    state.ingredients.push(ingredient);
                }
            }
            QueryEvent::RemoveIngredient(raw) => {
                let ingredient = raw.trim().to_lowercase();
                state.ingredients.retain(|i| *i != ingredient);
            }
            QueryEvent::Clear => {
                debug!("query cleared");
                state = self.baseline.clone();
            }
            QueryEvent::Apply(draft) => state = *draft,
        }
        state
    }

    /// Applies `event` to `state` in place.
    pub fn dispatch(&self, state: &mut QueryState, event: QueryEvent) {
        let current = std::mem::take(state);
        *state = self.reduce(current, event);
    }
}
