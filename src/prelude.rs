//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the saji crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use saji::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("recipes_updated.json")?;
//! let facets = FacetIndex::build(&catalog);
//! println!("Cuisines: {:?}", facets.values(Facet::Cuisine));
//!
//! let reducer = QueryReducer::default();
//! let query = reducer.reduce(QueryState::default(), QueryEvent::SetSearch("gravy".into()));
//! let outcome = filter(&catalog, &query);
//! println!("{} recipes found", outcome.count);
//! # Ok(())
//! # }
//! ```

// Catalog and records
pub use crate::catalog::Catalog;
pub use crate::recipe::{AccessoryList, CookingTime, DietClass, IntoRecipe, RawRecipe, Recipe};

// Facets, query and engine
pub use crate::engine::{FilterOutcome, filter};
pub use crate::facet::{Facet, FacetIndex};
pub use crate::query::{
    ControlSurface, QueryEvent, QueryReducer, QueryState, Selection, SortOrder, SurfaceKind,
};

// Session pipeline and presentation
pub use crate::config::{AppConfig, BrowseConfig};
pub use crate::session::{CatalogPhase, Session};
pub use crate::view::{FacetOptions, RecipeCard, ResultsView};

// Media
pub use crate::media::{MediaKind, PopupMedia};

// Error types
pub use crate::error::{CatalogError, ConfigError, MediaError, SessionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
