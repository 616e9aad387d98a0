//! # Saji - Recipe Catalog Filtering Engine
//!
//! **Saji** reduces a static recipe catalog to the subset a user is looking
//! for. It holds the query a browsing widget edits (free-text search,
//! single-select facets, a cooking-time ceiling, sort direction), keeps it
//! consistent across two control layouts, and recomputes the sorted result
//! on every change.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Catalog**: Parse the catalog JSON with [`Catalog::from_file`](catalog::Catalog::from_file),
//!     or convert your own records by implementing [`IntoRecipe`](recipe::IntoRecipe).
//! 2.  **Extract Facets**: Build a [`FacetIndex`](facet::FacetIndex) once to populate choice controls.
//! 3.  **Edit the Query**: Express every interaction as a [`QueryEvent`](query::QueryEvent) and
//!     run it through a [`QueryReducer`](query::QueryReducer).
//! 4.  **Filter**: Call [`filter`](engine::filter) with the catalog and the query. It is pure;
//!     equal inputs always give the same ordered output.
//!
//! A [`Session`](session::Session) wires these steps together, gates them on the
//! catalog load and debounces search typing.
//!
//! ## Quick Start
//!
//! ```rust
//! use saji::prelude::*;
//! use std::time::Instant;
//!
//! let json = r#"[
//!     {"Recipe Name": "Quinoa Boiled", "Veg/Non Veg": "VEG", "Cooking Mode": "Boiling",
//!      "Cuisine": "Continental", "Category": "Main Course", "Cooking Time": 20,
//!      "Accessories": "Pot"},
//!     {"Recipe Name": "Tomato Gravy", "Veg/Non Veg": "VEG", "Cooking Mode": "Sauteing",
//!      "Cuisine": "Indian", "Category": "Base Gravy", "Cooking Time": 18,
//!      "Accessories": "Pan"}
//! ]"#;
//!
//! let mut session = Session::new(&BrowseConfig::default());
//! session.finish_load(Catalog::from_json_str(json)).unwrap();
//!
//! let outcome = session
//!     .handle(QueryEvent::SetMaxTime(19), Instant::now())
//!     .unwrap();
//! assert_eq!(outcome.count, 1);
//! assert_eq!(outcome.names(), vec!["Tomato Gravy"]);
//! ```

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod facet;
pub mod media;
pub mod prelude;
pub mod query;
pub mod recipe;
pub mod session;
pub mod view;
