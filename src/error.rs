use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the recipe catalog.
///
/// None of these are fatal to a session: a failed load is recovered by
/// operating over an empty catalog and showing a status message.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(String),

    #[error("Catalog payload must be a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

/// Errors that can occur when fetching the downloadable bundle for a recipe.
#[derive(Error, Debug, Clone)]
pub enum MediaError {
    #[error("No media bundle named '{0}' is available")]
    NotFound(String),

    #[error("Media bundle '{name}' has unexpected content type: expected {expected}, found {found}")]
    WrongContentType {
        name: String,
        expected: &'static str,
        found: String,
    },

    #[error("Could not read media bundle '{name}': {message}")]
    Io { name: String, message: String },
}

/// Errors that can occur while loading the runtime configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Errors surfaced by a browsing session.
#[derive(Error, Debug, Clone)]
pub enum SessionError {
    #[error("The catalog has not finished loading")]
    CatalogNotLoaded,

    #[error("The catalog is already loaded")]
    AlreadyLoaded,
}
