//! The browsing session: one catalog, one query, one pipeline.
//!
//! Every user interaction goes through [`Session::handle`] as a
//! [`QueryEvent`]. The session updates its query with the pure reducer and
//! then either recomputes immediately or, for search typing, waits for input
//! to go quiet before recomputing in [`Session::poll`]. Nothing is computed
//! until the catalog load has finished.

use crate::catalog::Catalog;
use crate::config::BrowseConfig;
use crate::debounce::Debouncer;
use crate::engine::{self, FilterOutcome};
use crate::error::{CatalogError, SessionError};
use crate::facet::FacetIndex;
use crate::query::{QueryEvent, QueryReducer, QueryState};
use std::time::Instant;
use tracing::{debug, info, warn};

static EMPTY_CATALOG: Catalog = Catalog::empty();

/// Where the one-time catalog load stands.
#[derive(Debug, Default)]
pub enum CatalogPhase {
    /// The catalog has not arrived yet. No results can be computed.
    #[default]
    Loading,
    Ready(Catalog),
    /// The load failed. The session behaves as if the catalog were empty.
    Failed { message: String },
}

impl CatalogPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogPhase::Loading)
    }

    /// The catalog results are computed over, once loading has finished.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogPhase::Loading => None,
            CatalogPhase::Ready(catalog) => Some(catalog),
            CatalogPhase::Failed { .. } => Some(&EMPTY_CATALOG),
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            CatalogPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Owns the single mutable [`QueryState`] and drives recomputation.
#[derive(Debug)]
pub struct Session {
    phase: CatalogPhase,
    facets: FacetIndex,
    query: QueryState,
    reducer: QueryReducer,
    debouncer: Debouncer,
    recomputes: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&BrowseConfig::default())
    }
}

impl Session {
    /// Creates a session waiting for its catalog.
    pub fn new(config: &BrowseConfig) -> Self {
        let baseline = config.baseline_query();
        Self {
            phase: CatalogPhase::Loading,
            facets: FacetIndex::default(),
            query: baseline.clone(),
            reducer: QueryReducer::new(baseline),
            debouncer: Debouncer::new(config.debounce()),
            recomputes: 0,
        }
    }

    /// Creates a session over an already loaded catalog.
    pub fn with_catalog(config: &BrowseConfig, catalog: Catalog) -> Self {
        let mut session = Self::new(config);
        session.install(catalog);
        session
    }

    /// Completes the one-time catalog load.
    ///
    /// A failed load is recovered here: the session enters
    /// [`CatalogPhase::Failed`] and computes over an empty catalog.
    pub fn finish_load(&mut self, result: Result<Catalog, CatalogError>) -> Result<(), SessionError> {
        if !self.phase.is_loading() {
            return Err(SessionError::AlreadyLoaded);
        }
        match result {
            Ok(catalog) => self.install(catalog),
            Err(e) => {
                warn!("catalog load failed: {}", e);
                self.phase = CatalogPhase::Failed {
                    message: e.to_string(),
                };
            }
        }
        Ok(())
    }

    fn install(&mut self, catalog: Catalog) {
        self.facets = FacetIndex::build(&catalog);
        info!(recipes = catalog.len(), "catalog ready");
        self.phase = CatalogPhase::Ready(catalog);
    }

    pub fn phase(&self) -> &CatalogPhase {
        &self.phase
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facets
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn reducer(&self) -> &QueryReducer {
        &self.reducer
    }

    /// Whether a debounced recompute is waiting for input to go quiet.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// How many times results have been computed.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Applies an event to the query.
    ///
    /// Returns fresh results when the event recomputes immediately. Returns
    /// `None` while the catalog is loading, or when the recompute was deferred
    /// until input goes quiet (see [`Session::poll`]).
    pub fn handle(&mut self, event: QueryEvent, now: Instant) -> Option<FilterOutcome<'_>> {
        let debounced = event.is_debounced();
        debug!(?event, "query event");
        self.reducer.dispatch(&mut self.query, event);

        if self.phase.is_loading() {
            return None;
        }
        if debounced {
            self.debouncer.schedule(now);
            return None;
        }
        self.debouncer.cancel();
        self.recompute().ok()
    }

    /// Runs a deferred recompute once its quiet interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<FilterOutcome<'_>> {
        if self.phase.is_loading() || !self.debouncer.fire(now) {
            return None;
        }
        self.recompute().ok()
    }

    /// Runs a deferred recompute right away, e.g. when the user submits the search.
    pub fn flush(&mut self) -> Option<FilterOutcome<'_>> {
        if self.phase.is_loading() || !self.debouncer.is_pending() {
            return None;
        }
        self.debouncer.cancel();
        self.recompute().ok()
    }

    /// Computes results for the current query without touching the pipeline.
    pub fn results(&self) -> Result<FilterOutcome<'_>, SessionError> {
        let catalog = self.phase.catalog().ok_or(SessionError::CatalogNotLoaded)?;
        Ok(engine::filter(catalog, &self.query))
    }

    fn recompute(&mut self) -> Result<FilterOutcome<'_>, SessionError> {
        self.recomputes += 1;
        let outcome = self.results()?;
        debug!(count = outcome.count, "recomputed results");
        Ok(outcome)
    }
}
