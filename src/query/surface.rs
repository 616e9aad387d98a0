use super::{QueryEvent, QueryReducer, QueryState};

/// Which control layout a surface represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// The compact bar. Every edit is forwarded to the shared query at once.
    Compact,
    /// The expanded panel. Edits stay local until the user applies them.
    Expanded,
}

/// One set of input controls with its own transient selections.
///
/// Both surfaces write to the same shared [`QueryState`] and the last writer
/// wins. A surface's local draft is only reconciled with the shared state
/// when it is explicitly applied or re-synced.
#[derive(Debug, Clone)]
pub struct ControlSurface {
    kind: SurfaceKind,
    draft: QueryState,
    dirty: bool,
}

impl ControlSurface {
    /// Creates a surface showing the current shared state.
    pub fn new(kind: SurfaceKind, shared: &QueryState) -> Self {
        Self {
            kind,
            draft: shared.clone(),
            dirty: false,
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// The selections currently displayed by this surface.
    pub fn draft(&self) -> &QueryState {
        &self.draft
    }

    /// Whether the draft holds edits that were not applied yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records an edit made on this surface.
    ///
    /// A compact surface returns the event so the caller dispatches it to the
    /// shared state right away. An expanded surface keeps it local and
    /// returns `None`.
    pub fn edit(&mut self, reducer: &QueryReducer, event: QueryEvent) -> Option<QueryEvent> {
        reducer.dispatch(&mut self.draft, event.clone());
        match self.kind {
            SurfaceKind::Compact => Some(event),
            SurfaceKind::Expanded => {
                self.dirty = true;
                None
            }
        }
    }

    /// Produces the event that copies this surface's draft into the shared state.
    pub fn apply(&mut self) -> QueryEvent {
        self.dirty = false;
        QueryEvent::Apply(Box::new(self.draft.clone()))
    }

    /// Discards local edits and shows the shared state again.
    pub fn resync(&mut self, shared: &QueryState) {
        self.draft = shared.clone();
        self.dirty = false;
    }
}
