use std::sync::Arc;

use scoring::{CompetitionStore, LiveStandings};

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CompetitionStore>,
    pub standings: Arc<LiveStandings>,
}

impl AppState {
    /// Must be called from within a tokio runtime.
    pub fn new(store: CompetitionStore) -> Self {
        let standings = LiveStandings::spawn(store.subscribe());
        Self {
            store: Arc::new(store),
            standings: Arc::new(standings),
        }
    }
}
