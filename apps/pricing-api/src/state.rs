//! Shared application state.
//!
//! One state type per concern would be overkill for two fields; the
//! handlers take the whole state and use what they need.

use crate::cache::ResponseCache;
use tally_db::Database;

/// State shared across all request handlers.
///
/// Cheap to clone: the database wraps a pool and the cache an Arc.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub cache: ResponseCache,
}

impl AppState {
    /// Assembles the state from its parts.
    pub fn new(db: Database, cache: ResponseCache) -> Self {
        AppState { db, cache }
    }
}
