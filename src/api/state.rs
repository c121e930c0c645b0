//! API server state

use std::sync::Arc;

use crate::storage::UserStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// User record store shared by all requests
    pub store: Arc<dyn UserStore>,

    /// Reported by `/version`
    pub version: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, version: impl Into<String>) -> Self {
        Self {
            store,
            version: Arc::from(version.into()),
        }
    }
}
