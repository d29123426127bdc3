use std::sync::Arc;

use crate::store::DataStore;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
}

impl AppState {
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
