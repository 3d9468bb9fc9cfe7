//! Shared application state for all routes.

use crate::service::NewsStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected once at startup; handlers never reach for a global connection.
    pub store: Arc<dyn NewsStore>,
}

impl AppState {
    pub fn new(store: impl NewsStore + 'static) -> Self {
        AppState { store: Arc::new(store) }
    }
}
