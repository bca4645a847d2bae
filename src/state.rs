//! Shared application state for all routes.

use std::sync::Arc;

use crate::store::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    /// Storage handle. Handlers never see the concrete backend.
    pub store: Arc<dyn CatalogStore>,
}
