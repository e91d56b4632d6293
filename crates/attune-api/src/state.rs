use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use attune_core::models::report::IndividualData;

/// Shared application state, injected into all route handlers via Axum
/// state. Reports are kept in memory, keyed by submission id.
#[derive(Clone, Default)]
pub struct AppState {
    pub reports: Arc<RwLock<HashMap<Uuid, IndividualData>>>,
}
