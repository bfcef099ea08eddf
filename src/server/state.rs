use std::sync::Arc;

use crate::MatchupService;

/// Shared by every handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MatchupService>,
}

impl AppState {
    pub fn new(service: MatchupService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
