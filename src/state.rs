use std::sync::Arc;

use crate::application::services::ClickAveragesService;
use crate::domain::providers::MetricsProvider;

#[derive(Clone)]
pub struct AppState {
    pub averages_service: Arc<ClickAveragesService>,
}

impl AppState {
    pub fn new(provider: Arc<dyn MetricsProvider>) -> Self {
        Self {
            averages_service: Arc::new(ClickAveragesService::new(provider)),
        }
    }
}
