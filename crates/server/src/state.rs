use std::sync::Arc;

use service::marketing_status::{MarketingStatusRepository, MarketingStatusService};

/// Shared router state. The repository is the only mutable thing behind it.
#[derive(Clone)]
pub struct AppState {
    pub marketing_status: Arc<MarketingStatusService<dyn MarketingStatusRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn MarketingStatusRepository>) -> Self {
        Self { marketing_status: Arc::new(MarketingStatusService::new(repo)) }
    }
}
