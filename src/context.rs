use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::TicketSourceService;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub ticket_source: Arc<dyn TicketSourceService>,
}

impl AppContext {
    pub fn new(config: AppConfig, ticket_source: Arc<dyn TicketSourceService>) -> Self {
        Self {
            config,
            ticket_source,
        }
    }
}
