use desk_config::{PagingConfig, ValidationConfig};
use desk_service::{PersonalTicketService, TicketService};

use sqlx::SqlitePool;

/// Shared handler state; cheap to clone
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tickets: TicketService,
    pub inbox: PersonalTicketService,
}

impl AppState {
    pub fn new(pool: SqlitePool, paging: PagingConfig, validation: ValidationConfig) -> Self {
        Self {
            tickets: TicketService::new(pool.clone(), paging.clone(), validation.clone()),
            inbox: PersonalTicketService::new(pool.clone(), paging, validation),
            pool,
        }
    }
}
