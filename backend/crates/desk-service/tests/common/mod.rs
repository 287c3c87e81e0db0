#![allow(dead_code)]

use desk_config::{PagingConfig, ValidationConfig};
use desk_core::SentTicketView;
use desk_service::{PersonalTicketService, RequestContext, TicketDraft, TicketService};

use sqlx::SqlitePool;

pub struct TestServices {
    pub pool: SqlitePool,
    pub tickets: TicketService,
    pub inbox: PersonalTicketService,
}

/// Both services over one in-memory database with default limits
pub async fn create_services() -> TestServices {
    let pool = desk_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    services_over(pool)
}

/// Both services over an existing pool with default limits
pub fn services_over(pool: SqlitePool) -> TestServices {
    TestServices {
        tickets: TicketService::new(
            pool.clone(),
            PagingConfig::default(),
            ValidationConfig::default(),
        ),
        inbox: PersonalTicketService::new(
            pool.clone(),
            PagingConfig::default(),
            ValidationConfig::default(),
        ),
        pool,
    }
}

pub fn ctx(actor: &str) -> RequestContext {
    RequestContext::new(actor)
}

pub fn draft(title: &str, receivers: &[&str]) -> TicketDraft {
    TicketDraft {
        title: Some(title.to_string()),
        content: Some("Details".to_string()),
        purpose: Some("Purpose".to_string()),
        requirement: Some("Requirement".to_string()),
        grade: Some("MIDDLE".to_string()),
        deadline: Some("2026-12-01 18:00".to_string()),
        receivers: Some(receivers.iter().map(|r| r.to_string()).collect()),
    }
}

/// Create a ticket through the service, panicking on failure
pub async fn create(
    services: &TestServices,
    writer: &str,
    title: &str,
    receivers: &[&str],
) -> SentTicketView {
    services
        .tickets
        .create(&ctx(writer), Some(writer), draft(title, receivers))
        .await
        .expect("Failed to create ticket")
}
