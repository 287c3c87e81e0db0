use desk_core::{NewTicket, TicketAggregate};
use desk_db::TicketRepository;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    desk_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Insert a ticket in its own committed transaction
pub async fn insert_ticket(pool: &SqlitePool, new_ticket: &NewTicket) -> TicketAggregate {
    insert_ticket_at(pool, new_ticket, Utc::now()).await
}

pub async fn insert_ticket_at(
    pool: &SqlitePool,
    new_ticket: &NewTicket,
    birth: DateTime<Utc>,
) -> TicketAggregate {
    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    let aggregate = TicketRepository::insert(&mut tx, new_ticket, birth)
        .await
        .expect("Failed to insert ticket");
    tx.commit().await.expect("Failed to commit");
    aggregate
}
