use crate::{
    AppState, change_received_state, create_ticket, delete_sent_ticket, health,
    list_received_tickets, list_sent_tickets, read_received_by_pno, read_received_by_tno,
    read_sent_ticket,
};

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Writer side
        .route("/api/tickets", post(create_ticket))
        .route("/api/tickets/sent", get(list_sent_tickets))
        .route(
            "/api/tickets/sent/{tno}",
            get(read_sent_ticket).delete(delete_sent_ticket),
        )
        .route("/api/tickets/{tno}", delete(delete_sent_ticket))
        // Receiver side
        .route("/api/tickets/received", get(list_received_tickets))
        .route(
            "/api/tickets/received/by-pno/{pno}",
            get(read_received_by_pno),
        )
        .route(
            "/api/tickets/received/by-tno/{tno}",
            get(read_received_by_tno),
        )
        .route(
            "/api/tickets/received/{pno}/state",
            patch(change_received_state),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
