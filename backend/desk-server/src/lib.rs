pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    received::{
        change_state_query::ChangeStateQuery,
        list_received_query::ListReceivedQuery,
        read_received_query::ReadReceivedQuery,
        received_tickets::{
            change_received_state, list_received_tickets, read_received_by_pno,
            read_received_by_tno,
        },
    },
    sent::{
        create_ticket_request::CreateTicketRequest,
        list_sent_query::ListSentQuery,
        sent_tickets::{create_ticket, delete_sent_ticket, list_sent_tickets, read_sent_ticket},
        writer_query::WriterQuery,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
