pub mod change_state_query;
pub mod list_received_query;
pub mod read_received_query;
pub mod received_tickets;
