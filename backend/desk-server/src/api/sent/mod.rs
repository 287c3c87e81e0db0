pub mod create_ticket_request;
pub mod list_sent_query;
pub mod sent_tickets;
pub mod writer_query;
