pub mod error;
pub mod models;
pub mod paging;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::deadline_format;
pub use models::inbox_entry::InboxEntry;
pub use models::new_ticket::NewTicket;
pub use models::personal_view::PersonalView;
pub use models::received_ticket_view::ReceivedTicketView;
pub use models::sent_ticket_view::SentTicketView;
pub use models::ticket::Ticket;
pub use models::ticket_aggregate::TicketAggregate;
pub use models::ticket_filter::TicketFilter;
pub use models::ticket_grade::TicketGrade;
pub use models::ticket_personal::TicketPersonal;
pub use models::ticket_state::TicketState;
pub use paging::page::Page;
pub use paging::page_request::PageRequest;
pub use paging::sort::{ReceivedSortField, SentSortField, Sort, SortDirection, SortField};
