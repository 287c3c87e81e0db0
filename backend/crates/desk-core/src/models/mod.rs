pub mod deadline_format;
pub mod inbox_entry;
pub mod new_ticket;
pub mod personal_view;
pub mod received_ticket_view;
pub mod sent_ticket_view;
pub mod ticket;
pub mod ticket_aggregate;
pub mod ticket_filter;
pub mod ticket_grade;
pub mod ticket_personal;
pub mod ticket_state;
