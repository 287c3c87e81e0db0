pub mod personal_ticket_service;
pub mod ticket_service;
