pub mod personal_repository;
pub mod ticket_repository;

pub(crate) mod listing;
pub(crate) mod rows;
