pub mod error;
pub mod received;
pub mod sent;
