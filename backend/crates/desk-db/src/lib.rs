pub mod connection;
pub mod error;
pub mod owner_scope;
pub mod repositories;


pub use connection::pool::{MIGRATOR, PoolOptions, connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use owner_scope::{OwnerScope, ReceiverScope, WriterScope};
pub use repositories::personal_repository::PersonalRepository;
pub use repositories::ticket_repository::TicketRepository;
