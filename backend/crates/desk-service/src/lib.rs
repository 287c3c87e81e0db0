pub mod error;
pub mod query;
pub mod request_context;
pub mod request_logging;
pub mod services;
pub mod ticket_draft;
pub mod ticket_validator;


pub use error::{Result, Result as ServiceResult, ServiceError};
pub use query::{FilterParams, PageParams};
pub use request_context::RequestContext;
pub use services::personal_ticket_service::PersonalTicketService;
pub use services::ticket_service::TicketService;
pub use ticket_draft::TicketDraft;
pub use ticket_validator::TicketValidator;
