use crate::TicketState;

use serde::{Deserialize, Serialize};

/// One receiver's copy of a ticket: read flag and workflow state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPersonal {
    pub pno: i64,
    pub tno: i64,
    pub receiver: String,
    pub read: bool,
    pub state: TicketState,
}
