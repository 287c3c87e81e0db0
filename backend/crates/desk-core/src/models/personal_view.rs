use crate::{TicketPersonal, TicketState};

use serde::{Deserialize, Serialize};

/// Per-receiver entry inside a sent-view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalView {
    pub pno: i64,
    pub receiver: String,
    pub read: bool,
    pub state: TicketState,
}

impl From<TicketPersonal> for PersonalView {
    fn from(p: TicketPersonal) -> Self {
        Self {
            pno: p.pno,
            receiver: p.receiver,
            read: p.read,
            state: p.state,
        }
    }
}
