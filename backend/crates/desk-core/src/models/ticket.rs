use crate::TicketGrade;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authoring content of a ticket, shared by every receiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub tno: i64,

    pub title: String,
    pub content: String,
    pub purpose: String,
    pub requirement: String,

    pub grade: TicketGrade,
    pub deadline: NaiveDateTime,

    // Audit
    pub birth: DateTime<Utc>,
    pub writer: String,
}
