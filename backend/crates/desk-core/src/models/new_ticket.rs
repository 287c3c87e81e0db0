use crate::TicketGrade;

use chrono::NaiveDateTime;

/// Validated input for creating a ticket and its personal records.
///
/// `receivers` is non-empty, trimmed and free of duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub writer: String,
    pub title: String,
    pub content: String,
    pub purpose: String,
    pub requirement: String,
    pub grade: TicketGrade,
    pub deadline: NaiveDateTime,
    pub receivers: Vec<String>,
}
