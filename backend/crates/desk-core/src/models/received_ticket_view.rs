use crate::{InboxEntry, TicketGrade, TicketState, deadline_format};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Receiver-side view: shared ticket fields plus the requester's own status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivedTicketView {
    pub pno: i64,
    pub tno: i64,
    pub title: String,
    pub content: String,
    pub purpose: String,
    pub requirement: String,
    pub grade: TicketGrade,
    #[serde(with = "deadline_format")]
    pub deadline: NaiveDateTime,
    pub birth: i64,
    pub writer: String,
    pub receiver: String,
    pub read: bool,
    pub state: TicketState,
}

impl From<InboxEntry> for ReceivedTicketView {
    fn from(entry: InboxEntry) -> Self {
        let InboxEntry { ticket, personal } = entry;
        Self {
            pno: personal.pno,
            tno: ticket.tno,
            title: ticket.title,
            content: ticket.content,
            purpose: ticket.purpose,
            requirement: ticket.requirement,
            grade: ticket.grade,
            deadline: ticket.deadline,
            birth: ticket.birth.timestamp(),
            writer: ticket.writer,
            receiver: personal.receiver,
            read: personal.read,
            state: personal.state,
        }
    }
}
