use crate::{PersonalView, TicketAggregate, TicketGrade, deadline_format};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Writer-side view: the ticket plus every receiver's status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentTicketView {
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
    pub personals: Vec<PersonalView>,
}

impl From<TicketAggregate> for SentTicketView {
    fn from(aggregate: TicketAggregate) -> Self {
        let TicketAggregate { ticket, personals } = aggregate;
        Self {
            tno: ticket.tno,
            title: ticket.title,
            content: ticket.content,
            purpose: ticket.purpose,
            requirement: ticket.requirement,
            grade: ticket.grade,
            deadline: ticket.deadline,
            birth: ticket.birth.timestamp(),
            writer: ticket.writer,
            personals: personals.into_iter().map(PersonalView::from).collect(),
        }
    }
}
