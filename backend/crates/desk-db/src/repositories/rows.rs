use crate::{DbError, Result as DbErrorResult};

use desk_core::{InboxEntry, Ticket, TicketGrade, TicketPersonal, TicketState};

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;

pub(crate) const TICKET_COLUMNS: &str =
    "t.tno, t.title, t.content, t.purpose, t.requirement, t.grade, t.deadline, t.birth, t.writer";

pub(crate) const PERSONAL_COLUMNS: &str = "p.pno, p.tno, p.receiver, p.is_read, p.state";

pub(crate) const INBOX_COLUMNS: &str = "p.pno, p.receiver, p.is_read, p.state, \
     t.tno, t.title, t.content, t.purpose, t.requirement, t.grade, t.deadline, t.birth, t.writer";

#[derive(Debug, FromRow)]
pub(crate) struct TicketRow {
    pub tno: i64,
    pub title: String,
    pub content: String,
    pub purpose: String,
    pub requirement: String,
    pub grade: String,
    pub deadline: i64,
    pub birth: i64,
    pub writer: String,
}

#[derive(Debug, FromRow)]
pub(crate) struct PersonalRow {
    pub pno: i64,
    pub tno: i64,
    pub receiver: String,
    pub is_read: bool,
    pub state: String,
}

#[derive(Debug, FromRow)]
pub(crate) struct InboxRow {
    pub pno: i64,
    pub receiver: String,
    pub is_read: bool,
    pub state: String,
    #[sqlx(flatten)]
    pub ticket: TicketRow,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DbError;

    fn try_from(r: TicketRow) -> DbErrorResult<Self> {
        let grade = TicketGrade::from_str(&r.grade).map_err(|e| {
            DbError::decode(format!("Invalid grade in tickets.grade (tno {}): {}", r.tno, e))
        })?;

        Ok(Ticket {
            tno: r.tno,
            title: r.title,
            content: r.content,
            purpose: r.purpose,
            requirement: r.requirement,
            grade,
            deadline: naive_from_timestamp(r.deadline).ok_or_else(|| {
                DbError::decode(format!("Invalid timestamp in tickets.deadline (tno {})", r.tno))
            })?,
            birth: utc_from_timestamp(r.birth).ok_or_else(|| {
                DbError::decode(format!("Invalid timestamp in tickets.birth (tno {})", r.tno))
            })?,
            writer: r.writer,
        })
    }
}

impl TryFrom<PersonalRow> for TicketPersonal {
    type Error = DbError;

    fn try_from(r: PersonalRow) -> DbErrorResult<Self> {
        Ok(TicketPersonal {
            pno: r.pno,
            tno: r.tno,
            receiver: r.receiver,
            read: r.is_read,
            state: parse_state(&r.state, r.pno)?,
        })
    }
}

impl TryFrom<InboxRow> for InboxEntry {
    type Error = DbError;

    fn try_from(r: InboxRow) -> DbErrorResult<Self> {
        let personal = TicketPersonal {
            pno: r.pno,
            tno: r.ticket.tno,
            receiver: r.receiver,
            read: r.is_read,
            state: parse_state(&r.state, r.pno)?,
        };

        Ok(InboxEntry {
            ticket: Ticket::try_from(r.ticket)?,
            personal,
        })
    }
}

fn parse_state(value: &str, pno: i64) -> DbErrorResult<TicketState> {
    TicketState::from_str(value).map_err(|e| {
        DbError::decode(format!(
            "Invalid state in ticket_personals.state (pno {}): {}",
            pno, e
        ))
    })
}

pub(crate) fn naive_from_timestamp(secs: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

pub(crate) fn utc_from_timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
