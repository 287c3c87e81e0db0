use desk_core::{NewTicket, TicketGrade};

use chrono::NaiveDate;

/// A ticket from `writer` to `receivers` with sensible defaults
pub fn new_ticket(writer: &str, receivers: &[&str]) -> NewTicket {
    NewTicket {
        writer: writer.to_string(),
        title: "Printer on floor 3".to_string(),
        content: "Paper jam every morning".to_string(),
        purpose: "Keep the office running".to_string(),
        requirement: "Replace the feeder".to_string(),
        grade: TicketGrade::Middle,
        deadline: NaiveDate::from_ymd_opt(2026, 12, 31)
            .and_then(|d| d.and_hms_opt(17, 30, 0))
            .expect("valid deadline"),
        receivers: receivers.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn titled(mut ticket: NewTicket, title: &str) -> NewTicket {
    ticket.title = title.to_string();
    ticket
}

pub fn graded(mut ticket: NewTicket, grade: TicketGrade) -> NewTicket {
    ticket.grade = grade;
    ticket
}
