use crate::TicketGrade;

use std::str::FromStr;

#[test]
fn test_ticket_grade_as_str() {
    assert_eq!(TicketGrade::Low.as_str(), "LOW");
    assert_eq!(TicketGrade::Middle.as_str(), "MIDDLE");
    assert_eq!(TicketGrade::High.as_str(), "HIGH");
    assert_eq!(TicketGrade::Urgent.as_str(), "URGENT");
}

#[test]
fn test_ticket_grade_from_str_is_case_insensitive() {
    assert_eq!(TicketGrade::from_str("HIGH").unwrap(), TicketGrade::High);
    assert_eq!(TicketGrade::from_str("middle").unwrap(), TicketGrade::Middle);
    assert_eq!(TicketGrade::from_str(" Low ").unwrap(), TicketGrade::Low);
    assert!(TicketGrade::from_str("critical").is_err());
}

#[test]
fn test_ticket_grade_rank_orders_by_severity() {
    let ranks: Vec<i32> = TicketGrade::ALL.iter().map(|g| g.rank()).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3]);
}

#[test]
fn test_ticket_grade_serializes_upper_case() {
    let json = serde_json::to_string(&TicketGrade::Urgent).unwrap();
    assert_eq!(json, "\"URGENT\"");
}
