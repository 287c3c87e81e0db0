use crate::{CoreError, TicketState};

use std::str::FromStr;

#[test]
fn test_ticket_state_default_is_new() {
    assert_eq!(TicketState::default(), TicketState::New);
}

#[test]
fn test_ticket_state_round_trips_through_db_string() {
    for state in TicketState::ALL {
        assert_eq!(TicketState::from_str(state.as_str()).unwrap(), state);
    }
}

#[test]
fn test_ticket_state_accepts_lower_case() {
    assert_eq!(
        TicketState::from_str("in_progress").unwrap(),
        TicketState::InProgress
    );
    assert_eq!(TicketState::from_str("done").unwrap(), TicketState::Done);
}

#[test]
fn test_ticket_state_rejects_unknown_value() {
    let err = TicketState::from_str("ARCHIVED").unwrap_err();
    assert!(matches!(err, CoreError::InvalidTicketState { .. }));
    assert_eq!(err.field(), Some("state"));
}

#[test]
fn test_ticket_state_serde_uses_screaming_snake_case() {
    let json = serde_json::to_string(&TicketState::NeedInfo).unwrap();
    assert_eq!(json, "\"NEED_INFO\"");

    let parsed: TicketState = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
    assert_eq!(parsed, TicketState::InProgress);
}
