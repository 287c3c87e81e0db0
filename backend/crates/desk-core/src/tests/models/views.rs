use crate::{
    InboxEntry, ReceivedTicketView, SentTicketView, Ticket, TicketAggregate, TicketGrade,
    TicketPersonal, TicketState,
};

use chrono::{NaiveDate, TimeZone, Utc};

fn sample_ticket() -> Ticket {
    Ticket {
        tno: 7,
        title: "API check".into(),
        content: "Please verify the response format".into(),
        purpose: "integration".into(),
        requirement: "examples and error cases".into(),
        grade: TicketGrade::Middle,
        deadline: NaiveDate::from_ymd_opt(2026, 5, 4)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap(),
        birth: Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap(),
        writer: "alice".into(),
    }
}

fn personal(pno: i64, receiver: &str) -> TicketPersonal {
    TicketPersonal {
        pno,
        tno: 7,
        receiver: receiver.into(),
        read: false,
        state: TicketState::New,
    }
}

#[test]
fn test_sent_view_carries_all_personals() {
    let aggregate = TicketAggregate {
        ticket: sample_ticket(),
        personals: vec![personal(1, "bob"), personal(2, "carol")],
    };

    let view = SentTicketView::from(aggregate);

    assert_eq!(view.tno, 7);
    assert_eq!(view.writer, "alice");
    assert_eq!(view.personals.len(), 2);
    assert_eq!(view.personals[0].receiver, "bob");
    assert_eq!(view.personals[1].receiver, "carol");
}

#[test]
fn test_sent_view_json_shape() {
    let aggregate = TicketAggregate {
        ticket: sample_ticket(),
        personals: vec![personal(1, "bob")],
    };

    let json = serde_json::to_value(SentTicketView::from(aggregate)).unwrap();

    assert_eq!(json["deadline"], "2026-05-04 18:00");
    assert_eq!(json["grade"], "MIDDLE");
    assert_eq!(json["personals"][0]["state"], "NEW");
    assert_eq!(json["personals"][0]["read"], false);
}

#[test]
fn test_received_view_merges_ticket_and_personal() {
    let mut p = personal(3, "bob");
    p.read = true;
    p.state = TicketState::Done;

    let view = ReceivedTicketView::from(InboxEntry {
        ticket: sample_ticket(),
        personal: p,
    });

    assert_eq!(view.pno, 3);
    assert_eq!(view.tno, 7);
    assert_eq!(view.receiver, "bob");
    assert_eq!(view.writer, "alice");
    assert!(view.read);
    assert_eq!(view.state, TicketState::Done);
}

#[test]
fn test_aggregate_personal_lookup() {
    let aggregate = TicketAggregate {
        ticket: sample_ticket(),
        personals: vec![personal(1, "bob"), personal(2, "carol")],
    };

    assert_eq!(aggregate.personal_for("carol").map(|p| p.pno), Some(2));
    assert!(aggregate.personal_for("dave").is_none());
    assert_eq!(aggregate.receivers(), vec!["bob", "carol"]);
}
