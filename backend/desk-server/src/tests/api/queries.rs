use crate::{CreateTicketRequest, ListReceivedQuery, ListSentQuery, ReadReceivedQuery};

use desk_service::TicketDraft;

#[test]
fn test_mark_as_read_defaults_to_true() {
    let query: ReadReceivedQuery = serde_json::from_str(r#"{"receiver":"B"}"#).unwrap();

    assert!(query.mark_as_read);
}

#[test]
fn test_mark_as_read_uses_camel_case_name() {
    let query: ReadReceivedQuery =
        serde_json::from_str(r#"{"receiver":"B","markAsRead":false}"#).unwrap();

    assert!(!query.mark_as_read);
    assert_eq!(query.receiver.as_deref(), Some("B"));
}

#[test]
fn test_list_sent_query_ignores_inbox_only_filters() {
    let query = ListSentQuery {
        writer: Some("A".into()),
        grade: Some("HIGH".into()),
        keyword: Some("printer".into()),
        ..ListSentQuery::default()
    };

    let filter = query.filter();

    assert_eq!(filter.grade.as_deref(), Some("HIGH"));
    assert_eq!(filter.keyword.as_deref(), Some("printer"));
    assert_eq!(filter.read, None);
    assert_eq!(filter.state, None);
}

#[test]
fn test_list_received_query_carries_paging() {
    let query = ListReceivedQuery {
        page: Some(2),
        size: Some(5),
        sort: Some("title,asc".into()),
        read: Some(true),
        ..ListReceivedQuery::default()
    };

    let params = query.page_params();

    assert_eq!(params.page, Some(2));
    assert_eq!(params.size, Some(5));
    assert_eq!(params.sort.as_deref(), Some("title,asc"));
    assert_eq!(query.filter().read, Some(true));
}

#[test]
fn test_create_request_converts_to_draft() {
    let request: CreateTicketRequest = serde_json::from_str(
        r#"{"title":"X","grade":"LOW","deadline":"2026-12-01 18:00","receivers":["B","C"]}"#,
    )
    .unwrap();

    let draft = TicketDraft::from(request);

    assert_eq!(draft.title.as_deref(), Some("X"));
    assert_eq!(draft.content, None);
    assert_eq!(
        draft.receivers,
        Some(vec!["B".to_string(), "C".to_string()])
    );
}
