use crate::TicketFilter;

#[test]
fn test_default_filter_has_no_keyword() {
    assert_eq!(TicketFilter::default().keyword(), None);
}

#[test]
fn test_blank_keyword_is_ignored() {
    let filter = TicketFilter {
        keyword: Some("   ".into()),
        ..Default::default()
    };
    assert_eq!(filter.keyword(), None);
}

#[test]
fn test_keyword_is_trimmed() {
    let filter = TicketFilter {
        keyword: Some("  api  ".into()),
        ..Default::default()
    };
    assert_eq!(filter.keyword(), Some("api"));
}
