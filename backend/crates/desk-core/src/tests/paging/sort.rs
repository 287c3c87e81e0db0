use crate::{ReceivedSortField, SentSortField, Sort, SortDirection};

#[test]
fn test_default_sent_sort_is_tno_desc() {
    let sort = Sort::<SentSortField>::default();
    assert_eq!(sort.field, SentSortField::Tno);
    assert_eq!(sort.direction, SortDirection::Desc);
}

#[test]
fn test_default_received_sort_is_pno_desc() {
    let sort = Sort::<ReceivedSortField>::default();
    assert_eq!(sort.field, ReceivedSortField::Pno);
    assert_eq!(sort.direction, SortDirection::Desc);
}

#[test]
fn test_parse_field_and_direction() {
    let sort = Sort::<SentSortField>::parse("deadline,DESC").unwrap();
    assert_eq!(sort, Sort::new(SentSortField::Deadline, SortDirection::Desc));
}

#[test]
fn test_parse_bare_field_sorts_ascending() {
    let sort = Sort::<ReceivedSortField>::parse("state").unwrap();
    assert_eq!(sort, Sort::new(ReceivedSortField::State, SortDirection::Asc));
}

#[test]
fn test_parse_rejects_unknown_field() {
    assert!(Sort::<SentSortField>::parse("pno,desc").is_err());
    assert!(Sort::<SentSortField>::parse("writer; DROP TABLE tickets").is_err());
}

#[test]
fn test_parse_rejects_bad_direction_and_extra_parts() {
    assert!(Sort::<SentSortField>::parse("tno,sideways").is_err());
    assert!(Sort::<SentSortField>::parse("tno,asc,desc").is_err());
}

#[test]
fn test_sort_display() {
    let sort = Sort::new(ReceivedSortField::Read, SortDirection::Asc);
    assert_eq!(sort.to_string(), "read,asc");
}
