use crate::{Page, PageRequest, SentSortField, Sort};

fn page_request(page: u32, size: u32) -> PageRequest<SentSortField> {
    PageRequest {
        page,
        size,
        ..PageRequest::default()
    }
}

#[test]
fn test_page_metadata_first_page() {
    let request = page_request(0, 10);
    let page = Page::new(vec![1; 10], &request, 25);

    assert_eq!(page.total_elements, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.number_of_elements, 10);
    assert!(page.first);
    assert!(!page.last);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[test]
fn test_page_metadata_last_page() {
    let request = page_request(2, 10);
    let page = Page::new(vec![1; 5], &request, 25);

    assert!(page.last);
    assert!(!page.has_next);
    assert!(page.has_previous);
    assert_eq!(page.number_of_elements, 5);
}

#[test]
fn test_empty_result_has_zero_pages() {
    let request = page_request(0, 10);
    let page: Page<i32> = Page::new(vec![], &request, 0);

    assert_eq!(page.total_pages, 0);
    assert!(page.first);
    assert!(page.last);
    assert!(!page.has_next);
}

#[test]
fn test_total_pages_independent_of_page_number() {
    let beyond = page_request(9, 4);
    let page: Page<i32> = Page::new(vec![], &beyond, 9);

    assert_eq!(page.total_pages, 3);
    assert!(!page.has_next);
    assert!(page.has_previous);
}

#[test]
fn test_page_request_rejects_size_out_of_range() {
    assert!(PageRequest::<SentSortField>::new(0, 0, 100, Sort::default()).is_err());
    assert!(PageRequest::<SentSortField>::new(0, 101, 100, Sort::default()).is_err());
    assert!(PageRequest::<SentSortField>::new(0, 100, 100, Sort::default()).is_ok());
}

#[test]
fn test_page_request_offset() {
    let request = page_request(3, 20);
    assert_eq!(request.offset(), 60);
    assert_eq!(request.limit(), 20);
}

#[test]
fn test_map_keeps_metadata() {
    let request = page_request(1, 2);
    let page = Page::new(vec![1, 2], &request, 5).map(|n| n * 10);

    assert_eq!(page.content, vec![10, 20]);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.number, 1);
}
