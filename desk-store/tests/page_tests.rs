use desk_store::{DEFAULT_ROWS_PER_PAGE, Page};
use pretty_assertions::assert_eq;

#[test]
fn default_rows_per_page() {
    assert_eq!(DEFAULT_ROWS_PER_PAGE, 10);
}

#[test]
fn first_page() {
    let items: Vec<u32> = (1..=23).collect();
    let page = Page::from_slice(&items, 1, 10);
    assert_eq!(page.rows, (1..=10).collect::<Vec<_>>());
    assert_eq!(page.total, 23);
    assert_eq!(page.page_count(), 3);
    assert!(!page.is_last());
}

#[test]
fn partial_last_page() {
    let items: Vec<u32> = (1..=23).collect();
    let page = Page::from_slice(&items, 3, 10);
    assert_eq!(page.rows, vec![21, 22, 23]);
    assert!(page.is_last());
}

#[test]
fn page_past_end_is_empty() {
    let items: Vec<u32> = (1..=5).collect();
    let page = Page::from_slice(&items, 4, 10);
    assert!(page.rows.is_empty());
    assert_eq!(page.page_count(), 1);
}

#[test]
fn empty_snapshot_has_one_page() {
    let page = Page::<u32>::from_slice(&[], 1, 10);
    assert_eq!(page.page_count(), 1);
    assert!(page.rows.is_empty());
}

#[test]
fn zero_inputs_are_clamped() {
    let items: Vec<u32> = (1..=3).collect();
    let page = Page::from_slice(&items, 0, 0);
    assert_eq!(page.number, 1);
    assert_eq!(page.rows_per_page, 1);
    assert_eq!(page.rows, vec![1]);
    assert_eq!(page.page_count(), 3);
}
