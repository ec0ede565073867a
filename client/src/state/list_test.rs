use super::*;

fn page_of(count: u64, rows: Vec<u32>) -> Page<u32> {
    Page { count, next: None, previous: None, results: rows }
}

#[test]
fn default_starts_on_first_page() {
    let state: ListState<u32> = ListState::default();
    assert_eq!(state.page, 1);
    assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    assert!(state.items.is_empty());
    assert_eq!(state.pagination().total_pages(), 1);
}

#[test]
fn apply_page_replaces_rows_and_clears_error() {
    let mut state = ListState::default();
    state.begin_load();
    state.fail("boom");
    assert_eq!(state.error.as_deref(), Some("boom"));
    state.begin_load();
    state.apply_page(page_of(23, vec![1, 2, 3]));
    assert_eq!(state.items, vec![1, 2, 3]);
    assert_eq!(state.count, 23);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn set_search_resets_page_only_when_changed() {
    let mut state: ListState<u32> = ListState { page: 3, count: 50, ..ListState::default() };
    state.set_search("");
    assert_eq!(state.page, 3);
    state.set_search("math");
    assert_eq!(state.page, 1);
    assert_eq!(state.query().search, "math");
}

#[test]
fn filters_reset_page_and_flow_into_query() {
    let mut state: ListState<u32> = ListState { page: 2, count: 40, ..ListState::default() };
    state.set_active_filter(Some(false));
    assert_eq!(state.page, 1);
    state.go_to(4);
    state.set_class_filter(Some(9));
    assert_eq!(state.page, 1);
    let query = state.query();
    assert_eq!(query.active, Some(false));
    assert_eq!(query.class_id, Some(9));
}

#[test]
fn go_to_clamps_to_known_pages() {
    let mut state: ListState<u32> = ListState { count: 25, ..ListState::default() };
    state.go_to(9);
    assert_eq!(state.page, 3);
    state.go_to(0);
    assert_eq!(state.page, 1);
}

#[test]
fn after_delete_steps_back_from_emptied_last_page() {
    let mut state: ListState<u32> = ListState { page: 3, count: 21, ..ListState::default() };
    state.after_delete();
    assert_eq!(state.page, 2);
    assert_eq!(state.count, 20);

    let mut middle: ListState<u32> = ListState { page: 2, count: 35, ..ListState::default() };
    middle.after_delete();
    assert_eq!(middle.page, 2);
}

#[test]
fn only_newest_load_is_applied() {
    let mut state = ListState::default();
    state.count = 40;

    state.go_to(2);
    let page_two = state.begin_load();
    state.go_to(3);
    let page_three = state.begin_load();

    assert!(state.apply_page_if_current(page_three, page_of(40, vec![21, 22])));
    assert!(!state.apply_page_if_current(page_two, page_of(40, vec![11, 12])));
    assert_eq!(state.page, 3);
    assert_eq!(state.items, vec![21, 22]);
    assert!(!state.loading);
}

#[test]
fn stale_failure_does_not_replace_fresh_rows() {
    let mut state = ListState::default();
    let first = state.begin_load();
    state.set_search("math");
    let second = state.begin_load();

    assert!(state.apply_page_if_current(second, page_of(1, vec![7])));
    assert!(!state.fail_if_current(first, "timed out"));
    assert!(state.error.is_none());
    assert_eq!(state.items, vec![7]);
}

#[test]
fn pending_newest_load_stays_loading_after_stale_reply() {
    let mut state = ListState::default();
    let first = state.begin_load();
    let _refresh = state.begin_load();
    assert!(!state.apply_page_if_current(first, page_of(3, vec![1, 2, 3])));
    assert!(state.loading);
    assert!(state.items.is_empty());
}
