use super::*;

#[test]
fn total_pages_rounds_up_and_never_zero() {
    assert_eq!(Pagination::new(1, 10, 0).total_pages(), 1);
    assert_eq!(Pagination::new(1, 10, 10).total_pages(), 1);
    assert_eq!(Pagination::new(1, 10, 11).total_pages(), 2);
    assert_eq!(Pagination::new(1, 10, 45).total_pages(), 5);
}

#[test]
fn new_sanitizes_zero_page_and_size() {
    let p = Pagination::new(0, 0, 3);
    assert_eq!(p.page, 1);
    assert_eq!(p.page_size, 1);
    assert_eq!(p.total_pages(), 3);
}

#[test]
fn prev_next_flags() {
    let first = Pagination::new(1, 10, 45);
    assert!(!first.has_prev());
    assert!(first.has_next());
    let last = Pagination::new(5, 10, 45);
    assert!(last.has_prev());
    assert!(!last.has_next());
    let only = Pagination::new(1, 10, 0);
    assert!(!only.has_prev() && !only.has_next());
}

#[test]
fn range_label_formats_partial_last_page() {
    assert_eq!(Pagination::new(2, 10, 45).range_label(), "Showing 11–20 of 45");
    assert_eq!(Pagination::new(5, 10, 45).range_label(), "Showing 41–45 of 45");
    assert_eq!(Pagination::new(1, 10, 0).range_label(), "No results");
}

#[test]
fn range_uses_clamped_page() {
    assert_eq!(Pagination::new(9, 10, 45).row_range(), Some((41, 45)));
}

#[test]
fn page_window_is_centered_and_shifted_at_edges() {
    let total_ten = |page| Pagination::new(page, 10, 100);
    assert_eq!(total_ten(1).page_window(5), vec![1, 2, 3, 4, 5]);
    assert_eq!(total_ten(5).page_window(5), vec![3, 4, 5, 6, 7]);
    assert_eq!(total_ten(10).page_window(5), vec![6, 7, 8, 9, 10]);
    assert_eq!(total_ten(9).page_window(4), vec![7, 8, 9, 10]);
}

#[test]
fn page_window_never_exceeds_total() {
    assert_eq!(Pagination::new(2, 10, 25).page_window(7), vec![1, 2, 3]);
    assert_eq!(Pagination::new(1, 10, 0).page_window(5), vec![1]);
    assert_eq!(Pagination::new(1, 10, 100).page_window(0), vec![1]);
}

#[test]
fn deleting_last_row_of_last_page_steps_back() {
    let p = Pagination::new(3, 10, 21);
    assert_eq!(p.page_after_removal(1), 2);
    assert_eq!(Pagination::new(2, 10, 21).page_after_removal(1), 2);
    assert_eq!(Pagination::new(1, 10, 1).page_after_removal(1), 1);
}

#[test]
fn window_contains_current_page_for_every_page() {
    for count in [1_u64, 9, 10, 11, 57, 200] {
        let total = Pagination::new(1, 10, count).total_pages();
        for page in 1..=total {
            let p = Pagination::new(page, 10, count);
            let window = p.page_window(5);
            assert!(window.contains(&page), "page {page} of {total}");
            assert!(window.iter().all(|n| (1..=total).contains(n)));
        }
    }
}
