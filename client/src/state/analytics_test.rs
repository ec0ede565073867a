use super::*;

#[test]
fn filter_omits_blank_term_and_exam() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    assert!(state.filter().pairs().is_empty());
    state.set_term("First Term");
    state.set_exam("  ");
    let filter = state.filter();
    assert_eq!(filter.term.as_deref(), Some("First Term"));
    assert!(filter.exam.is_none());
}

#[test]
fn select_raw_parses_ids_and_clears_on_blank() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    state.select_raw("12");
    assert_eq!(state.target, Some(12));
    assert!(state.needs_fetch());
    state.select_raw("");
    assert_eq!(state.target, None);
    assert!(!state.needs_fetch());
}

/// One pass of the page's fetch effect: issue a request when one is needed.
fn run_fetch_effect(state: &mut AnalyticsState<u8>, in_flight: &mut Vec<AnalyticsRequest>) {
    if state.needs_fetch()
        && let Some(request) = state.begin_load()
    {
        in_flight.push(request);
    }
}

#[test]
fn changing_selection_drops_loaded_data() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    let mut in_flight = Vec::new();
    state.select(Some(1));
    run_fetch_effect(&mut state, &mut in_flight);
    assert!(!state.needs_fetch());
    let request = in_flight.remove(0);
    state.finish(&request, Ok(7));
    assert_eq!(state.data, Some(7));
    assert!(!state.needs_fetch());

    state.set_exam("Midterm");
    assert!(state.data.is_none());
    assert!(state.needs_fetch());
}

#[test]
fn reselecting_mid_flight_fetches_the_new_target() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    let mut in_flight = Vec::new();
    state.select(Some(1));
    run_fetch_effect(&mut state, &mut in_flight);
    state.select(Some(2));
    run_fetch_effect(&mut state, &mut in_flight);
    assert_eq!(in_flight.iter().map(|r| r.target).collect::<Vec<_>>(), vec![1, 2]);

    // Class 1 answers after class 2 was chosen.
    let first = in_flight.remove(0);
    state.finish(&first, Ok(11));
    assert!(state.data.is_none());
    assert!(state.loading);

    let second = in_flight.remove(0);
    state.finish(&second, Ok(22));
    assert_eq!(state.data, Some(22));
    assert!(!state.loading);
}

#[test]
fn late_response_for_a_previous_target_does_not_stall_loading() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    let mut in_flight = Vec::new();
    state.select(Some(1));
    run_fetch_effect(&mut state, &mut in_flight);
    state.select(Some(2));
    let first = in_flight.remove(0);
    state.finish(&first, Ok(11));
    run_fetch_effect(&mut state, &mut in_flight);
    assert_eq!(in_flight.len(), 1);
    assert_eq!(in_flight[0].target, 2);
}

#[test]
fn term_change_mid_flight_discards_unfiltered_result() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    let mut in_flight = Vec::new();
    state.select(Some(1));
    run_fetch_effect(&mut state, &mut in_flight);
    state.set_term("Second Term");
    run_fetch_effect(&mut state, &mut in_flight);

    let all_terms = in_flight.remove(0);
    assert!(all_terms.filter.term.is_none());
    state.finish(&all_terms, Ok(99));
    assert!(state.data.is_none());

    let second_term = in_flight.remove(0);
    assert_eq!(second_term.filter.term.as_deref(), Some("Second Term"));
    state.finish(&second_term, Ok(42));
    assert_eq!(state.data, Some(42));
}

#[test]
fn errors_stop_refetching_until_selection_changes() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    let mut in_flight = Vec::new();
    state.select(Some(3));
    run_fetch_effect(&mut state, &mut in_flight);
    let request = in_flight.remove(0);
    state.finish(&request, Err("Server error".to_owned()));
    assert_eq!(state.error.as_deref(), Some("Server error"));
    run_fetch_effect(&mut state, &mut in_flight);
    assert!(in_flight.is_empty());

    state.set_exam("Final");
    run_fetch_effect(&mut state, &mut in_flight);
    assert_eq!(in_flight.len(), 1);
}

#[test]
fn setting_the_same_filter_keeps_loaded_data() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    let mut in_flight = Vec::new();
    state.select(Some(1));
    state.set_term("First Term");
    run_fetch_effect(&mut state, &mut in_flight);
    let request = in_flight.remove(0);
    state.finish(&request, Ok(5));
    state.set_term("First Term");
    assert_eq!(state.data, Some(5));
}

#[test]
fn set_filter_routes_by_kind() {
    let mut state: AnalyticsState<u8> = AnalyticsState::default();
    state.set_filter(FilterKind::Exam, "Final");
    state.set_filter(FilterKind::Term, "Second Term");
    assert_eq!(state.filter_value(FilterKind::Exam), "Final");
    assert_eq!(state.filter_value(FilterKind::Term), "Second Term");
    assert_eq!(FilterKind::Term.any_label(), "All terms");
}
