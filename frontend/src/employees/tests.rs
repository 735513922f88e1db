use super::*;

fn member(id: u64) -> Employee {
    Employee {
        id: Some(id),
        ..Employee::default()
    }
}

#[test]
fn fulfilled_overwrites_the_whole_roster() {
    let mut state = EmployeesState::default();
    let g1 = state.fetch_pending();
    assert!(state.fetch_fulfilled(g1, vec![member(1), member(2)]));
    assert_eq!(state.employees.len(), 2);

    // a fetch for another company silently replaces everything
    let g2 = state.fetch_pending();
    assert!(state.fetch_fulfilled(g2, vec![member(9)]));
    assert_eq!(state.employees.len(), 1);
    assert_eq!(state.employees[0].id, Some(9));
}

#[test]
fn failure_preserves_the_previous_roster() {
    let mut state = EmployeesState::default();
    let g1 = state.fetch_pending();
    state.fetch_fulfilled(g1, vec![member(1)]);

    let g2 = state.fetch_pending();
    assert!(state.is_loading);
    assert!(state.fetch_failed(g2, "Failed to fetch employees".into()));

    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch employees"));
    assert_eq!(state.employees, vec![member(1)]);
}

#[test]
fn stale_completions_are_discarded() {
    let mut state = EmployeesState::default();
    let first = state.fetch_pending();
    let second = state.fetch_pending();

    // the slower first request completes after the newer one was issued
    assert!(!state.fetch_fulfilled(first, vec![member(1)]));
    assert!(state.employees.is_empty());
    assert!(state.is_loading);

    assert!(state.fetch_fulfilled(second, vec![member(2)]));
    assert_eq!(state.employees, vec![member(2)]);

    // same for a stale failure: it must not clobber the fresh result
    assert!(!state.fetch_failed(first, "boom".into()));
    assert!(state.error.is_none());
}

#[test]
fn pending_clears_the_previous_error() {
    let mut state = EmployeesState::default();
    let g = state.fetch_pending();
    state.fetch_failed(g, "boom".into());
    state.fetch_pending();
    assert!(state.error.is_none());
    assert!(state.is_loading);
}
