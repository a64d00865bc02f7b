use crate::solve::bellman;
use crate::{SolveError, ValueTable};

use super::support::TableModel;

#[test]
fn q_values_keep_action_order_and_exclude_reward() {
    let mut model = TableModel::new();
    model.state(0, 7.0);
    model.terminal(1, 2.0);
    model.terminal(2, 4.0);
    model.choice(0, "sure", &[(1.0, 1)]);
    model.choice(0, "split", &[(0.5, 1), (0.5, 2)]);

    let mut utilities = ValueTable::zeroed(&[0, 1, 2]);
    utilities.set(1, 2.0);
    utilities.set(2, 4.0);

    let values = bellman::q_values(&model, &0, &utilities).expect("q_values should succeed");

    assert_eq!(values.len(), 2);
    assert_eq!(values[0].0, "sure");
    assert!((values[0].1 - 2.0).abs() < 1e-12);
    assert_eq!(values[1].0, "split");
    assert!((values[1].1 - 3.0).abs() < 1e-12);
}

#[test]
fn q_values_empty_for_terminal_state() {
    let mut model = TableModel::new();
    model.terminal(0, 1.0);

    let utilities = ValueTable::zeroed(&[0]);
    let values = bellman::q_values(&model, &0, &utilities).expect("q_values should succeed");

    assert!(values.is_empty());
}

#[test]
fn unknown_successor_reports_its_state() {
    let mut model = TableModel::new();
    model.state(0, 0.0);
    model.choice(0, "jump", &[(1.0, 9)]);

    let utilities = ValueTable::zeroed(&[0]);
    let err = bellman::q_values(&model, &0, &utilities).expect_err("lookup should fail");

    assert!(matches!(err, SolveError::UnknownState { state } if state == "9"));
}

#[test]
fn best_action_resolves_ties_to_first_entry() {
    let values = [("a", 1.0), ("b", 1.0), ("c", 0.5)];
    let (action, value) = bellman::best_action(&values).expect("non-empty slice");

    assert_eq!(*action, "a");
    assert!((value - 1.0).abs() < 1e-12);
}

#[test]
fn best_action_of_empty_slice_is_none() {
    let values: [(&str, f64); 0] = [];
    assert!(bellman::best_action(&values).is_none());
}
