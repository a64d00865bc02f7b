use gridplan_core::{DpSolver, MdpModel, SolverConfig, Transition};

/// Two-room model: from the hallway the "left" door pays 1.0 and the "right"
/// door pays 5.0, both absorbing.
struct TwoDoors;

impl MdpModel for TwoDoors {
    type State = u8;
    type Action = &'static str;

    fn states(&self) -> Vec<u8> {
        vec![0, 1, 2]
    }

    fn is_terminal(&self, state: &u8) -> bool {
        *state != 0
    }

    fn actions(&self, state: &u8) -> Vec<&'static str> {
        if *state == 0 {
            vec!["left", "right"]
        } else {
            Vec::new()
        }
    }

    fn reward(&self, state: &u8) -> f64 {
        match state {
            1 => 1.0,
            2 => 5.0,
            _ => 0.0,
        }
    }

    fn transitions(&self, state: &u8, action: &&'static str) -> Vec<Transition<u8>> {
        if *state != 0 {
            return Vec::new();
        }
        let next = if *action == "left" { 1 } else { 2 };
        vec![Transition { prob: 1.0, next }]
    }
}

#[test]
fn public_value_iteration_picks_the_better_door() {
    let model = TwoDoors;
    let config = SolverConfig {
        gamma: 0.9,
        ..SolverConfig::default()
    };
    let solver = DpSolver::new(&model, config).expect("config should validate");
    let solution = solver.solve_value_iteration().expect("solve should succeed");

    assert_eq!(solution.policy.action(&0), Some(&"right"));
    let hallway = solution.utilities.value(&0).expect("state is covered");
    assert!((hallway - 4.5).abs() < 1e-9);
    assert_eq!(solution.utilities.value(&2), Some(5.0));
}

#[test]
fn public_policy_iteration_matches_value_iteration() {
    let model = TwoDoors;
    let config = SolverConfig {
        gamma: 0.9,
        ..SolverConfig::default()
    };
    let solver = DpSolver::new(&model, config).expect("config should validate");

    let vi = solver.solve_value_iteration().expect("vi should succeed");
    let pi = solver.solve_policy_iteration().expect("pi should succeed");

    assert_eq!(vi.policy, pi.policy);
    for state in solver.states() {
        let from_vi = vi.utilities.value(state).expect("state is covered");
        let from_pi = pi.utilities.value(state).expect("state is covered");
        assert!((from_vi - from_pi).abs() < 1e-3);
    }
}

#[test]
fn public_snapshot_serializes_to_json() {
    let model = TwoDoors;
    let solver = DpSolver::new(&model, SolverConfig::default()).expect("config should validate");
    let solution = solver.solve_value_iteration().expect("solve should succeed");

    let snapshot = solver.snapshot(&solution);
    let json = snapshot.to_json_string().expect("snapshot should serialize");

    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"gamma\""));
    assert!(json.contains("\"entries\""));
    assert!(json.contains("\"right\""));
}

#[test]
fn public_default_yaml_config_parses() {
    let config = SolverConfig::from_default_yaml().expect("default yaml should parse");
    assert!(config.gamma > 0.0 && config.gamma < 1.0);
    assert!(config.epsilon > 0.0);
    assert!(config.max_sweeps > 0);
}
