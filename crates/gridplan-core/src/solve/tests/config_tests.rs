use crate::{SolverConfig, SolverConfigError};

#[test]
fn default_config_is_valid() {
    SolverConfig::default().validate().expect("defaults should validate");
}

#[test]
fn default_config_yaml_parses() {
    let config = SolverConfig::from_default_yaml().expect("default yaml should parse");
    assert!((config.gamma - 0.99).abs() < 1e-12);
    assert!((config.epsilon - 1e-4).abs() < 1e-12);
    assert_eq!(config.max_sweeps, 10_000);
    assert_eq!(config.max_rounds, 1_000);
    assert_eq!(config.seed, 0);
}

#[test]
fn partial_yaml_fills_defaults() {
    let config = SolverConfig::from_yaml_str("gamma: 0.5").expect("partial yaml should parse");
    assert!((config.gamma - 0.5).abs() < 1e-12);
    assert!((config.epsilon - 1e-4).abs() < 1e-12);
    assert_eq!(config.max_rounds, 1_000);
}

#[test]
fn rejects_gamma_of_one() {
    let config = SolverConfig {
        gamma: 1.0,
        ..SolverConfig::default()
    };
    let err = config.validate().expect_err("gamma 1.0 should be rejected");
    assert!(matches!(err, SolverConfigError::Invalid(_)));
}

#[test]
fn rejects_negative_and_non_finite_gamma() {
    for gamma in [-0.1, f64::NAN, f64::INFINITY] {
        let config = SolverConfig {
            gamma,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

#[test]
fn rejects_non_positive_epsilon() {
    for epsilon in [0.0, -1e-4, f64::NAN] {
        let config = SolverConfig {
            epsilon,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

#[test]
fn rejects_zero_iteration_caps() {
    let config = SolverConfig {
        max_sweeps: 0,
        ..SolverConfig::default()
    };
    assert!(config.validate().is_err());

    let config = SolverConfig {
        max_rounds: 0,
        ..SolverConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn yaml_with_invalid_gamma_fails_validation() {
    let err = SolverConfig::from_yaml_str("gamma: 1.5").expect_err("parse should fail validation");
    assert!(matches!(err, SolverConfigError::Invalid(_)));
}

#[test]
fn missing_config_file_reports_io_error() {
    let err = SolverConfig::from_yaml_path("no_such_solver_config.yaml")
        .expect_err("missing file should fail");
    assert!(matches!(err, SolverConfigError::Io(_)));
}
