use std::fmt;

/// Error type for DP solve runs.
///
/// States are captured in their `Debug` form so the error does not carry the
/// model's state type parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A transition referenced a successor missing from the utility table.
    UnknownState { state: String },
    /// A Bellman update produced NaN or infinity.
    NonFiniteUtility { state: String, value: f64 },
    /// A policy initializer chose an action index outside the legal range.
    InvalidInitialChoice {
        state: String,
        index: usize,
        available: usize,
    },
    /// A sweep loop hit `max_sweeps` before the delta dropped below epsilon.
    SweepLimitExceeded { limit: usize, delta: f64 },
    /// Policy iteration hit `max_rounds` before the policy stabilized.
    RoundLimitExceeded { limit: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::UnknownState { state } => {
                write!(f, "transition references unknown state {state}")
            }
            SolveError::NonFiniteUtility { state, value } => {
                write!(f, "utility for state {state} is not finite: {value}")
            }
            SolveError::InvalidInitialChoice {
                state,
                index,
                available,
            } => write!(
                f,
                "initial policy chose action index {index} for state {state} with {available} actions"
            ),
            SolveError::SweepLimitExceeded { limit, delta } => write!(
                f,
                "no convergence within {limit} sweeps, last delta {delta}"
            ),
            SolveError::RoundLimitExceeded { limit } => {
                write!(f, "policy not stable within {limit} rounds")
            }
        }
    }
}

impl std::error::Error for SolveError {}
