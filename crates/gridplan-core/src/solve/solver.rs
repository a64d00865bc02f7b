use std::hash::Hash;

use crate::model::MdpModel;
use crate::solve::{
    bellman,
    config::{SolverConfig, SolverConfigError},
    error::SolveError,
    policy::Policy,
    values::ValueTable,
};

/// Aggregate counters for a completed solve.
///
/// `rounds_completed` is 0 for value iteration. For policy iteration,
/// `sweeps_completed` totals the evaluation sweeps across all rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveMetrics {
    pub sweeps_completed: usize,
    pub rounds_completed: usize,
    pub final_delta: f64,
}

/// Converged utilities, the matching policy, and run counters.
#[derive(Debug, Clone)]
pub struct Solution<S: Eq + Hash, A> {
    pub utilities: ValueTable<S>,
    pub policy: Policy<S, A>,
    pub metrics: SolveMetrics,
}

/// Dynamic-programming solver over an `MdpModel`.
///
/// Holds the model by shared reference together with validated convergence
/// parameters. Both algorithms run against the same cached state list, so
/// iteration order is fixed for the lifetime of the solver.
#[derive(Debug)]
pub struct DpSolver<'m, M: MdpModel> {
    model: &'m M,
    config: SolverConfig,
    states: Vec<M::State>,
}

impl<'m, M: MdpModel> DpSolver<'m, M> {
    /// Create a solver for `model`, validating `config` up front.
    pub fn new(model: &'m M, config: SolverConfig) -> Result<Self, SolverConfigError> {
        config.validate()?;
        let states = model.states();
        Ok(DpSolver {
            model,
            config,
            states,
        })
    }

    /// Borrow the model this solver runs against.
    pub fn model(&self) -> &M {
        self.model
    }

    /// Borrow the validated configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// All model states in solve order.
    pub fn states(&self) -> &[M::State] {
        &self.states
    }

    /// Action values for every legal action at `state` under `utilities`,
    /// in the model's action order. Empty for terminal/actionless states.
    pub fn q_values(
        &self,
        state: &M::State,
        utilities: &ValueTable<M::State>,
    ) -> Result<Vec<(M::Action, f64)>, SolveError> {
        bellman::q_values(self.model, state, utilities)
    }
}
