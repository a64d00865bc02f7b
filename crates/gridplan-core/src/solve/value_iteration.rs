use std::mem;

use crate::model::MdpModel;
use crate::solve::{
    bellman,
    error::SolveError,
    policy::Policy,
    solver::{DpSolver, SolveMetrics, Solution},
    values::ValueTable,
};

/// Per-sweep metrics emitted by value iteration.
#[derive(Debug, Clone, Copy)]
pub struct SweepMetrics {
    pub sweep: usize,
    pub delta: f64,
}

impl<'m, M: MdpModel> DpSolver<'m, M> {
    /// Solve by value iteration: zero-initialized synchronous sweeps until
    /// the largest per-state change drops below epsilon, then greedy policy
    /// extraction from the converged table.
    pub fn solve_value_iteration(&self) -> Result<Solution<M::State, M::Action>, SolveError> {
        self.solve_value_iteration_with_hook(|_| {})
    }

    /// Solve by value iteration, invoking a callback after every sweep.
    pub fn solve_value_iteration_with_hook<FHook>(
        &self,
        mut on_sweep: FHook,
    ) -> Result<Solution<M::State, M::Action>, SolveError>
    where
        FHook: FnMut(&SweepMetrics),
    {
        let mut current = ValueTable::zeroed(self.states());
        let mut next = current.clone();
        let mut sweeps = 0;
        let final_delta;

        loop {
            let delta = self.optimal_sweep(&current, &mut next)?;
            mem::swap(&mut current, &mut next);
            sweeps += 1;

            on_sweep(&SweepMetrics {
                sweep: sweeps,
                delta,
            });

            if delta < self.config().epsilon {
                final_delta = delta;
                break;
            }
            if sweeps >= self.config().max_sweeps {
                return Err(SolveError::SweepLimitExceeded {
                    limit: self.config().max_sweeps,
                    delta,
                });
            }
        }

        let policy = self.greedy_policy(&current)?;

        Ok(Solution {
            utilities: current,
            policy,
            metrics: SolveMetrics {
                sweeps_completed: sweeps,
                rounds_completed: 0,
                final_delta,
            },
        })
    }

    /// One synchronous Bellman-optimality sweep reading `current` and writing
    /// every state into `next`. Returns the largest absolute utility change.
    ///
    /// `current` stays untouched for the whole sweep; updating in place would
    /// mix old and new values and lose the contraction guarantee.
    fn optimal_sweep(
        &self,
        current: &ValueTable<M::State>,
        next: &mut ValueTable<M::State>,
    ) -> Result<f64, SolveError> {
        let mut delta = 0.0_f64;

        for state in self.states() {
            let updated = if self.model().is_terminal(state) {
                self.model().reward(state)
            } else {
                let values = bellman::q_values(self.model(), state, current)?;
                let max_q = bellman::best_action(&values).map_or(0.0, |(_, value)| value);
                self.model().reward(state) + self.config().gamma * max_q
            };

            if !updated.is_finite() {
                return Err(SolveError::NonFiniteUtility {
                    state: format!("{state:?}"),
                    value: updated,
                });
            }

            let previous = current
                .value(state)
                .ok_or_else(|| SolveError::UnknownState {
                    state: format!("{state:?}"),
                })?;
            delta = delta.max((updated - previous).abs());
            next.set(state.clone(), updated);
        }

        Ok(delta)
    }

    /// Extract the greedy policy under `utilities`: the q-value maximizer per
    /// non-terminal state, no choice for terminal/actionless states.
    pub(crate) fn greedy_policy(
        &self,
        utilities: &ValueTable<M::State>,
    ) -> Result<Policy<M::State, M::Action>, SolveError> {
        let mut policy = Policy::unassigned(self.states());

        for state in self.states() {
            if self.model().is_terminal(state) {
                continue;
            }
            let values = bellman::q_values(self.model(), state, utilities)?;
            if let Some((action, _)) = bellman::best_action(&values) {
                policy.assign(state.clone(), Some(action.clone()));
            }
        }

        Ok(policy)
    }
}
