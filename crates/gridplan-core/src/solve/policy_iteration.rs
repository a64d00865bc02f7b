use std::hash::Hash;
use std::mem;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::MdpModel;
use crate::solve::{
    bellman,
    error::SolveError,
    policy::Policy,
    solver::{DpSolver, SolveMetrics, Solution},
    values::ValueTable,
};

/// Per-round metrics emitted by policy iteration.
#[derive(Debug, Clone, Copy)]
pub struct RoundMetrics {
    pub round: usize,
    pub eval_sweeps: usize,
    pub policy_changes: usize,
    pub stable: bool,
}

struct PolicyEvaluation<S: Eq + Hash> {
    utilities: ValueTable<S>,
    sweeps: usize,
    delta: f64,
}

impl<'m, M: MdpModel> DpSolver<'m, M> {
    /// Solve by policy iteration, starting from a random proper policy drawn
    /// with the configured seed.
    pub fn solve_policy_iteration(&self) -> Result<Solution<M::State, M::Action>, SolveError> {
        self.solve_policy_iteration_with_hook(|_| {})
    }

    /// Solve by policy iteration, invoking a callback after every round.
    pub fn solve_policy_iteration_with_hook<FHook>(
        &self,
        on_round: FHook,
    ) -> Result<Solution<M::State, M::Action>, SolveError>
    where
        FHook: FnMut(&RoundMetrics),
    {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config().seed);
        self.solve_policy_iteration_with_init(
            |_state, actions| rng.gen_range(0..actions.len()),
            on_round,
        )
    }

    /// Solve by policy iteration with a caller-supplied starting policy.
    ///
    /// `choose` is called once per non-terminal state that has at least one
    /// legal action and returns an index into that action slice. The starting
    /// policy only affects how many rounds stabilization takes, never the
    /// converged result.
    pub fn solve_policy_iteration_with_init<FInit, FHook>(
        &self,
        mut choose: FInit,
        mut on_round: FHook,
    ) -> Result<Solution<M::State, M::Action>, SolveError>
    where
        FInit: FnMut(&M::State, &[M::Action]) -> usize,
        FHook: FnMut(&RoundMetrics),
    {
        let mut policy = self.initial_policy(&mut choose)?;
        let mut rounds = 0;
        let mut total_sweeps = 0;
        let utilities;
        let final_delta;

        loop {
            let evaluation = self.evaluate_policy(&policy)?;
            total_sweeps += evaluation.sweeps;
            rounds += 1;

            let changes = self.improve_policy(&mut policy, &evaluation.utilities)?;
            let stable = changes == 0;

            on_round(&RoundMetrics {
                round: rounds,
                eval_sweeps: evaluation.sweeps,
                policy_changes: changes,
                stable,
            });

            if stable {
                utilities = evaluation.utilities;
                final_delta = evaluation.delta;
                break;
            }
            if rounds >= self.config().max_rounds {
                return Err(SolveError::RoundLimitExceeded {
                    limit: self.config().max_rounds,
                });
            }
        }

        Ok(Solution {
            utilities,
            policy,
            metrics: SolveMetrics {
                sweeps_completed: total_sweeps,
                rounds_completed: rounds,
                final_delta,
            },
        })
    }

    /// Build the starting policy: no choice for terminal/actionless states,
    /// one legal action per remaining state picked by `choose`.
    fn initial_policy<FInit>(
        &self,
        choose: &mut FInit,
    ) -> Result<Policy<M::State, M::Action>, SolveError>
    where
        FInit: FnMut(&M::State, &[M::Action]) -> usize,
    {
        let mut policy = Policy::unassigned(self.states());

        for state in self.states() {
            if self.model().is_terminal(state) {
                continue;
            }
            let actions = self.model().actions(state);
            if actions.is_empty() {
                continue;
            }

            let index = choose(state, &actions);
            let action = actions
                .get(index)
                .ok_or_else(|| SolveError::InvalidInitialChoice {
                    state: format!("{state:?}"),
                    index,
                    available: actions.len(),
                })?;
            policy.assign(state.clone(), Some(action.clone()));
        }

        Ok(policy)
    }

    /// Compute the fixed point of the policy-restricted Bellman equation,
    /// starting from a zeroed table on every call.
    fn evaluate_policy(
        &self,
        policy: &Policy<M::State, M::Action>,
    ) -> Result<PolicyEvaluation<M::State>, SolveError> {
        let mut current = ValueTable::zeroed(self.states());
        let mut next = current.clone();
        let mut sweeps = 0;

        loop {
            let delta = self.policy_sweep(policy, &current, &mut next)?;
            mem::swap(&mut current, &mut next);
            sweeps += 1;

            if delta < self.config().epsilon {
                return Ok(PolicyEvaluation {
                    utilities: current,
                    sweeps,
                    delta,
                });
            }
            if sweeps >= self.config().max_sweeps {
                return Err(SolveError::SweepLimitExceeded {
                    limit: self.config().max_sweeps,
                    delta,
                });
            }
        }
    }

    /// One synchronous sweep under the fixed `policy`. States without an
    /// assigned action fall back to reward-only utility.
    fn policy_sweep(
        &self,
        policy: &Policy<M::State, M::Action>,
        current: &ValueTable<M::State>,
        next: &mut ValueTable<M::State>,
    ) -> Result<f64, SolveError> {
        let mut delta = 0.0_f64;

        for state in self.states() {
            let updated = if self.model().is_terminal(state) {
                self.model().reward(state)
            } else {
                match policy.action(state) {
                    Some(action) => {
                        let expected =
                            bellman::expected_value(self.model(), state, action, current)?;
                        self.model().reward(state) + self.config().gamma * expected
                    }
                    None => self.model().reward(state),
                }
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

    /// Re-point states at better actions under `utilities`. The incumbent
    /// choice is kept unless some action is strictly better, so equal-valued
    /// alternatives never flip the policy and stabilization cannot cycle.
    /// Returns how many states changed.
    fn improve_policy(
        &self,
        policy: &mut Policy<M::State, M::Action>,
        utilities: &ValueTable<M::State>,
    ) -> Result<usize, SolveError> {
        let mut changes = 0;

        for state in self.states() {
            if self.model().is_terminal(state) {
                continue;
            }
            let values = bellman::q_values(self.model(), state, utilities)?;
            let (best, best_value) = match bellman::best_action(&values) {
                Some(found) => found,
                None => continue,
            };

            let incumbent_value = policy
                .action(state)
                .and_then(|chosen| values.iter().find(|(action, _)| action == chosen))
                .map(|(_, value)| *value);

            let switch = match incumbent_value {
                Some(value) => best_value > value,
                None => true,
            };
            if switch {
                let best = best.clone();
                policy.assign(state.clone(), Some(best));
                changes += 1;
            }
        }

        Ok(changes)
    }
}
