use serde::Serialize;

use crate::model::MdpModel;
use crate::solve::solver::{DpSolver, Solution};

#[derive(Debug, Clone, Serialize)]
pub struct SolutionSnapshot<S, A> {
    pub schema_version: u32,
    pub gamma: f64,
    pub epsilon: f64,
    pub sweeps_completed: usize,
    pub rounds_completed: usize,
    pub entries: Vec<EntrySnapshot<S, A>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntrySnapshot<S, A> {
    pub state: S,
    pub utility: f64,
    pub action: Option<A>,
    pub terminal: bool,
}

impl<S: Serialize, A: Serialize> SolutionSnapshot<S, A> {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'m, M: MdpModel> DpSolver<'m, M> {
    /// Build a state-sorted export of `solution`. States missing from the
    /// solution's tables (a foreign solution) export as utility 0 with no
    /// action.
    pub fn snapshot(
        &self,
        solution: &Solution<M::State, M::Action>,
    ) -> SolutionSnapshot<M::State, M::Action> {
        let mut states = self.states().to_vec();
        states.sort();

        let entries = states
            .into_iter()
            .map(|state| {
                let utility = solution.utilities.value(&state).unwrap_or(0.0);
                let action = solution.policy.action(&state).cloned();
                let terminal = self.model().is_terminal(&state);
                EntrySnapshot {
                    state,
                    utility,
                    action,
                    terminal,
                }
            })
            .collect();

        SolutionSnapshot {
            schema_version: 1,
            gamma: self.config().gamma,
            epsilon: self.config().epsilon,
            sweeps_completed: solution.metrics.sweeps_completed,
            rounds_completed: solution.metrics.rounds_completed,
            entries,
        }
    }
}
