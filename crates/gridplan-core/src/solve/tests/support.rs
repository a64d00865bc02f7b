use std::collections::HashMap;

use crate::{MdpModel, Transition};

/// Hand-built table model for solver tests. States are small integers,
/// actions are static strings, and terminals are declared without choices.
#[derive(Debug, Default)]
pub(crate) struct TableModel {
    states: Vec<u32>,
    terminals: Vec<u32>,
    rewards: HashMap<u32, f64>,
    choices: HashMap<u32, Vec<(&'static str, Vec<Transition<u32>>)>>,
}

impl TableModel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state(&mut self, id: u32, reward: f64) -> &mut Self {
        self.states.push(id);
        self.rewards.insert(id, reward);
        self
    }

    pub(crate) fn terminal(&mut self, id: u32, reward: f64) -> &mut Self {
        self.state(id, reward);
        self.terminals.push(id);
        self
    }

    pub(crate) fn choice(
        &mut self,
        id: u32,
        action: &'static str,
        outcomes: &[(f64, u32)],
    ) -> &mut Self {
        let transitions = outcomes
            .iter()
            .map(|(prob, next)| Transition {
                prob: *prob,
                next: *next,
            })
            .collect();
        self.choices.entry(id).or_default().push((action, transitions));
        self
    }
}

impl MdpModel for TableModel {
    type State = u32;
    type Action = &'static str;

    fn states(&self) -> Vec<u32> {
        self.states.clone()
    }

    fn is_terminal(&self, state: &u32) -> bool {
        self.terminals.contains(state)
    }

    fn actions(&self, state: &u32) -> Vec<&'static str> {
        self.choices
            .get(state)
            .map(|choices| choices.iter().map(|(action, _)| *action).collect())
            .unwrap_or_default()
    }

    fn reward(&self, state: &u32) -> f64 {
        self.rewards.get(state).copied().unwrap_or(0.0)
    }

    fn transitions(&self, state: &u32, action: &&'static str) -> Vec<Transition<u32>> {
        self.choices
            .get(state)
            .and_then(|choices| choices.iter().find(|(id, _)| id == action))
            .map(|(_, transitions)| transitions.clone())
            .unwrap_or_default()
    }
}
