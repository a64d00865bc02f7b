use std::collections::HashMap;
use std::hash::Hash;

/// Total mapping from state to expected discounted cumulative reward.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable<S: Eq + Hash> {
    values: HashMap<S, f64>,
}

impl<S> ValueTable<S>
where
    S: Clone + Eq + Hash,
{
    /// Build a table with every listed state at utility zero.
    pub fn zeroed(states: &[S]) -> Self {
        ValueTable {
            values: states.iter().cloned().map(|state| (state, 0.0)).collect(),
        }
    }

    /// Utility for `state`, if the table covers it.
    pub fn value(&self, state: &S) -> Option<f64> {
        self.values.get(state).copied()
    }

    /// Set the utility for `state`.
    pub fn set(&mut self, state: S, value: f64) {
        self.values.insert(state, value);
    }

    /// Number of states in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(state, utility)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> {
        self.values.iter().map(|(state, value)| (state, *value))
    }
}
