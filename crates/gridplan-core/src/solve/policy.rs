use std::collections::HashMap;
use std::hash::Hash;

/// Total mapping from state to chosen action.
///
/// Terminal states and non-terminal states without legal actions carry no
/// choice; `action` returns `None` for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy<S: Eq + Hash, A> {
    choices: HashMap<S, Option<A>>,
}

impl<S, A> Policy<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + PartialEq,
{
    /// Build a policy with every listed state unassigned.
    pub fn unassigned(states: &[S]) -> Self {
        Policy {
            choices: states.iter().cloned().map(|state| (state, None)).collect(),
        }
    }

    /// The chosen action for `state`, if any.
    pub fn action(&self, state: &S) -> Option<&A> {
        self.choices.get(state).and_then(|choice| choice.as_ref())
    }

    /// Assign a choice to `state`.
    pub fn assign(&mut self, state: S, action: Option<A>) {
        self.choices.insert(state, action);
    }

    /// Number of states covered by the policy.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Iterate over `(state, choice)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, Option<&A>)> {
        self.choices
            .iter()
            .map(|(state, choice)| (state, choice.as_ref()))
    }
}
