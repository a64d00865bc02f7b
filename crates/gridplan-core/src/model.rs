use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq)]
/// One probabilistic successor of a `(state, action)` pair.
pub struct Transition<S> {
    /// Probability of landing in `next`.
    pub prob: f64,
    /// The successor state.
    pub next: S,
}

/// Query interface for a finite, fully known decision process.
///
/// Implementations are read-only: every method may be called any number of
/// times without side effects, and `states()` must return the same set in the
/// same order on every call. The solver is generic over this trait and never
/// mutates the model.
pub trait MdpModel {
    type State: Clone + Eq + Hash + Ord + Debug;
    type Action: Clone + PartialEq + Debug;

    /// Every state in the model.
    fn states(&self) -> Vec<Self::State>;

    /// Whether `state` is absorbing.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Legal actions at `state`. Empty for terminal states.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Immediate reward for occupying `state`. Defined for every state,
    /// terminal ones included.
    fn reward(&self, state: &Self::State) -> f64;

    /// Successor distribution for a legal `(state, action)`. Each successor
    /// appears at most once and probabilities sum to 1 within tolerance;
    /// terminal states return no transitions.
    fn transitions(&self, state: &Self::State, action: &Self::Action)
    -> Vec<Transition<Self::State>>;
}
