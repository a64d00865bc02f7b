use crate::model::MdpModel;
use crate::solve::{error::SolveError, values::ValueTable};

/// Probability-weighted successor utility for one `(state, action)`.
pub(crate) fn expected_value<M: MdpModel>(
    model: &M,
    state: &M::State,
    action: &M::Action,
    utilities: &ValueTable<M::State>,
) -> Result<f64, SolveError> {
    let mut expected = 0.0;
    for transition in model.transitions(state, action) {
        let value = utilities
            .value(&transition.next)
            .ok_or_else(|| SolveError::UnknownState {
                state: format!("{:?}", transition.next),
            })?;
        expected += transition.prob * value;
    }
    Ok(expected)
}

/// Action values for every legal action at `state`, in the model's action
/// order. Reward is not part of the action value; it enters the Bellman
/// update once at the state level.
pub(crate) fn q_values<M: MdpModel>(
    model: &M,
    state: &M::State,
    utilities: &ValueTable<M::State>,
) -> Result<Vec<(M::Action, f64)>, SolveError> {
    let actions = model.actions(state);
    let mut values = Vec::with_capacity(actions.len());
    for action in actions {
        let expected = expected_value(model, state, &action, utilities)?;
        values.push((action, expected));
    }
    Ok(values)
}

/// Pick the entry with the highest value. Ties resolve to the earliest entry,
/// so the scan is deterministic for a fixed action order.
pub(crate) fn best_action<A>(values: &[(A, f64)]) -> Option<(&A, f64)> {
    let mut best: Option<(&A, f64)> = None;

    for (action, value) in values {
        best = match best {
            Some((best_action, best_value)) if best_value >= *value => {
                Some((best_action, best_value))
            }
            _ => Some((action, *value)),
        };
    }

    best
}
