use proptest::prelude::*;

use crate::solve::bellman;
use crate::{DpSolver, MdpModel, SolverConfig};

use super::support::TableModel;

/// Random chain: every non-terminal state can try to advance (with slip back
/// onto itself) or stay put; the last state absorbs.
fn chain_model(rewards: &[f64], advance: f64) -> TableModel {
    let mut model = TableModel::new();
    let last = (rewards.len() - 1) as u32;

    for (index, reward) in rewards.iter().enumerate() {
        let id = index as u32;
        if id == last {
            model.terminal(id, *reward);
        } else {
            model.state(id, *reward);
            model.choice(id, "advance", &[(advance, id + 1), (1.0 - advance, id)]);
            model.choice(id, "stay", &[(1.0, id)]);
        }
    }

    model
}

proptest! {
    #[test]
    fn value_iteration_satisfies_bellman_optimality(
        rewards in proptest::collection::vec(-1.0f64..1.0, 2..6),
        advance in 0.3f64..0.95,
        gamma in 0.1f64..0.9,
    ) {
        let model = chain_model(&rewards, advance);
        let config = SolverConfig {
            gamma,
            epsilon: 1e-8,
            ..SolverConfig::default()
        };
        let solver = DpSolver::new(&model, config).expect("config should validate");
        let solution = solver.solve_value_iteration().expect("solve should succeed");

        for state in solver.states() {
            let expected = if model.is_terminal(state) {
                model.reward(state)
            } else {
                let values = bellman::q_values(&model, state, &solution.utilities)
                    .expect("q_values should succeed");
                let max_q = values
                    .iter()
                    .map(|(_, value)| *value)
                    .fold(f64::NEG_INFINITY, f64::max);
                model.reward(state) + gamma * max_q
            };
            let actual = solution.utilities.value(state).expect("state is covered");
            prop_assert!((actual - expected).abs() <= 1e-7);
        }
    }

    #[test]
    fn both_algorithms_agree_on_random_chains(
        rewards in proptest::collection::vec(-1.0f64..1.0, 2..6),
        advance in 0.3f64..0.95,
        gamma in 0.1f64..0.9,
        seed in 0u64..4,
    ) {
        let model = chain_model(&rewards, advance);
        let config = SolverConfig {
            gamma,
            epsilon: 1e-8,
            seed,
            ..SolverConfig::default()
        };
        let solver = DpSolver::new(&model, config).expect("config should validate");

        let vi = solver.solve_value_iteration().expect("vi should succeed");
        let pi = solver.solve_policy_iteration().expect("pi should succeed");

        for state in solver.states() {
            let from_vi = vi.utilities.value(state).expect("state is covered");
            let from_pi = pi.utilities.value(state).expect("state is covered");
            prop_assert!((from_vi - from_pi).abs() <= 1e-3);

            if model.is_terminal(state) {
                continue;
            }

            // Policies must agree wherever the maximizer is unique.
            let values = solver
                .q_values(state, &vi.utilities)
                .expect("q_values should succeed");
            let mut sorted: Vec<f64> = values.iter().map(|(_, value)| *value).collect();
            sorted.sort_by(|a, b| b.partial_cmp(a).expect("finite action values"));
            if sorted.len() < 2 || sorted[0] - sorted[1] > 1e-6 {
                prop_assert_eq!(vi.policy.action(state), pi.policy.action(state));
            }
        }
    }
}
