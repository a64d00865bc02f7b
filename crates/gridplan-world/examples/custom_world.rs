use gridplan_core::{DpSolver, SolverConfig};
use gridplan_world::GridBuilder;

fn main() {
    let mut builder = GridBuilder::new(2, 3);
    builder
        .terminal(0, 2, 1.0)
        .wall(1, 1)
        .default_reward(-0.1);
    let world = builder.compile().expect("failed to compile grid");

    let config = SolverConfig {
        gamma: 0.95,
        ..SolverConfig::default()
    };
    let solver = DpSolver::new(&world, config).expect("invalid solver config");
    let solution = solver
        .solve_value_iteration()
        .expect("value iteration failed");

    println!(
        "sweeps={} final_delta={:.3e}",
        solution.metrics.sweeps_completed, solution.metrics.final_delta
    );
    for cell in solver.states() {
        let value = solution.utilities.value(cell).unwrap_or(0.0);
        println!("{cell} value={value:.4} action={:?}", solution.policy.action(cell));
    }
}
