mod model;
mod solve;

pub use model::{MdpModel, Transition};
pub use solve::config::{SolverConfig, SolverConfigError};
pub use solve::error::SolveError;
pub use solve::policy::Policy;
pub use solve::policy_iteration::RoundMetrics;
pub use solve::snapshot::{EntrySnapshot, SolutionSnapshot};
pub use solve::solver::{DpSolver, SolveMetrics, Solution};
pub use solve::value_iteration::SweepMetrics;
pub use solve::values::ValueTable;
