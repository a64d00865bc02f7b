mod bellman;
pub mod config;
pub mod error;
pub mod policy;
pub mod policy_iteration;
pub mod snapshot;
pub mod solver;
pub mod value_iteration;
pub mod values;

#[cfg(test)]
mod tests;
