mod support;

mod bellman_tests;
mod config_tests;
mod property_solver_tests;
