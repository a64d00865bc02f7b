mod builder;
mod cell;
mod error;
mod grid;
mod io;
mod spec;

pub use builder::GridBuilder;
pub use cell::{Cell, Move};
pub use error::ModelError;
pub use grid::GridWorld;
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use spec::{DynamicsSpec, GridSpec, TerminalSpec};
