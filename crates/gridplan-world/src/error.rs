use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for grid loading, validation, compilation, and builder operations.
pub enum ModelError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("invalid {name} probability: {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("dynamics probabilities must sum to 1.0 within {tolerance}, got {sum}")]
    ProbabilitySum { sum: f64, tolerance: f64 },

    #[error("default reward must be finite, got {value}")]
    InvalidDefaultReward { value: f64 },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("duplicate wall at ({row}, {col})")]
    DuplicateWall { row: usize, col: usize },

    #[error("terminal at ({row}, {col}) is placed on a wall")]
    TerminalOnWall { row: usize, col: usize },

    #[error("duplicate terminal at ({row}, {col})")]
    DuplicateTerminal { row: usize, col: usize },

    #[error("terminal reward at ({row}, {col}) must be finite, got {value}")]
    InvalidTerminalReward { row: usize, col: usize, value: f64 },

    #[error("walls cover every cell of the grid")]
    NoFreeCells,
}
