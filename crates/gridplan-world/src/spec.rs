use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Cell, GridWorld, ModelError, grid::PROB_TOLERANCE};

/// Bundled default layout: the classic 3x4 board with one wall, a +1 exit,
/// and a -1 trap.
const DEFAULT_GRID_YAML: &str = include_str!("../config/gridworld.default.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable grid-world schema used for YAML IO and validation.
pub struct GridSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Number of rows on the board.
    pub rows: usize,
    /// Number of columns on the board.
    pub cols: usize,
    /// Living reward collected in every free, non-terminal cell.
    #[serde(default)]
    pub default_reward: f64,
    /// Blocked cells, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub walls: Vec<Cell>,
    /// Absorbing cells and their payouts.
    pub terminals: Vec<TerminalSpec>,
    /// Slip model applied to every move.
    #[serde(default)]
    pub dynamics: DynamicsSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// An absorbing cell and the reward collected there.
pub struct TerminalSpec {
    pub row: usize,
    pub col: usize,
    pub reward: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
/// Probabilities of the intended move and its two perpendicular slips.
pub struct DynamicsSpec {
    pub intend: f64,
    pub slip_left: f64,
    pub slip_right: f64,
}

impl Default for DynamicsSpec {
    fn default() -> Self {
        Self {
            intend: 0.8,
            slip_left: 0.1,
            slip_right: 0.1,
        }
    }
}

impl GridSpec {
    /// Return the bundled default layout as YAML text.
    pub fn default_yaml() -> &'static str {
        DEFAULT_GRID_YAML
    }

    /// Parse and validate the bundled default layout.
    pub fn from_default_yaml() -> Result<Self, ModelError> {
        let spec: GridSpec = serde_yaml::from_str(DEFAULT_GRID_YAML)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Validate schema invariants using the crate default tolerance.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.validate_with_tolerance(PROB_TOLERANCE)
    }

    /// Validate dimensions, dynamics, and cell declarations.
    pub fn validate_with_tolerance(&self, tolerance: f64) -> Result<(), ModelError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ModelError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        for (name, value) in [
            ("intend", self.dynamics.intend),
            ("slip_left", self.dynamics.slip_left),
            ("slip_right", self.dynamics.slip_right),
        ] {
            if value.is_nan() || !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidProbability { name, value });
            }
        }

        // The three slip outcomes must form a distribution.
        let sum = self.dynamics.intend + self.dynamics.slip_left + self.dynamics.slip_right;
        if (sum - 1.0).abs() > tolerance {
            return Err(ModelError::ProbabilitySum { sum, tolerance });
        }

        if !self.default_reward.is_finite() {
            return Err(ModelError::InvalidDefaultReward {
                value: self.default_reward,
            });
        }

        // Wall cells must be unique and on the board.
        let mut walls = HashSet::with_capacity(self.walls.len());
        for wall in &self.walls {
            if wall.row >= self.rows || wall.col >= self.cols {
                return Err(ModelError::OutOfBounds {
                    row: wall.row,
                    col: wall.col,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            if !walls.insert(*wall) {
                return Err(ModelError::DuplicateWall {
                    row: wall.row,
                    col: wall.col,
                });
            }
        }

        // Terminal cells must be unique, on the board, and not blocked.
        let mut terminals = HashSet::with_capacity(self.terminals.len());
        for terminal in &self.terminals {
            let cell = Cell::new(terminal.row, terminal.col);
            if cell.row >= self.rows || cell.col >= self.cols {
                return Err(ModelError::OutOfBounds {
                    row: cell.row,
                    col: cell.col,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            if walls.contains(&cell) {
                return Err(ModelError::TerminalOnWall {
                    row: cell.row,
                    col: cell.col,
                });
            }
            if !terminals.insert(cell) {
                return Err(ModelError::DuplicateTerminal {
                    row: cell.row,
                    col: cell.col,
                });
            }
            if !terminal.reward.is_finite() {
                return Err(ModelError::InvalidTerminalReward {
                    row: cell.row,
                    col: cell.col,
                    value: terminal.reward,
                });
            }
        }

        if walls.len() == self.rows * self.cols {
            return Err(ModelError::NoFreeCells);
        }

        Ok(())
    }

    /// Compile this spec into the runtime representation.
    pub fn compile(&self) -> Result<GridWorld, ModelError> {
        GridWorld::from_spec(self)
    }
}
