use std::collections::{HashMap, HashSet};

use gridplan_core::{MdpModel, Transition};

use crate::{Cell, DynamicsSpec, GridSpec, ModelError, Move};

/// Floating point tolerance used when validating probability sums.
pub(crate) const PROB_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
/// Runtime form of a grid world with resolved cells and slip dynamics.
pub struct GridWorld {
    rows: usize,
    cols: usize,
    default_reward: f64,
    dynamics: DynamicsSpec,
    walls: HashSet<Cell>,
    terminals: HashMap<Cell, f64>,
    states: Vec<Cell>,
}

impl GridWorld {
    /// Compile and validate a spec into the runtime representation.
    pub(crate) fn from_spec(spec: &GridSpec) -> Result<Self, ModelError> {
        spec.validate_with_tolerance(PROB_TOLERANCE)?;

        let walls: HashSet<Cell> = spec.walls.iter().copied().collect();
        let terminals: HashMap<Cell, f64> = spec
            .terminals
            .iter()
            .map(|terminal| (Cell::new(terminal.row, terminal.col), terminal.reward))
            .collect();

        // Row-major enumeration keeps sweeps and snapshots in reading order.
        let mut states = Vec::with_capacity(spec.rows * spec.cols - walls.len());
        for row in 0..spec.rows {
            for col in 0..spec.cols {
                let cell = Cell::new(row, col);
                if !walls.contains(&cell) {
                    states.push(cell);
                }
            }
        }

        Ok(Self {
            rows: spec.rows,
            cols: spec.cols,
            default_reward: spec.default_reward,
            dynamics: spec.dynamics,
            walls,
            terminals,
            states,
        })
    }

    /// Number of rows on the board.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns on the board.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of non-wall cells.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Check whether a cell is blocked.
    pub fn is_wall(&self, cell: &Cell) -> bool {
        self.walls.contains(cell)
    }

    /// Where a move actually lands. Steps off the board or into a wall
    /// stay put.
    fn destination(&self, cell: Cell, mv: Move) -> Cell {
        let (row_delta, col_delta) = mv.delta();
        let row = cell.row as isize + row_delta;
        let col = cell.col as isize + col_delta;
        if row < 0 || col < 0 {
            return cell;
        }

        let target = Cell::new(row as usize, col as usize);
        if target.row >= self.rows || target.col >= self.cols || self.walls.contains(&target) {
            return cell;
        }
        target
    }
}

impl MdpModel for GridWorld {
    type State = Cell;
    type Action = Move;

    fn states(&self) -> Vec<Cell> {
        self.states.clone()
    }

    fn is_terminal(&self, state: &Cell) -> bool {
        self.terminals.contains_key(state)
    }

    fn actions(&self, state: &Cell) -> Vec<Move> {
        if self.terminals.contains_key(state) || self.walls.contains(state) {
            return Vec::new();
        }
        Move::ALL.to_vec()
    }

    fn reward(&self, state: &Cell) -> f64 {
        match self.terminals.get(state) {
            Some(reward) => *reward,
            None => self.default_reward,
        }
    }

    fn transitions(&self, state: &Cell, action: &Move) -> Vec<Transition<Cell>> {
        if self.terminals.contains_key(state) || self.walls.contains(state) {
            return Vec::new();
        }

        let outcomes = [
            (self.dynamics.intend, *action),
            (self.dynamics.slip_left, action.slip_left()),
            (self.dynamics.slip_right, action.slip_right()),
        ];

        // Blocked outcomes collapse onto the same cell, so merge duplicates
        // to keep one entry per successor.
        let mut merged: Vec<Transition<Cell>> = Vec::with_capacity(outcomes.len());
        for (prob, mv) in outcomes {
            if prob == 0.0 {
                continue;
            }
            let next = self.destination(*state, mv);
            match merged.iter_mut().find(|transition| transition.next == next) {
                Some(transition) => transition.prob += prob,
                None => merged.push(Transition { prob, next }),
            }
        }

        merged
    }
}
