use crate::{Cell, DynamicsSpec, GridSpec, GridWorld, ModelError, TerminalSpec};

#[derive(Debug, Clone)]
/// Struct to build grid worlds in code
pub struct GridBuilder {
    rows: usize,
    cols: usize,
    default_reward: f64,
    walls: Vec<Cell>,
    terminals: Vec<TerminalSpec>,
    dynamics: DynamicsSpec,
}

impl GridBuilder {
    /// Create a builder for a board of the given dimensions.
    /// The living reward starts at the classic -0.04.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            default_reward: -0.04,
            walls: Vec::new(),
            terminals: Vec::new(),
            dynamics: DynamicsSpec::default(),
        }
    }

    /// Block a cell
    pub fn wall(&mut self, row: usize, col: usize) -> &mut Self {
        self.walls.push(Cell::new(row, col));
        self
    }

    /// Mark a cell absorbing with the given payout
    pub fn terminal(&mut self, row: usize, col: usize, reward: f64) -> &mut Self {
        self.terminals.push(TerminalSpec { row, col, reward });
        self
    }

    /// Set the living reward for free, non-terminal cells
    pub fn default_reward(&mut self, reward: f64) -> &mut Self {
        self.default_reward = reward;
        self
    }

    /// Override the slip model
    pub fn dynamics(&mut self, intend: f64, slip_left: f64, slip_right: f64) -> &mut Self {
        self.dynamics = DynamicsSpec {
            intend,
            slip_left,
            slip_right,
        };
        self
    }

    pub fn build_spec(self) -> Result<GridSpec, ModelError> {
        let spec = GridSpec {
            version: Some(1),
            rows: self.rows,
            cols: self.cols,
            default_reward: self.default_reward,
            walls: self.walls,
            terminals: self.terminals,
            dynamics: self.dynamics,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn compile(self) -> Result<GridWorld, ModelError> {
        let spec = self.build_spec()?;
        spec.compile()
    }
}
