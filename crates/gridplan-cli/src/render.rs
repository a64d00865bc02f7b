use gridplan_core::{MdpModel, Policy, ValueTable};
use gridplan_world::{Cell, GridWorld, Move};

/// Render utilities row by row, one fixed-width cell per square. Walls show
/// a marker so the grid keeps its shape.
pub fn utilities_grid(world: &GridWorld, utilities: &ValueTable<Cell>) -> String {
    let mut out = String::new();
    for row in 0..world.rows() {
        for col in 0..world.cols() {
            let cell = Cell::new(row, col);
            if world.is_wall(&cell) {
                out.push_str("  #WALL#  ");
            } else {
                let value = utilities.value(&cell).unwrap_or(0.0);
                out.push_str(&format!(" {value:8.2} "));
            }
        }
        out.push('\n');
    }
    out
}

/// Render the policy row by row: arrows for chosen moves, labels for exits
/// and blocked cells, a dot where no move is assigned.
pub fn policy_grid(world: &GridWorld, policy: &Policy<Cell, Move>) -> String {
    let mut out = String::new();
    for row in 0..world.rows() {
        for col in 0..world.cols() {
            let cell = Cell::new(row, col);
            out.push_str(&policy_cell(world, policy, cell));
        }
        out.push('\n');
    }
    out
}

fn policy_cell(world: &GridWorld, policy: &Policy<Cell, Move>, cell: Cell) -> String {
    if world.is_wall(&cell) {
        return "  #WALL#  ".to_string();
    }
    if world.is_terminal(&cell) {
        // Exits are labelled by the sign of their payout.
        return if world.reward(&cell) >= 0.0 {
            "  [GOAL]  ".to_string()
        } else {
            "  [TRAP]  ".to_string()
        };
    }

    let marker = match policy.action(&cell) {
        Some(Move::North) => '^',
        Some(Move::South) => 'v',
        Some(Move::East) => '>',
        Some(Move::West) => '<',
        None => '.',
    };
    format!("    {marker}     ")
}
