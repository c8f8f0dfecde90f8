//! Domain cost estimate used by best-first search and A*.

use freecell_engine::game_state::GameState;

/// Estimates the remaining effort of a state:
///
/// `cards still in the tableau + cards parked in free cells - non-empty
/// columns`.
///
/// Lower is better; the goal state scores 0. The estimate is **not
/// admissible**: the non-empty-column discount can overshoot the true
/// remaining move count, so best-first search guided by it is greedy and
/// A* using it carries no optimality guarantee. Callers needing shortest
/// solutions should use breadth-first search instead.
pub fn estimate(state: &GameState) -> i64 {
    let in_tableau = state.tableau().total_cards() as i64;
    let in_cells = state.freecells().occupied_count() as i64;
    let occupied_columns = state.tableau().occupied_columns() as i64;
    in_tableau + in_cells - occupied_columns
}
