//! Slot machine spins over a 3×3 grid.
//!
//! Each of the nine cells is an independent weighted symbol draw; payout
//! is evaluated over 8 fixed win lines. Grid generation and line
//! evaluation are split so a forced grid can be checked without randomness.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::weighted::{WeightedOutcome, WeightedTable};

pub const GRID_CELLS: usize = 9;

/// Index triple into the row-major 3×3 grid.
pub type WinLine = [usize; 3];

/// 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Static symbol configuration: reel weight and per-line payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSymbol {
    pub id: u32,
    pub weight: u32,
    pub payout: u32,
}

/// One spin's outcome. Nothing is persisted between spins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResult {
    /// Symbol ids, row-major.
    pub grid: [u32; GRID_CELLS],
    pub winning_lines: Vec<WinLine>,
    pub total_payout: u32,
    pub is_win: bool,
}

/// Fills the grid with nine independent weighted draws and evaluates it.
pub fn spin(symbols: &[SlotSymbol], rng: &mut impl RandomSource) -> Result<SlotResult, EngineError> {
    let entries = symbols
        .iter()
        .map(|s| WeightedOutcome {
            outcome: s.id,
            weight: s.weight,
        })
        .collect();
    let table = WeightedTable::new(entries)?;

    let mut grid = [0u32; GRID_CELLS];
    for cell in grid.iter_mut() {
        *cell = *table.select(rng);
    }
    Ok(check_win_lines(grid, symbols))
}

/// Evaluates the 8 fixed win lines over an already-filled grid. A line
/// wins when all three cells share a symbol id; its payout is that
/// symbol's payout.
pub fn check_win_lines(grid: [u32; GRID_CELLS], symbols: &[SlotSymbol]) -> SlotResult {
    let mut winning_lines = Vec::new();
    let mut total_payout = 0u32;

    for line in WIN_LINES {
        let [a, b, c] = line;
        if grid[a] == grid[b] && grid[b] == grid[c] {
            winning_lines.push(line);
            total_payout += payout_for(symbols, grid[a]);
        }
    }

    let is_win = !winning_lines.is_empty();
    SlotResult {
        grid,
        winning_lines,
        total_payout,
        is_win,
    }
}

fn payout_for(symbols: &[SlotSymbol], id: u32) -> u32 {
    symbols
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.payout)
        .unwrap_or(0)
}
