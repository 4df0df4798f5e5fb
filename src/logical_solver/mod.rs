/*
* Copyright (C) 2026  The bitdoku authors
* This file is part of bitdoku.
*
* bitdoku is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* bitdoku is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with bitdoku.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Human-style deduction: the technique catalog and its dispatcher.
//!
//! Each technique is a stateless function taking a grid snapshot and
//! returning at most one [`Move`] — the first match found by its internal
//! scan order. The dispatcher consults the catalog in a fixed priority
//! order (cheapest, most human-natural techniques first) and applies moves
//! to a fresh copy of the grid.

pub mod basic;
pub mod fish;
pub mod intersection;
pub mod single_digit;
pub mod subsets;

use crate::error::SudokuError;
use crate::grid::Grid;
use crate::types::Move;

/// A technique finder: grid snapshot in, first matching move out.
pub type Finder = fn(&Grid) -> Option<Move>;

/// The core catalog in priority order.
const CORE_CATALOG: &[Finder] = &[
    basic::find_full_house,
    basic::find_naked_single,
    basic::find_hidden_single,
    intersection::find_pointing_candidates,
    intersection::find_claiming_candidates,
    subsets::find_naked_pair,
    subsets::find_naked_triple,
    subsets::find_naked_quad,
    subsets::find_hidden_pair,
    subsets::find_hidden_triple,
    subsets::find_hidden_quad,
];

/// The fish / single-digit pattern family, consulted after the core
/// catalog when [`Catalog::Extended`] is selected.
const FISH_CATALOG: &[Finder] = &[
    fish::find_x_wing,
    fish::find_swordfish,
    single_digit::find_skyscraper,
    single_digit::find_two_string_kite,
    single_digit::find_turbot_fish,
];

/// Which technique families the dispatcher consults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Catalog {
    /// Singles, intersections and subsets.
    #[default]
    Core,
    /// Core plus the fish / single-digit pattern family.
    Extended,
}

impl Catalog {
    fn finders(self) -> impl Iterator<Item = &'static Finder> {
        let extension: &[Finder] = match self {
            Catalog::Core => &[],
            Catalog::Extended => FISH_CATALOG,
        };
        CORE_CATALOG.iter().chain(extension.iter())
    }
}

/// Finds the highest-priority applicable move in the default catalog.
///
/// Fails with `InvalidGrid` if the grid does not pass its validity gate,
/// and with `NoMoveFound` when the catalog is exhausted. The latter is an
/// expected, recoverable "stuck" signal, not a fatal condition.
pub fn find_next_move(grid: &Grid) -> Result<Move, SudokuError> {
    find_next_move_in(grid, Catalog::default())
}

/// [`find_next_move`] against an explicit catalog.
pub fn find_next_move_in(grid: &Grid, catalog: Catalog) -> Result<Move, SudokuError> {
    ensure_valid(grid)?;
    catalog
        .finders()
        .find_map(|finder| finder(grid))
        .ok_or(SudokuError::NoMoveFound)
}

/// Collects the first match of every technique, not only the global
/// first. Diagnostic variant used for coverage analysis.
pub fn find_all_moves(grid: &Grid, catalog: Catalog) -> Result<Vec<Move>, SudokuError> {
    ensure_valid(grid)?;
    Ok(catalog.finders().filter_map(|finder| finder(grid)).collect())
}

/// Applies a move to a copy of the grid and returns the copy.
///
/// A move computed against the current grid always applies cleanly, so
/// any failure from the underlying cell operations indicates a catalog or
/// dispatcher defect and is re-signaled as `InvalidGrid`.
pub fn apply_move(grid: &Grid, mv: &Move) -> Result<Grid, SudokuError> {
    let mut next = *grid;
    if let Some(p) = mv.placement {
        next.set_cell(p.index, p.value, false)
            .map_err(|e| SudokuError::InvalidGrid(format!("applying {}: {e}", mv.technique)))?;
    }
    for elimination in &mv.eliminations {
        for &value in &elimination.values {
            next.remove_candidate(elimination.index, value).map_err(|e| {
                SudokuError::InvalidGrid(format!("applying {}: {e}", mv.technique))
            })?;
        }
    }
    Ok(next)
}

/// Outcome of a logical solve.
#[derive(Debug, Clone)]
pub struct LogicalResult {
    /// The grid after the last applied move.
    pub grid: Grid,
    /// Every applied move, in order.
    pub moves: Vec<Move>,
    /// True when the final grid is completely filled. A false value means
    /// the puzzle needs a technique outside the consulted catalog — a
    /// capability boundary, not an error.
    pub solved: bool,
}

/// Repeatedly asks the dispatcher for the next move and applies it until
/// the catalog is exhausted, recording each step.
pub fn solve_logically(grid: &Grid) -> Result<LogicalResult, SudokuError> {
    solve_logically_with(grid, Catalog::default())
}

/// [`solve_logically`] against an explicit catalog.
pub fn solve_logically_with(grid: &Grid, catalog: Catalog) -> Result<LogicalResult, SudokuError> {
    let mut current = *grid;
    let mut moves = Vec::new();
    loop {
        match find_next_move_in(&current, catalog) {
            Ok(mv) => {
                current = apply_move(&current, &mv)?;
                moves.push(mv);
            }
            Err(SudokuError::NoMoveFound) => break,
            Err(e) => return Err(e),
        }
    }
    let solved = current.is_complete();
    log::trace!(
        "logical solve applied {} moves, solved: {solved}",
        moves.len()
    );
    Ok(LogicalResult {
        grid: current,
        moves,
        solved,
    })
}

fn ensure_valid(grid: &Grid) -> Result<(), SudokuError> {
    if grid.is_valid() {
        Ok(())
    } else {
        Err(SudokuError::InvalidGrid(
            "grid fails its validity preconditions".into(),
        ))
    }
}

/// Pre-calculates per-digit position masks in a single grid pass.
/// Returns `([digit][row] -> column mask, [digit][col] -> row mask)`.
/// Shared by the fish and single-digit pattern finders.
pub(crate) fn digit_line_masks(grid: &Grid) -> ([[u16; 9]; 10], [[u16; 9]; 10]) {
    let mut row_masks = [[0u16; 9]; 10];
    let mut col_masks = [[0u16; 9]; 10];

    for i in 0..81 {
        if grid.value(i) == 0 {
            let r = i / 9;
            let c = i % 9;
            let mut mask = grid.candidates(i);
            while mask > 0 {
                let trailing = mask.trailing_zeros();
                let num = (trailing + 1) as usize;
                row_masks[num][r] |= 1 << c;
                col_masks[num][c] |= 1 << r;
                mask &= !(1 << trailing);
            }
        }
    }
    (row_masks, col_masks)
}
