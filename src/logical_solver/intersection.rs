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

//! Block/line intersection techniques: Pointing Candidates and Claiming
//! Candidates (box-line reduction).

use std::collections::HashSet;

use crate::grid::{BLOCK_UNITS, COL_UNITS, Grid, ROW_UNITS};
use crate::types::{Elimination, Move, Technique};

// --- Pointing Candidates ---

/// Searches for a digit confined, within one block, to 2-3 cells that all
/// share a row or column: the digit is eliminated from the rest of that
/// line outside the block.
pub fn find_pointing_candidates(grid: &Grid) -> Option<Move> {
    for (block_idx, block_unit) in BLOCK_UNITS.iter().enumerate() {
        for num in 1..=9 {
            let mask = 1u16 << (num - 1);
            let cells: Vec<usize> = block_unit
                .iter()
                .filter(|&&i| grid.value(i) == 0 && (grid.candidates(i) & mask) != 0)
                .cloned()
                .collect();

            if cells.len() < 2 || cells.len() > 3 {
                continue;
            }

            if let Some(mv) = check_pointing_alignment(grid, &cells, block_idx, num) {
                return Some(mv);
            }
        }
    }
    None
}

/// Checks if the cells align in a row or column and builds the move.
#[inline]
fn check_pointing_alignment(
    grid: &Grid,
    cells: &[usize],
    block_idx: usize,
    num: u8,
) -> Option<Move> {
    let row0 = cells[0] / 9;
    let col0 = cells[0] % 9;
    let same_row = cells.iter().all(|&c| c / 9 == row0);
    let same_col = cells.iter().all(|&c| c % 9 == col0);
    let mask = 1u16 << (num - 1);

    if same_row {
        let eliminations = collect_pointing_eliminations(
            grid,
            num,
            mask,
            |col| row0 * 9 + col, // Coordinate mapper for the row.
            block_idx,
        );
        if !eliminations.is_empty() {
            return Some(Move::eliminate(Technique::PointingCandidates, eliminations));
        }
    }

    if same_col {
        let eliminations = collect_pointing_eliminations(
            grid,
            num,
            mask,
            |row| row * 9 + col0, // Coordinate mapper for the column.
            block_idx,
        );
        if !eliminations.is_empty() {
            return Some(Move::eliminate(Technique::PointingCandidates, eliminations));
        }
    }
    None
}

/// Generic helper to collect eliminations along a line, skipping the
/// source block. Iterates 0..9 through a coordinate mapper so rows and
/// columns share one implementation.
#[inline]
fn collect_pointing_eliminations<F>(
    grid: &Grid,
    num: u8,
    mask: u16,
    mapper: F,
    block_idx: usize,
) -> Vec<Elimination>
where
    F: Fn(usize) -> usize,
{
    let mut eliminations = Vec::new();
    for k in 0..9 {
        let idx = mapper(k);
        // Eliminate only outside the source block.
        if (idx / 27 != block_idx / 3 || (idx % 9) / 3 != block_idx % 3)
            && grid.value(idx) == 0
            && (grid.candidates(idx) & mask) != 0
        {
            eliminations.push(Elimination {
                index: idx,
                values: vec![num],
            });
        }
    }
    eliminations
}

// --- Claiming Candidates ---

/// Searches for a digit confined, within one row or column, to cells of a
/// single block: the digit is eliminated from the rest of that block.
pub fn find_claiming_candidates(grid: &Grid) -> Option<Move> {
    for row in 0..9 {
        if let Some(mv) = find_claiming_in_line(grid, row, true) {
            return Some(mv);
        }
    }
    for col in 0..9 {
        if let Some(mv) = find_claiming_in_line(grid, col, false) {
            return Some(mv);
        }
    }
    None
}

/// Generic check for a linear unit (row or column).
#[inline]
fn find_claiming_in_line(grid: &Grid, line_idx: usize, is_row: bool) -> Option<Move> {
    let unit = if is_row {
        &ROW_UNITS[line_idx]
    } else {
        &COL_UNITS[line_idx]
    };

    for num in 1..=9 {
        let mask = 1u16 << (num - 1);
        let mut cells = Vec::new();
        let mut block_indices = HashSet::new();

        for &idx in unit.iter() {
            if grid.value(idx) == 0 && (grid.candidates(idx) & mask) != 0 {
                cells.push(idx);
                block_indices.insert((idx / 9 / 3) * 3 + (idx % 9 / 3));
            }
        }

        // All of the line's candidates sit in one block: the rest of that
        // block cannot hold the digit.
        if !cells.is_empty() && block_indices.len() == 1 {
            let block_idx = *block_indices.iter().next()?;
            let eliminations =
                collect_claiming_eliminations(grid, block_idx, line_idx, is_row, num, mask);

            if !eliminations.is_empty() {
                return Some(Move::eliminate(Technique::ClaimingCandidates, eliminations));
            }
        }
    }
    None
}

/// Helper to collect eliminations within the block, outside the source
/// line.
#[inline]
fn collect_claiming_eliminations(
    grid: &Grid,
    block_idx: usize,
    source_line_idx: usize,
    is_row: bool,
    num: u8,
    mask: u16,
) -> Vec<Elimination> {
    let mut eliminations = Vec::new();
    for &idx in &BLOCK_UNITS[block_idx] {
        let line_match = if is_row {
            idx / 9 == source_line_idx
        } else {
            idx % 9 == source_line_idx
        };

        if !line_match && grid.value(idx) == 0 && (grid.candidates(idx) & mask) != 0 {
            eliminations.push(Elimination {
                index: idx,
                values: vec![num],
            });
        }
    }
    eliminations
}
