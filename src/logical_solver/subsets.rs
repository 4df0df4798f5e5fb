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

//! Naked and hidden subsets of sizes 2-4.
//!
//! Combinations are generated by plain n-choose-k enumeration over the
//! filtered cells (or digits) of a unit, short-circuiting on the first
//! combination that yields a non-empty elimination set.

use crate::grid::{self, ALL_UNITS, Grid};
use crate::types::{Elimination, Move, Technique};

// --- Naked Subsets ---

pub fn find_naked_pair(grid: &Grid) -> Option<Move> {
    find_naked_subset(grid, 2, Technique::NakedPair)
}

pub fn find_naked_triple(grid: &Grid) -> Option<Move> {
    find_naked_subset(grid, 3, Technique::NakedTriple)
}

pub fn find_naked_quad(grid: &Grid) -> Option<Move> {
    find_naked_subset(grid, 4, Technique::NakedQuad)
}

/// `size` cells of a unit whose candidate union has exactly `size`
/// digits lock those digits: every other cell of the unit loses them.
fn find_naked_subset(grid: &Grid, size: usize, technique: Technique) -> Option<Move> {
    for unit in ALL_UNITS.iter() {
        let unit_slice = *unit;
        let candidate_cells: Vec<usize> = unit_slice
            .iter()
            .filter(|&&i| {
                let c = grid::count_candidates(grid.candidates(i)) as usize;
                grid.value(i) == 0 && c >= 2 && c <= size
            })
            .cloned()
            .collect();

        if candidate_cells.len() < size {
            continue;
        }

        let mut combo = Vec::with_capacity(size);
        if let Some(mv) = naked_combinations(
            grid,
            unit_slice,
            &candidate_cells,
            size,
            technique,
            0,
            &mut combo,
        ) {
            return Some(mv);
        }
    }
    None
}

fn naked_combinations(
    grid: &Grid,
    unit: &[usize],
    cells: &[usize],
    size: usize,
    technique: Technique,
    start: usize,
    combo: &mut Vec<usize>,
) -> Option<Move> {
    if combo.len() == size {
        let union: u16 = combo.iter().fold(0, |mask, &i| mask | grid.candidates(i));
        if union.count_ones() as usize == size {
            return construct_naked_subset_move(grid, combo, union, unit, technique);
        }
        return None;
    }

    for i in start..cells.len() {
        combo.push(cells[i]);
        if let Some(mv) =
            naked_combinations(grid, unit, cells, size, technique, i + 1, combo)
        {
            return Some(mv);
        }
        combo.pop();
    }
    None
}

fn construct_naked_subset_move(
    grid: &Grid,
    combo: &[usize],
    mask: u16,
    unit: &[usize],
    technique: Technique,
) -> Option<Move> {
    let mut eliminations = Vec::new();
    for &idx in unit {
        if combo.contains(&idx) || grid.value(idx) != 0 {
            continue;
        }
        let hit = grid.candidates(idx) & mask;
        if hit != 0 {
            eliminations.push(Elimination {
                index: idx,
                values: grid::candidate_list(hit),
            });
        }
    }

    if eliminations.is_empty() {
        return None;
    }
    Some(Move::eliminate(technique, eliminations))
}

// --- Hidden Subsets ---

pub fn find_hidden_pair(grid: &Grid) -> Option<Move> {
    find_hidden_subset(grid, 2, Technique::HiddenPair)
}

pub fn find_hidden_triple(grid: &Grid) -> Option<Move> {
    find_hidden_subset(grid, 3, Technique::HiddenTriple)
}

pub fn find_hidden_quad(grid: &Grid) -> Option<Move> {
    find_hidden_subset(grid, 4, Technique::HiddenQuad)
}

/// `size` digits of a unit confined to exactly `size` cells lock those
/// cells: every other candidate is removed from them.
fn find_hidden_subset(grid: &Grid, size: usize, technique: Technique) -> Option<Move> {
    for unit in ALL_UNITS.iter() {
        let unit_slice = *unit;
        let pos_masks = candidate_positions_in_unit(grid, unit_slice);
        let digits: Vec<usize> = (1..=9)
            .filter(|&n| {
                let c = pos_masks[n].count_ones() as usize;
                c >= 2 && c <= size
            })
            .collect();

        if digits.len() < size {
            continue;
        }

        let mut combo = Vec::with_capacity(size);
        if let Some(mv) = hidden_combinations(
            grid,
            unit_slice,
            &pos_masks,
            &digits,
            size,
            technique,
            0,
            &mut combo,
        ) {
            return Some(mv);
        }
    }
    None
}

#[allow(clippy::too_many_arguments)]
fn hidden_combinations(
    grid: &Grid,
    unit: &[usize],
    pos_masks: &[u16; 10],
    digits: &[usize],
    size: usize,
    technique: Technique,
    start: usize,
    combo: &mut Vec<usize>,
) -> Option<Move> {
    if combo.len() == size {
        let positions: u16 = combo.iter().fold(0, |mask, &n| mask | pos_masks[n]);
        if positions.count_ones() as usize == size {
            let keep_mask: u16 = combo.iter().fold(0, |mask, &n| mask | 1 << (n - 1));
            return construct_hidden_subset_move(grid, unit, positions, keep_mask, technique);
        }
        return None;
    }

    for i in start..digits.len() {
        combo.push(digits[i]);
        if let Some(mv) = hidden_combinations(
            grid,
            unit,
            pos_masks,
            digits,
            size,
            technique,
            i + 1,
            combo,
        ) {
            return Some(mv);
        }
        combo.pop();
    }
    None
}

/// Creates a map of where each digit appears in a unit.
/// Returns `[u16; 10]` where index `n` (1-9) is a bitmask of positions
/// (0-8) within the unit.
#[inline]
fn candidate_positions_in_unit(grid: &Grid, unit: &[usize]) -> [u16; 10] {
    let mut positions = [0u16; 10];
    for (pos, &idx) in unit.iter().enumerate() {
        if grid.value(idx) == 0 {
            let mut mask = grid.candidates(idx);
            while mask > 0 {
                let trailing = mask.trailing_zeros(); // 0-8
                let num = trailing + 1; // 1-9
                positions[num as usize] |= 1 << pos;
                mask &= !(1 << trailing);
            }
        }
    }
    positions
}

#[inline]
fn indices_from_unit_mask(unit: &[usize], mask: u16) -> Vec<usize> {
    let mut indices = Vec::with_capacity(mask.count_ones() as usize);
    for (i, &cell_idx) in unit.iter().enumerate() {
        if (mask & (1 << i)) != 0 {
            indices.push(cell_idx);
        }
    }
    indices
}

fn construct_hidden_subset_move(
    grid: &Grid,
    unit: &[usize],
    positions: u16,
    keep_mask: u16,
    technique: Technique,
) -> Option<Move> {
    let mut eliminations = Vec::new();
    for idx in indices_from_unit_mask(unit, positions) {
        let other = grid.candidates(idx) & !keep_mask;
        if other != 0 {
            eliminations.push(Elimination {
                index: idx,
                values: grid::candidate_list(other),
            });
        }
    }

    if eliminations.is_empty() {
        return None;
    }
    Some(Move::eliminate(technique, eliminations))
}
