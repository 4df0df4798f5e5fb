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

//! Placement-class techniques: Full House, Naked Single, Hidden Single.

use crate::grid::{self, ALL_UNITS, Grid, PEER_MAP};
use crate::types::{Elimination, Move, Technique};

/// Searches for a unit with exactly one empty cell: fill it with the
/// digit absent from the other eight.
pub fn find_full_house(grid: &Grid) -> Option<Move> {
    'units: for unit in ALL_UNITS.iter() {
        let mut empty = None;
        let mut seen = 0u16;
        for &idx in unit.iter() {
            match grid.value(idx) {
                0 => {
                    if empty.replace(idx).is_some() {
                        continue 'units;
                    }
                }
                v => seen |= 1 << (v - 1),
            }
        }
        let Some(index) = empty else { continue };
        // A duplicate among the other eight leaves more than one digit
        // missing; the unit is then no full house.
        let Some(value) = grid::single_candidate(grid::ALL_CANDIDATES & !seen) else {
            continue;
        };
        let eliminations = collect_peer_eliminations(grid, index, value);
        return Some(Move::place(Technique::FullHouse, index, value, eliminations));
    }
    None
}

/// Searches for a cell with exactly one candidate.
pub fn find_naked_single(grid: &Grid) -> Option<Move> {
    for i in 0..81 {
        if grid.value(i) == 0 && grid::count_candidates(grid.candidates(i)) == 1 {
            let value = (grid.candidates(i).trailing_zeros() + 1) as u8;
            let eliminations = collect_peer_eliminations(grid, i, value);
            return Some(Move::place(Technique::NakedSingle, i, value, eliminations));
        }
    }
    None
}

/// Searches for a digit whose candidate appears in exactly one cell of a
/// unit.
pub fn find_hidden_single(grid: &Grid) -> Option<Move> {
    for unit in ALL_UNITS.iter() {
        if let Some(mv) = find_hidden_single_in_unit(grid, unit) {
            return Some(mv);
        }
    }
    None
}

fn find_hidden_single_in_unit(grid: &Grid, unit: &[usize]) -> Option<Move> {
    for value in 1..=9 {
        if let Some(index) = find_unique_position_in_unit(grid, unit, value) {
            let mask = 1u16 << (value - 1);
            let mut eliminations = collect_peer_eliminations(grid, index, value);

            // Internal eliminations: the target cell loses its other
            // candidates.
            let other = grid.candidates(index) & !mask;
            if other != 0 {
                eliminations.push(Elimination {
                    index,
                    values: grid::candidate_list(other),
                });
            }

            return Some(Move::place(Technique::HiddenSingle, index, value, eliminations));
        }
    }
    None
}

/// Helper to collect peer eliminations for the placement-class techniques.
#[inline]
fn collect_peer_eliminations(grid: &Grid, index: usize, value: u8) -> Vec<Elimination> {
    PEER_MAP[index]
        .iter()
        .filter(|&&peer| {
            grid.value(peer) == 0 && (grid.candidates(peer) & (1 << (value - 1))) != 0
        })
        .map(|&peer| Elimination {
            index: peer,
            values: vec![value],
        })
        .collect()
}

/// Helper to find the single index in a unit where `value` is a candidate.
#[inline]
fn find_unique_position_in_unit(grid: &Grid, unit: &[usize], value: u8) -> Option<usize> {
    let mask = 1u16 << (value - 1);
    let mut count = 0;
    let mut target = 0;

    for &idx in unit {
        if grid.value(idx) == 0 && (grid.candidates(idx) & mask) != 0 {
            count += 1;
            target = idx;
            if count > 1 {
                return None; // Exit early if not unique.
            }
        }
    }

    if count == 1 { Some(target) } else { None }
}
