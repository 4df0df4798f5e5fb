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

//! Single-digit chain patterns: Skyscraper, Two-String Kite, Turbot Fish.
//!
//! All three work on strong links — a digit with exactly two candidate
//! positions in a unit — and eliminate the digit from cells that see both
//! free ends of a two-link chain.

use super::digit_line_masks;
use crate::grid::{ALL_UNITS, Grid, PEER_MAP};
use crate::types::{Elimination, Move, Technique};

// --- Skyscraper ---

pub fn find_skyscraper(grid: &Grid) -> Option<Move> {
    let (row_masks, col_masks) = digit_line_masks(grid);

    for num in 1..=9 {
        if let Some(mv) = check_skyscraper(grid, num, &row_masks[num], true) {
            return Some(mv);
        }
        if let Some(mv) = check_skyscraper(grid, num, &col_masks[num], false) {
            return Some(mv);
        }
    }
    None
}

#[inline]
fn check_skyscraper(
    grid: &Grid,
    num: usize,
    masks: &[u16; 9],
    is_row_base: bool,
) -> Option<Move> {
    // Lines where the digit has exactly two possible positions.
    let valid_indices: Vec<usize> = masks
        .iter()
        .enumerate()
        .filter(|&(_, m)| m.count_ones() == 2)
        .map(|(i, _)| i)
        .collect();

    if valid_indices.len() < 2 {
        return None;
    }

    for i in 0..valid_indices.len() {
        for j in (i + 1)..valid_indices.len() {
            if let Some(mv) = check_skyscraper_pair(
                grid,
                num,
                masks,
                is_row_base,
                valid_indices[i],
                valid_indices[j],
            ) {
                return Some(mv);
            }
        }
    }
    None
}

fn check_skyscraper_pair(
    grid: &Grid,
    num: usize,
    masks: &[u16; 9],
    is_row_base: bool,
    line1: usize,
    line2: usize,
) -> Option<Move> {
    let m1 = masks[line1];
    let m2 = masks[line2];

    // The two lines must share exactly one orthogonal position (the base).
    let common = m1 & m2;
    if common.count_ones() != 1 {
        return None;
    }

    // The roof cells are the non-shared ends.
    let c1 = (m1 & !common).trailing_zeros() as usize;
    let c2 = (m2 & !common).trailing_zeros() as usize;

    let roof1 = if is_row_base { line1 * 9 + c1 } else { c1 * 9 + line1 };
    let roof2 = if is_row_base { line2 * 9 + c2 } else { c2 * 9 + line2 };

    let eliminations = eliminations_seeing_both(grid, num as u8, roof1, roof2, &[]);
    if eliminations.is_empty() {
        None
    } else {
        Some(Move::eliminate(Technique::Skyscraper, eliminations))
    }
}

// --- Two-String Kite ---

pub fn find_two_string_kite(grid: &Grid) -> Option<Move> {
    let (row_masks, col_masks) = digit_line_masks(grid);

    for num in 1..=9 {
        if let Some(mv) = check_two_string_kite_for_num(grid, num, &row_masks, &col_masks) {
            return Some(mv);
        }
    }
    None
}

fn check_two_string_kite_for_num(
    grid: &Grid,
    num: usize,
    row_masks: &[[u16; 9]; 10],
    col_masks: &[[u16; 9]; 10],
) -> Option<Move> {
    let rows_2: Vec<usize> = row_masks[num]
        .iter()
        .enumerate()
        .filter(|&(_, m)| m.count_ones() == 2)
        .map(|(i, _)| i)
        .collect();
    let cols_2: Vec<usize> = col_masks[num]
        .iter()
        .enumerate()
        .filter(|&(_, m)| m.count_ones() == 2)
        .map(|(i, _)| i)
        .collect();

    for &r in &rows_2 {
        for &c in &cols_2 {
            if let Some(mv) =
                check_kite_intersection(grid, num, r, c, row_masks[num][r], col_masks[num][c])
            {
                return Some(mv);
            }
        }
    }
    None
}

fn check_kite_intersection(
    grid: &Grid,
    num: usize,
    r: usize,
    c: usize,
    r_mask: u16,
    c_mask: u16,
) -> Option<Move> {
    let r_cols: Vec<usize> = (0..9).filter(|&x| (r_mask >> x) & 1 == 1).collect();
    let c_rows: Vec<usize> = (0..9).filter(|&x| (c_mask >> x) & 1 == 1).collect();

    let row_cells = [r * 9 + r_cols[0], r * 9 + r_cols[1]];
    let col_cells = [c_rows[0] * 9 + c, c_rows[1] * 9 + c];

    // One row cell and one column cell must sit in the same block; the
    // remaining two cells are the kite's free ends.
    for &rc in &row_cells {
        for &cc in &col_cells {
            if rc == cc || block_of(rc) != block_of(cc) {
                continue;
            }
            let other_rc = if rc == row_cells[0] { row_cells[1] } else { row_cells[0] };
            let other_cc = if cc == col_cells[0] { col_cells[1] } else { col_cells[0] };

            let eliminations =
                eliminations_seeing_both(grid, num as u8, other_rc, other_cc, &[]);
            if !eliminations.is_empty() {
                return Some(Move::eliminate(Technique::TwoStringKite, eliminations));
            }
        }
    }
    None
}

// --- Turbot Fish ---

/// A strong link for one digit: the only two cells of a unit that can
/// hold it.
#[derive(Clone, Copy)]
struct StrongLink {
    a: usize,
    b: usize,
}

/// Searches for any two strong links (row, column or block based) joined
/// by a weak link between one end of each: cells seeing both free ends
/// lose the digit. The generic form of the skyscraper/kite family.
pub fn find_turbot_fish(grid: &Grid) -> Option<Move> {
    for num in 1..=9u8 {
        let links = collect_strong_links(grid, num);
        for i in 0..links.len() {
            for j in (i + 1)..links.len() {
                if let Some(mv) = check_turbot_pair(grid, num, links[i], links[j]) {
                    return Some(mv);
                }
            }
        }
    }
    None
}

fn collect_strong_links(grid: &Grid, num: u8) -> Vec<StrongLink> {
    let mask = 1u16 << (num - 1);
    let mut links = Vec::new();
    for unit in ALL_UNITS.iter() {
        let mut cells = [0usize; 2];
        let mut count = 0;
        for &idx in unit.iter() {
            if grid.value(idx) == 0 && (grid.candidates(idx) & mask) != 0 {
                if count < 2 {
                    cells[count] = idx;
                }
                count += 1;
                if count > 2 {
                    break;
                }
            }
        }
        if count == 2 {
            links.push(StrongLink {
                a: cells[0],
                b: cells[1],
            });
        }
    }
    links
}

fn check_turbot_pair(grid: &Grid, num: u8, l1: StrongLink, l2: StrongLink) -> Option<Move> {
    // The same cell pair can appear as a row link and a block link; such
    // duplicates chain to nothing.
    if (l1.a == l2.a && l1.b == l2.b) || (l1.a == l2.b && l1.b == l2.a) {
        return None;
    }

    // Try every pairing of one hinge end per link as the weak connection.
    for (hinge1, free1) in [(l1.a, l1.b), (l1.b, l1.a)] {
        for (hinge2, free2) in [(l2.a, l2.b), (l2.b, l2.a)] {
            if hinge1 == hinge2
                || free1 == free2
                || free1 == hinge2
                || free2 == hinge1
                || !PEER_MAP[hinge1].contains(&hinge2)
            {
                continue;
            }

            // If both free ends were false, both hinges would hold the
            // digit while seeing each other. One free end is true, so
            // anything seeing both can drop it. The hinges themselves are
            // not elimination targets.
            let eliminations =
                eliminations_seeing_both(grid, num, free1, free2, &[hinge1, hinge2]);
            if !eliminations.is_empty() {
                return Some(Move::eliminate(Technique::TurbotFish, eliminations));
            }
        }
    }
    None
}

/// Collects eliminations of `num` from every empty cell holding the
/// candidate that sees both `a` and `b`, skipping `exclude`.
fn eliminations_seeing_both(
    grid: &Grid,
    num: u8,
    a: usize,
    b: usize,
    exclude: &[usize],
) -> Vec<Elimination> {
    let cand_bit = 1u16 << (num - 1);
    let mut eliminations = Vec::new();
    for &target in PEER_MAP[a].iter() {
        if exclude.contains(&target) {
            continue;
        }
        if grid.value(target) == 0
            && (grid.candidates(target) & cand_bit) != 0
            && PEER_MAP[b].contains(&target)
        {
            eliminations.push(Elimination {
                index: target,
                values: vec![num],
            });
        }
    }
    eliminations
}

#[inline]
fn block_of(index: usize) -> usize {
    (index / 9 / 3) * 3 + (index % 9 / 3)
}
