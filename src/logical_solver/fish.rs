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

//! Basic fish patterns: X-Wing (size 2) and Swordfish (size 3).
//!
//! A fish is `size` base lines (rows or columns) in which a digit is
//! confined to at most `size` cover lines of the orthogonal orientation;
//! the digit is then eliminated from the cover lines outside the base set.

use super::digit_line_masks;
use crate::grid::Grid;
use crate::types::{Elimination, Move, Technique};

struct FishSearchContext<'a> {
    num: u8,
    valid_indices: &'a [usize],
    masks: &'a [u16; 9],
    size: usize,
    is_row_base: bool,
    technique: Technique,
}

pub fn find_x_wing(grid: &Grid) -> Option<Move> {
    find_fish(grid, 2, Technique::XWing)
}

pub fn find_swordfish(grid: &Grid) -> Option<Move> {
    find_fish(grid, 3, Technique::Swordfish)
}

fn find_fish(grid: &Grid, size: usize, technique: Technique) -> Option<Move> {
    // Calculate position masks once for every digit.
    let (row_masks, col_masks) = digit_line_masks(grid);

    for num in 1..=9 {
        if let Some(mv) = check_fish(grid, num, &row_masks[num], size, true, technique) {
            return Some(mv);
        }
        if let Some(mv) = check_fish(grid, num, &col_masks[num], size, false, technique) {
            return Some(mv);
        }
    }
    None
}

/// Generalized fish finder over one base orientation.
fn check_fish(
    grid: &Grid,
    num: usize,
    masks: &[u16; 9],
    size: usize,
    is_row_base: bool,
    technique: Technique,
) -> Option<Move> {
    // Filter base lines that hold 2..=size occurrences of the digit.
    let valid_indices: Vec<usize> = masks
        .iter()
        .enumerate()
        .filter(|&(_, m)| {
            let c = m.count_ones() as usize;
            c >= 2 && c <= size
        })
        .map(|(i, _)| i)
        .collect();

    if valid_indices.len() < size {
        return None;
    }

    let ctx = FishSearchContext {
        num: num as u8,
        valid_indices: &valid_indices,
        masks,
        size,
        is_row_base,
        technique,
    };

    find_fish_combo(grid, &ctx, 0, &mut Vec::with_capacity(size))
}

fn find_fish_combo(
    grid: &Grid,
    ctx: &FishSearchContext,
    start: usize,
    combo: &mut Vec<usize>,
) -> Option<Move> {
    if combo.len() == ctx.size {
        // A fish needs its base lines covered by at most `size` lines of
        // the orthogonal orientation.
        let mut union_mask = 0;
        for &idx in combo.iter() {
            union_mask |= ctx.masks[idx];
        }

        if union_mask.count_ones() as usize <= ctx.size {
            return construct_fish_move(
                grid,
                ctx.num,
                combo,
                union_mask,
                ctx.is_row_base,
                ctx.technique,
            );
        }
        return None;
    }

    for i in start..ctx.valid_indices.len() {
        combo.push(ctx.valid_indices[i]);
        if let Some(mv) = find_fish_combo(grid, ctx, i + 1, combo) {
            return Some(mv);
        }
        combo.pop();
    }
    None
}

/// Builds the move if the pattern eliminates anything.
fn construct_fish_move(
    grid: &Grid,
    num: u8,
    base_indices: &[usize],
    union_mask: u16,
    is_row_base: bool,
    technique: Technique,
) -> Option<Move> {
    let cand_bit = 1u16 << (num - 1);
    let cover_indices: Vec<usize> = (0..9).filter(|&x| (union_mask & (1 << x)) != 0).collect();

    let mut eliminations = Vec::new();
    for &cover_idx in &cover_indices {
        for orthogonal_idx in 0..9 {
            // Skip cells on the base lines themselves.
            if base_indices.contains(&orthogonal_idx) {
                continue;
            }

            let cell_idx = if is_row_base {
                orthogonal_idx * 9 + cover_idx // walk rows within this column
            } else {
                cover_idx * 9 + orthogonal_idx // walk columns within this row
            };

            if grid.value(cell_idx) == 0 && (grid.candidates(cell_idx) & cand_bit) != 0 {
                eliminations.push(Elimination {
                    index: cell_idx,
                    values: vec![num],
                });
            }
        }
    }

    if eliminations.is_empty() {
        None
    } else {
        Some(Move::eliminate(technique, eliminations))
    }
}
