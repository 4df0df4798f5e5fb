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

//! Backtracking search: capped solution counting, unique-solution
//! reconstruction, and randomized grid filling.
//!
//! All three searches share the same skeleton: an explicit worklist of
//! grid clones (no native recursion, so stack depth stays flat), naked
//! single propagation before branching, and minimum-remaining-candidates
//! branch selection with one clone per candidate value. A branch that
//! reaches a contradiction is simply dropped; nothing outside the loop
//! ever sees those errors.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::SudokuError;
use crate::grid::{self, Grid};

/// Result of [`solve_brute_force`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceResult {
    /// True when the grid has exactly one solution.
    pub solved: bool,
    /// Number of solutions found, capped at 2.
    pub solution_count: usize,
    /// The solved grid as an 81-character string, when unique.
    pub solution: Option<String>,
}

/// Fills every cell with exactly one candidate, repeatedly, until no such
/// cell remains. Fails on the contradiction that empties a mask or
/// collides a placement; callers treat that as a dead branch.
fn propagate_singles(grid: &mut Grid) -> Result<(), SudokuError> {
    loop {
        let mut progressed = false;
        for i in 0..81 {
            if grid.value(i) != 0 {
                continue;
            }
            let mask = grid.candidates(i);
            if mask == 0 {
                return Err(SudokuError::NoCandidatesRemaining(i));
            }
            if let Some(value) = grid::single_candidate(mask) {
                grid.set_cell(i, value, false)?;
                progressed = true;
            }
        }
        if !progressed {
            return Ok(());
        }
    }
}

/// Counts solutions up to `max_count`.
///
/// The count is anytime and capped: recursion is pruned globally once the
/// counter reaches the cap, so remaining branches are skipped rather than
/// explored. The result is deterministic across repeated calls on an
/// unmodified grid.
pub fn count_solutions(grid: &Grid, max_count: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    let mut worklist = vec![*grid];
    let mut count = 0;

    while let Some(mut current) = worklist.pop() {
        if propagate_singles(&mut current).is_err() {
            continue;
        }
        let Some(cell) = current.find_min_candidates_cell() else {
            count += 1;
            if count >= max_count {
                break;
            }
            continue;
        };
        for value in grid::candidate_list(current.candidates(cell)) {
            let mut branch = current;
            if branch.set_cell(cell, value, false).is_ok() {
                worklist.push(branch);
            }
        }
    }
    log::trace!("count_solutions: {count} (cap {max_count})");
    count
}

/// True when the grid has exactly one solution. A cap of 2 is sufficient
/// and much cheaper than counting the true total.
pub fn has_unique_solution(grid: &Grid) -> bool {
    count_solutions(grid, 2) == 1
}

/// Counts solutions (capped at 2) and reconstructs the solution when
/// there is exactly one.
///
/// Fails with `Solve` if the grid does not pass its validity gate, or —
/// defensively — if the claimed-unique solution cannot be reconstructed.
pub fn solve_brute_force(grid: &Grid) -> Result<BruteForceResult, SudokuError> {
    if !grid.is_valid() {
        return Err(SudokuError::Solve(
            "grid fails its validity preconditions".into(),
        ));
    }

    let solution_count = count_solutions(grid, 2);
    if solution_count != 1 {
        return Ok(BruteForceResult {
            solved: false,
            solution_count,
            solution: None,
        });
    }

    let solved = find_first_solution(grid).ok_or_else(|| {
        SudokuError::Solve("failed to reconstruct the unique solution".into())
    })?;
    Ok(BruteForceResult {
        solved: true,
        solution_count: 1,
        solution: Some(solved.to_string()),
    })
}

/// Finds the first complete assignment, branching in ascending candidate
/// order.
fn find_first_solution(grid: &Grid) -> Option<Grid> {
    let mut worklist = vec![*grid];

    while let Some(mut current) = worklist.pop() {
        if propagate_singles(&mut current).is_err() {
            continue;
        }
        let Some(cell) = current.find_min_candidates_cell() else {
            return Some(current);
        };
        // Push in reverse so the lowest candidate is explored first.
        for value in grid::candidate_list(current.candidates(cell)).into_iter().rev() {
            let mut branch = current;
            if branch.set_cell(cell, value, false).is_ok() {
                worklist.push(branch);
            }
        }
    }
    None
}

/// Fills `grid` in place to a complete assignment, branching on shuffled
/// digit order — the search engine in "fill" mode. Returns false when the
/// grid admits no solution.
pub fn fill_randomized<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    let mut worklist = vec![*grid];

    while let Some(mut current) = worklist.pop() {
        if propagate_singles(&mut current).is_err() {
            continue;
        }
        let Some(cell) = current.find_min_candidates_cell() else {
            *grid = current;
            return true;
        };
        let mut values = grid::candidate_list(current.candidates(cell));
        values.shuffle(rng);
        for value in values {
            let mut branch = current;
            if branch.set_cell(cell, value, false).is_ok() {
                worklist.push(branch);
            }
        }
    }
    false
}
