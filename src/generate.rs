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

//! Puzzle generation: a randomized complete grid, dug down under
//! uniqueness and difficulty-band constraints.
//!
//! Each attempt fills a full grid, then visits the cells in shuffled
//! order, clearing a clue only while the puzzle keeps a unique solution
//! and its logical-solve score stays inside the target band. The attempt
//! is accepted when the dug puzzle grades exactly at the target level.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::difficulty;
use crate::error::SudokuError;
use crate::grid::Grid;
use crate::logical_solver::{self, Catalog};
use crate::solver;
use crate::types::{DifficultyLevel, Puzzle};

/// Budgets for the generation loop.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Clue removals accepted in a single dig pass.
    pub max_removals: usize,
    /// Fill-and-dig attempts before giving up.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_removals: 64,
            max_attempts: 200,
        }
    }
}

/// A seedable puzzle generator. The same seed and target always produce
/// the same puzzle.
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        Generator::with_config(seed, GeneratorConfig::default())
    }

    pub fn with_config(seed: Option<u64>, config: GeneratorConfig) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => rand::make_rng(),
        };
        Generator { rng, config }
    }

    /// Generates a puzzle grading exactly at `target`.
    ///
    /// Targeting `DifficultyLevel::Incomplete` asks for a puzzle that
    /// pure logic cannot finish (one that forces backtracking). Fails
    /// with `GenerationExhausted` when the attempt budget runs out.
    pub fn generate(&mut self, target: DifficultyLevel) -> Result<Puzzle, SudokuError> {
        for attempt in 1..=self.config.max_attempts {
            let solution = self.full_solution()?;
            let puzzle = self.dig(&solution, target)?;

            let result = logical_solver::solve_logically_with(&puzzle, Catalog::Extended)?;
            let grading = difficulty::grade(&result);
            log::debug!(
                "attempt {attempt}: {} clues, score {}, level {}",
                puzzle.clue_count(),
                grading.score,
                grading.level
            );

            if grading.level == target {
                return Ok(Puzzle {
                    grid: puzzle.to_string(),
                    solution: solution.to_string(),
                    difficulty: grading.level,
                    score: grading.score,
                    clues: puzzle.clue_count(),
                    techniques: grading.techniques(),
                });
            }
        }
        Err(SudokuError::GenerationExhausted)
    }

    /// A complete, randomly filled grid.
    fn full_solution(&mut self) -> Result<Grid, SudokuError> {
        let mut grid = Grid::empty();
        if !solver::fill_randomized(&mut grid, &mut self.rng) {
            // An empty grid always admits a solution.
            return Err(SudokuError::Solve("failed to fill an empty grid".into()));
        }
        Ok(grid)
    }

    /// Removes clues from a copy of `solution` in shuffled order.
    ///
    /// A removal survives only if the puzzle keeps a unique solution and,
    /// when the target band is bounded above, the puzzle stays logically
    /// solvable with a score below that bound. Digging monotonically
    /// raises difficulty, so scores below the band are left to later
    /// removals.
    fn dig(&mut self, solution: &Grid, target: DifficultyLevel) -> Result<Grid, SudokuError> {
        let band_ceiling = target.band_ceiling();
        let mut puzzle = *solution;
        let mut indices: Vec<usize> = (0..81).collect();
        indices.shuffle(&mut self.rng);

        let mut removed = 0;
        for &index in &indices {
            if removed >= self.config.max_removals {
                break;
            }
            let value = puzzle.value(index);
            if value == 0 {
                continue;
            }

            puzzle.set_cell(index, 0, false)?;
            if !solver::has_unique_solution(&puzzle) {
                puzzle.set_cell(index, value, false)?;
                continue;
            }
            if let Some(ceiling) = band_ceiling {
                let result = logical_solver::solve_logically_with(&puzzle, Catalog::Extended)?;
                if !result.solved || difficulty::score(&result.moves) >= ceiling {
                    puzzle.set_cell(index, value, false)?;
                    continue;
                }
            }
            removed += 1;
        }
        log::trace!("dig removed {removed} clues");

        // Re-parse so the surviving values are marked as givens.
        puzzle.to_string().parse()
    }
}
