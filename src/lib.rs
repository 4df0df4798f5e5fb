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

//! A logical/combinatorial Sudoku engine.
//!
//! The crate combines a 9×9 constraint grid with bitmask candidate
//! tracking ([`grid`]), a catalog of human-style deduction techniques
//! consulted in fixed priority order ([`logical_solver`]), a backtracking
//! solver that counts and finds solutions ([`solver`]), a difficulty
//! grader built on technique usage ([`difficulty`]), and a puzzle
//! generator ([`generate`]).
//!
//! Everything is single-threaded and synchronous. The one ownership rule
//! that matters is exclusive ownership per search branch: `Grid` is
//! `Copy`, and every speculative step clones before mutating, so a dead
//! branch can simply be dropped.
//!
//! ```
//! use bitdoku::{Grid, solver};
//!
//! let puzzle: Grid =
//!     ".5..83.17...1..4..3.4..56.8....3...9.9.8245....6....7...9....5...729..861.36.72.4"
//!         .parse()?;
//! let result = solver::solve_brute_force(&puzzle)?;
//! assert!(result.solved);
//! # Ok::<(), bitdoku::SudokuError>(())
//! ```

pub mod difficulty;
pub mod error;
pub mod generate;
pub mod grid;
pub mod logical_solver;
pub mod solver;
pub mod types;

pub use error::SudokuError;
pub use grid::Grid;
pub use types::{
    DifficultyLevel, Elimination, Move, Placement, Puzzle, PuzzleEntry, PuzzleSet, Technique,
};
