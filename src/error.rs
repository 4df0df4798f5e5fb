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

//! The crate-wide error taxonomy.
//!
//! Argument-validation errors (`InvalidCellIndex`, `InvalidCellValue`) fail
//! fast at the boundary and are never caught internally. The contradiction
//! errors (`CellConflict`, `NoCandidatesRemaining`) are recoverable signals:
//! a speculative search branch that triggers one discards its grid clone and
//! moves on. `NoMoveFound` is the normal termination signal of the logical
//! solve loop. Anything else reaching a top-level caller is a genuine defect.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SudokuError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SudokuError {
    /// The input string is not a well-formed 81-character puzzle.
    #[error("invalid puzzle string: {0}")]
    InvalidPuzzle(String),

    /// A cell index outside `0..81` was passed to a grid operation.
    #[error("cell index {0} is out of range (expected 0..81)")]
    InvalidCellIndex(usize),

    /// A cell value outside `0..=9` was passed to a grid operation.
    #[error("cell value {0} is out of range (expected 0..=9)")]
    InvalidCellValue(u8),

    /// A placement would duplicate a value already held by a peer.
    #[error("value {value} is already placed in a peer of cell {index}")]
    CellConflict { index: usize, value: u8 },

    /// Candidate propagation emptied a cell's mask: a contradiction was
    /// reached. The grid that produced this is corrupted; speculative
    /// callers must have cloned beforehand and discard the clone.
    #[error("cell {0} has no candidates remaining")]
    NoCandidatesRemaining(usize),

    /// The grid failed its validity precondition, or applying a
    /// dispatcher-chosen move produced an internal inconsistency.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// No technique in the consulted catalog applies. Expected and
    /// recoverable: the logical solver loop terminates on it.
    #[error("no technique in the catalog applies")]
    NoMoveFound,

    /// Brute-force solver failure: the validity gate rejected the grid, or
    /// a claimed-unique solution could not be reconstructed.
    #[error("solve failed: {0}")]
    Solve(String),

    /// The generator exhausted its retry budget before reaching the
    /// requested difficulty.
    #[error("generation budget exhausted before reaching the target difficulty")]
    GenerationExhausted,
}
