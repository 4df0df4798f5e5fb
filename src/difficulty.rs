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

//! Maps a technique-usage trace to a numeric score and an ordered
//! difficulty level.
//!
//! Every technique carries a fixed base score; the total score of a solve
//! is the sum over every applied move. Levels are cumulative score bands
//! (a score of 1700 grades `Unfair`), with `Incomplete` reserved for
//! logical solves that stall before filling the grid.

use std::collections::BTreeMap;

use crate::logical_solver::LogicalResult;
use crate::types::{DifficultyLevel, Move, Technique};

/// Grading of a logical solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grading {
    pub level: DifficultyLevel,
    pub score: u32,
    /// How often each technique was applied.
    pub counts: BTreeMap<Technique, usize>,
}

impl Grading {
    /// Distinct techniques used, in catalog order.
    pub fn techniques(&self) -> Vec<Technique> {
        self.counts.keys().copied().collect()
    }
}

/// Total score of a move trace.
pub fn score(moves: &[Move]) -> u32 {
    moves.iter().map(|m| m.technique.base_score()).sum()
}

/// Per-technique usage counts of a move trace.
pub fn technique_counts(moves: &[Move]) -> BTreeMap<Technique, usize> {
    let mut counts = BTreeMap::new();
    for mv in moves {
        *counts.entry(mv.technique).or_insert(0) += 1;
    }
    counts
}

/// Grades a finished logical solve. A solve that stalled before filling
/// the grid grades `Incomplete` regardless of its score.
pub fn grade(result: &LogicalResult) -> Grading {
    let score = score(&result.moves);
    let level = if result.solved {
        DifficultyLevel::from_score(score)
    } else {
        DifficultyLevel::Incomplete
    };
    Grading {
        level,
        score,
        counts: technique_counts(&result.moves),
    }
}
