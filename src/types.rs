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

//! Data types shared across the engine: the technique catalog's closed
//! enum, moves and their export shape, difficulty levels, and the puzzle
//! data produced by generation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named deduction technique.
///
/// The catalog is closed: techniques are dispatched through fixed ordered
/// lists, never registered dynamically. Variant order follows catalog
/// priority, so the derived `Ord` sorts traces the way the dispatcher
/// consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Technique {
    FullHouse,
    NakedSingle,
    HiddenSingle,
    PointingCandidates,
    ClaimingCandidates,
    NakedPair,
    NakedTriple,
    NakedQuad,
    HiddenPair,
    HiddenTriple,
    HiddenQuad,
    XWing,
    Swordfish,
    Skyscraper,
    TwoStringKite,
    TurbotFish,
}

/// Coarse per-technique category used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TechniqueCategory {
    Easy,
    Medium,
    Hard,
}

impl Technique {
    /// Fixed base score. The difficulty score of a solve is the sum of
    /// base scores over every applied move.
    pub fn base_score(self) -> u32 {
        match self {
            Technique::FullHouse => 4,
            Technique::NakedSingle => 4,
            Technique::HiddenSingle => 14,
            Technique::PointingCandidates => 50,
            Technique::ClaimingCandidates => 50,
            Technique::NakedPair => 60,
            Technique::NakedTriple => 80,
            Technique::NakedQuad => 120,
            Technique::HiddenPair => 70,
            Technique::HiddenTriple => 100,
            Technique::HiddenQuad => 150,
            Technique::XWing => 140,
            Technique::Swordfish => 150,
            Technique::Skyscraper => 130,
            Technique::TwoStringKite => 150,
            Technique::TurbotFish => 120,
        }
    }

    /// Coarse category of the technique.
    pub fn category(self) -> TechniqueCategory {
        match self {
            Technique::FullHouse | Technique::NakedSingle | Technique::HiddenSingle => {
                TechniqueCategory::Easy
            }
            Technique::PointingCandidates
            | Technique::ClaimingCandidates
            | Technique::NakedPair
            | Technique::NakedTriple
            | Technique::HiddenPair
            | Technique::HiddenTriple => TechniqueCategory::Medium,
            Technique::NakedQuad
            | Technique::HiddenQuad
            | Technique::XWing
            | Technique::Swordfish
            | Technique::Skyscraper
            | Technique::TwoStringKite
            | Technique::TurbotFish => TechniqueCategory::Hard,
        }
    }

    /// Whether the technique places a value, as opposed to only removing
    /// candidates.
    pub fn places_value(self) -> bool {
        matches!(
            self,
            Technique::FullHouse | Technique::NakedSingle | Technique::HiddenSingle
        )
    }

    /// The enum name as a static string, for step logs.
    pub fn name(self) -> &'static str {
        match self {
            Technique::FullHouse => "FullHouse",
            Technique::NakedSingle => "NakedSingle",
            Technique::HiddenSingle => "HiddenSingle",
            Technique::PointingCandidates => "PointingCandidates",
            Technique::ClaimingCandidates => "ClaimingCandidates",
            Technique::NakedPair => "NakedPair",
            Technique::NakedTriple => "NakedTriple",
            Technique::NakedQuad => "NakedQuad",
            Technique::HiddenPair => "HiddenPair",
            Technique::HiddenTriple => "HiddenTriple",
            Technique::HiddenQuad => "HiddenQuad",
            Technique::XWing => "XWing",
            Technique::Swordfish => "Swordfish",
            Technique::Skyscraper => "Skyscraper",
            Technique::TwoStringKite => "TwoStringKite",
            Technique::TurbotFish => "TurbotFish",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value placement within a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub index: usize,
    pub value: u8,
}

/// Candidate digits removed from one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    pub index: usize,
    pub values: Vec<u8>,
}

/// One deduction: the technique that produced it, an optional placement,
/// and the candidate eliminations applied together with it as a single
/// atomic step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub technique: Technique,
    pub placement: Option<Placement>,
    pub eliminations: Vec<Elimination>,
}

impl Move {
    /// A placement-class move.
    pub(crate) fn place(
        technique: Technique,
        index: usize,
        value: u8,
        eliminations: Vec<Elimination>,
    ) -> Self {
        Move {
            technique,
            placement: Some(Placement { index, value }),
            eliminations,
        }
    }

    /// An elimination-only move.
    pub(crate) fn eliminate(technique: Technique, eliminations: Vec<Elimination>) -> Self {
        Move {
            technique,
            placement: None,
            eliminations,
        }
    }

    /// The export shape for consumers such as a UI step log.
    pub fn export(&self) -> MoveRecord {
        MoveRecord {
            technique: self.technique.name(),
            cell: self.placement.map(|p| p.index),
            value: self.placement.map(|p| p.value),
            eliminations: self.eliminations.clone(),
            description: Some(self.to_string()),
        }
    }
}

fn cell_name(index: usize) -> String {
    format!("r{}c{}", index / 9 + 1, index % 9 + 1)
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.technique)?;
        if let Some(p) = self.placement {
            write!(f, " place {} at {}", p.value, cell_name(p.index))?;
        }
        if !self.eliminations.is_empty() {
            let parts: Vec<String> = self
                .eliminations
                .iter()
                .map(|e| {
                    let digits: Vec<String> =
                        e.values.iter().map(|v| v.to_string()).collect();
                    format!("{} from {}", digits.join("/"), cell_name(e.index))
                })
                .collect();
            if self.placement.is_some() {
                write!(f, ",")?;
            }
            write!(f, " eliminate {}", parts.join(", "))?;
        }
        Ok(())
    }
}

/// Serializable step-log record:
/// `{technique, cell?, value?, eliminations?, description?}`.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub technique: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub eliminations: Vec<Elimination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Ordered difficulty grades.
///
/// `Incomplete` marks a logical solve that stalled before filling the
/// grid; the remaining grades are cumulative score bands: a score
/// qualifies for the highest band whose threshold it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Incomplete,
    Easy,
    Medium,
    Hard,
    Unfair,
    Extreme,
}

impl DifficultyLevel {
    /// Minimum total score for this band; `None` for `Incomplete`, which
    /// is not score-based.
    pub fn threshold(self) -> Option<u32> {
        match self {
            DifficultyLevel::Incomplete => None,
            DifficultyLevel::Easy => Some(0),
            DifficultyLevel::Medium => Some(800),
            DifficultyLevel::Hard => Some(1000),
            DifficultyLevel::Unfair => Some(1600),
            DifficultyLevel::Extreme => Some(1800),
        }
    }

    /// Exclusive upper bound of this band's score range; `None` for the
    /// open-ended top band and for `Incomplete`.
    pub fn band_ceiling(self) -> Option<u32> {
        match self {
            DifficultyLevel::Easy => Some(800),
            DifficultyLevel::Medium => Some(1000),
            DifficultyLevel::Hard => Some(1600),
            DifficultyLevel::Unfair => Some(1800),
            DifficultyLevel::Incomplete | DifficultyLevel::Extreme => None,
        }
    }

    /// The highest band whose threshold does not exceed `score`.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=799 => DifficultyLevel::Easy,
            800..=999 => DifficultyLevel::Medium,
            1000..=1599 => DifficultyLevel::Hard,
            1600..=1799 => DifficultyLevel::Unfair,
            _ => DifficultyLevel::Extreme,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DifficultyLevel::Incomplete => "Incomplete",
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
            DifficultyLevel::Unfair => "Unfair",
            DifficultyLevel::Extreme => "Extreme",
        };
        f.write_str(name)
    }
}

/// A generated puzzle with its solution and grading metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: String,
    pub solution: String,
    pub difficulty: DifficultyLevel,
    pub score: u32,
    pub clues: usize,
    pub techniques: Vec<Technique>,
}

/// One stored puzzle in a puzzle-set file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleEntry {
    pub grid: String,
    pub solution: String,
}

/// The puzzle-set JSON shape consumed and produced by surrounding tooling.
/// The engine itself only reads and writes the 81-character strings inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSet {
    pub difficulty: String,
    pub puzzles: Vec<PuzzleEntry>,
}
