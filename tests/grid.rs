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

use bitdoku::SudokuError;
use bitdoku::grid::{self, Grid};

const SCENARIO_A: &str =
    ".5..83.17...1..4..3.4..56.8....3...9.9.8245....6....7...9....5...729..861.36.72.4";

#[test]
fn test_parse_display_round_trip() {
    let grid: Grid = SCENARIO_A.parse().unwrap();
    assert_eq!(grid.to_string(), SCENARIO_A);
}

#[test]
fn test_parse_normalizes_zero_to_dot() {
    let with_zeros = SCENARIO_A.replace('.', "0");
    let grid: Grid = with_zeros.parse().unwrap();
    assert_eq!(grid.to_string(), SCENARIO_A);
}

#[test]
fn test_parse_rejects_wrong_length() {
    let err = "123".parse::<Grid>().unwrap_err();
    assert!(matches!(err, SudokuError::InvalidPuzzle(_)));

    let too_long = format!("{SCENARIO_A}5");
    assert!(matches!(
        too_long.parse::<Grid>(),
        Err(SudokuError::InvalidPuzzle(_))
    ));
}

#[test]
fn test_parse_rejects_bad_characters() {
    let mut chars: Vec<char> = SCENARIO_A.chars().collect();
    chars[40] = 'x';
    let bad: String = chars.into_iter().collect();
    assert!(matches!(
        bad.parse::<Grid>(),
        Err(SudokuError::InvalidPuzzle(_))
    ));
}

#[test]
fn test_parse_marks_givens() {
    let grid: Grid = SCENARIO_A.parse().unwrap();
    assert_eq!(grid.clue_count(), 34);
    assert!(!grid.is_given(0));
    assert!(grid.is_given(1)); // the '5'
}

#[test]
fn test_parse_initializes_candidates() {
    let grid: Grid = SCENARIO_A.parse().unwrap();
    // A placed cell keeps the single bit of its value.
    assert_eq!(grid.value(1), 5);
    assert_eq!(grid.candidates(1), 1 << 4);
    // Cell 0 sees the 5 at cell 1, so 5 is not a candidate there.
    assert_eq!(grid.candidates(0) & (1 << 4), 0);
    assert_ne!(grid.candidates(0), 0);
}

#[test]
fn test_from_values_rejects_out_of_range() {
    let mut values = [0u8; 81];
    values[3] = 12;
    assert_eq!(
        Grid::from_values(values),
        Err(SudokuError::InvalidCellValue(12))
    );
}

#[test]
fn test_set_cell_validates_arguments() {
    let mut grid = Grid::empty();
    assert_eq!(
        grid.set_cell(81, 1, false),
        Err(SudokuError::InvalidCellIndex(81))
    );
    assert_eq!(
        grid.set_cell(0, 10, false),
        Err(SudokuError::InvalidCellValue(10))
    );
}

#[test]
fn test_set_cell_clears_value_from_peers() {
    let mut grid: Grid = SCENARIO_A.parse().unwrap();
    grid.set_cell(2, 2, false).unwrap();
    assert_eq!(grid.value(2), 2);
    assert_eq!(grid.candidates(2), 1 << 1);
    for r in 0..9 {
        if r * 9 + 2 != 2 {
            assert_ne!(grid.value(r * 9 + 2), 2, "column peer still holds 2");
            assert_eq!(grid.candidates(r * 9 + 2) & (1 << 1), 0);
        }
    }
    for c in 0..9 {
        if c != 2 {
            assert_ne!(grid.value(c), 2, "row peer still holds 2");
        }
    }
}

#[test]
fn test_set_cell_conflict_leaves_grid_untouched() {
    let mut grid: Grid = SCENARIO_A.parse().unwrap();
    let before = grid;
    // Cell 0 shares its row with the 5 at cell 1.
    assert_eq!(
        grid.set_cell(0, 5, false),
        Err(SudokuError::CellConflict { index: 0, value: 5 })
    );
    assert_eq!(grid, before);
}

#[test]
fn test_set_cell_zero_clears_and_restores_candidates() {
    let mut grid: Grid = SCENARIO_A.parse().unwrap();
    grid.set_cell(1, 0, false).unwrap();
    assert_eq!(grid.value(1), 0);
    assert!(!grid.is_given(1));
    // With the 5 gone, cell 0 may hold 5 again.
    assert_ne!(grid.candidates(0) & (1 << 4), 0);
}

#[test]
fn test_remove_candidate_is_noop_on_placed_cell() {
    let mut grid: Grid = SCENARIO_A.parse().unwrap();
    let before = grid.candidates(1);
    grid.remove_candidate(1, 5).unwrap();
    assert_eq!(grid.candidates(1), before);
    assert_eq!(grid.value(1), 5);
}

#[test]
fn test_remove_candidate_signals_contradiction() {
    let mut grid: Grid = SCENARIO_A.parse().unwrap();
    // Cell 2 has the single candidate 2; removing it empties the mask.
    assert_eq!(grid.candidates(2), 1 << 1);
    assert_eq!(
        grid.remove_candidate(2, 2),
        Err(SudokuError::NoCandidatesRemaining(2))
    );
}

#[test]
fn test_remove_candidate_validates_arguments() {
    let mut grid = Grid::empty();
    assert_eq!(
        grid.remove_candidate(99, 1),
        Err(SudokuError::InvalidCellIndex(99))
    );
    assert_eq!(
        grid.remove_candidate(0, 0),
        Err(SudokuError::InvalidCellValue(0))
    );
}

#[test]
fn test_is_valid_detects_peer_duplicates() {
    // Two 5s in the first row parse fine but fail validation.
    let conflicting = format!("55{}", ".".repeat(79));
    let grid: Grid = conflicting.parse().unwrap();
    assert!(!grid.is_valid());
}

#[test]
fn test_is_valid_accepts_parsed_puzzles() {
    let grid: Grid = SCENARIO_A.parse().unwrap();
    assert!(grid.is_valid());
    assert!(Grid::empty().is_valid());
}

#[test]
fn test_candidate_helpers() {
    assert_eq!(grid::count_candidates(0b111111111), 9);
    assert_eq!(grid::count_candidates(0), 0);
    for mask in [0b1u16, 0b101, 0b111111111, 0b100100100] {
        assert_eq!(grid::count_candidates(mask), mask.count_ones());
    }

    assert_eq!(grid::single_candidate(1 << 4), Some(5));
    assert_eq!(grid::single_candidate(0), None);
    assert_eq!(grid::single_candidate(0b11), None);

    assert_eq!(grid::candidate_list(0b101000001), vec![1, 7, 9]);
    assert!(grid::candidate_list(0).is_empty());
}

#[test]
fn test_find_min_candidates_cell_prefers_fewest() {
    // Scenario A starts with a naked single at cell 2.
    let grid: Grid = SCENARIO_A.parse().unwrap();
    assert_eq!(grid.find_min_candidates_cell(), Some(2));
}

#[test]
fn test_find_min_candidates_cell_breaks_ties_low() {
    // All empty cells tie at nine candidates.
    assert_eq!(Grid::empty().find_min_candidates_cell(), Some(0));
}

#[test]
fn test_find_min_candidates_cell_on_complete_grid() {
    let solution =
        "652483917978162435314975628825736149791824563436519872269348751547291386183657294";
    let grid: Grid = solution.parse().unwrap();
    assert!(grid.is_complete());
    assert_eq!(grid.find_min_candidates_cell(), None);
}
