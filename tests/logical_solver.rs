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

use bitdoku::grid::Grid;
use bitdoku::logical_solver::{
    self, Catalog, LogicalResult, apply_move, find_all_moves, find_next_move, find_next_move_in,
    solve_logically, solve_logically_with, subsets,
};
use bitdoku::{Move, SudokuError, Technique};

fn parse(s: &str) -> Grid {
    s.parse().unwrap()
}

fn solve(s: &str) -> LogicalResult {
    solve_logically(&parse(s)).unwrap()
}

fn solve_extended(s: &str) -> LogicalResult {
    solve_logically_with(&parse(s), Catalog::Extended).unwrap()
}

fn uses(result: &LogicalResult, technique: Technique) -> bool {
    result.moves.iter().any(|m| m.technique == technique)
}

fn eliminates(mv: &Move, index: usize, value: u8) -> bool {
    mv.eliminations
        .iter()
        .any(|e| e.index == index && e.values.contains(&value))
}

#[test]
fn test_naked_single_move_generation() {
    let puzzle =
        "...2..7...5..96832.8.7....641.....78.2..745..7.31854....2531..4.3164..5...9...61.";
    let result = solve(puzzle);

    let first = &result.moves[0];
    assert_eq!(first.technique, Technique::NakedSingle);
    let placement = first.placement.unwrap();
    assert_eq!(placement.index, 9);
    assert_eq!(placement.value, 1);
    assert!(
        eliminates(first, 0, 1),
        "expected elimination of 1 at index 0"
    );
}

#[test]
fn test_hidden_single_detection_in_unit() {
    let puzzle =
        ".38.917.571...38.9...78.3419738526148649175325213..9781..67..83386.29.57..7.38.96";
    let result = solve(puzzle);

    let first = &result.moves[0];
    assert_eq!(first.technique, Technique::HiddenSingle);
    let placement = first.placement.unwrap();
    assert_eq!(placement.index, 0);
    assert_eq!(placement.value, 4);

    // Internal eliminations: the target cell loses its other candidates.
    let internal = first
        .eliminations
        .iter()
        .find(|e| e.index == 0)
        .expect("expected internal eliminations at cell 0");
    assert_eq!(internal.values, vec![2, 6]);
}

#[test]
fn test_full_house_appears_on_easy_puzzle() {
    let puzzle =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    let result = solve(puzzle);

    assert!(result.solved);
    assert!(uses(&result, Technique::FullHouse));
    assert!(uses(&result, Technique::NakedSingle));
}

#[test]
fn test_naked_pair_detection() {
    let puzzle =
        ".....8..5..97...1..1.....687.51..........3..46......57.6...5.9..8........4.9.....";
    let result = solve(puzzle);

    let naked_pair = result
        .moves
        .iter()
        .find(|m| m.technique == Technique::NakedPair)
        .expect("expected a NakedPair step");
    assert!(naked_pair.placement.is_none());
    assert!(
        eliminates(naked_pair, 68, 4),
        "expected elimination of 4 at index 68"
    );
}

#[test]
fn test_pointing_candidates_detection() {
    let puzzle =
        ".....8..5..97...1..1.....687.51..........3..46......57.6...5.9..8........4.9.....";
    let result = solve(puzzle);

    let pointing = result
        .moves
        .iter()
        .find(|m| m.technique == Technique::PointingCandidates)
        .expect("expected a PointingCandidates step");
    assert!(
        eliminates(pointing, 13, 2),
        "expected elimination of 2 at index 13"
    );
}

#[test]
fn test_claiming_candidates_detection() {
    let puzzle =
        "7356814..681492.3.4..7356813.71..9.894..73.1.1....937.5.4318...8.392.15.21.5.78.3";
    let result = solve(puzzle);
    assert!(uses(&result, Technique::ClaimingCandidates));
    assert!(!result.solved, "core catalog should stall on this puzzle");
}

#[test]
fn test_hidden_pair_and_naked_triple_detection() {
    let puzzle =
        "538421769421769...769538....8.17.6.2..29........28.3..857312946...6.71...1.8...7.";
    let result = solve(puzzle);
    assert!(uses(&result, Technique::HiddenPair));
    assert!(uses(&result, Technique::NakedTriple));
}

#[test]
fn test_stalled_solve_is_not_an_error() {
    let puzzle =
        "538421769421769...769538....8.17.6.2..29........28.3..857312946...6.71...1.8...7.";
    let result = solve(puzzle);

    assert!(!result.solved);
    assert!(result.grid.is_valid());
    // The stuck grid reports NoMoveFound, not InvalidGrid.
    assert_eq!(
        find_next_move(&result.grid),
        Err(SudokuError::NoMoveFound)
    );
}

#[test]
fn test_x_wing_detection() {
    let puzzle =
        "3..6148726148723958723956......86......2.95....6.5...85..9..2...6..2..5.24756.1.9";

    // The core catalog cannot finish this puzzle.
    let core = solve(puzzle);
    assert!(!core.solved);

    let extended = solve_extended(puzzle);
    assert!(extended.solved);
    let x_wing = extended
        .moves
        .iter()
        .find(|m| m.technique == Technique::XWing)
        .expect("expected an XWing step");
    assert!(
        x_wing.eliminations.iter().all(|e| e.values == vec![3]),
        "this X-Wing works on candidate 3"
    );
}

#[test]
fn test_swordfish_detection() {
    let puzzle =
        "4..6...95.2..95478.954..6..........2.125.7.3.3..2......417.256.26795....53..64..7";
    let extended = solve_extended(puzzle);
    assert!(uses(&extended, Technique::Swordfish));
    assert!(extended.solved);
}

#[test]
fn test_skyscraper_and_kite_detection() {
    let puzzle =
        ".89.2....2..5.94.8...8..9.21629875..5..4.2.89948....2.79.2.83..32.6..89.8...9.2..";
    let extended = solve_extended(puzzle);
    assert!(uses(&extended, Technique::Skyscraper));
    assert!(uses(&extended, Technique::TwoStringKite));
}

#[test]
fn test_turbot_fish_detection() {
    let puzzle =
        "6...5481.9.48136..81.62...42.648....18.36274.4..5.1268.68..5...5.2.38..6..1..658.";
    let extended = solve_extended(puzzle);
    assert!(uses(&extended, Technique::TurbotFish));
}

#[test]
fn test_hidden_triple_found_in_constructed_row() {
    // Confine {1, 2, 3} (plus a stray 9) to the first three cells of row
    // 0 and keep {4..8} everywhere else in the row.
    let mut grid = Grid::empty();
    for cell in 0..3 {
        for value in 4..=8 {
            grid.remove_candidate(cell, value).unwrap();
        }
    }
    for cell in 3..9 {
        for value in [1, 2, 3, 9] {
            grid.remove_candidate(cell, value).unwrap();
        }
    }

    let mv = subsets::find_hidden_triple(&grid).expect("should find a HiddenTriple");
    assert_eq!(mv.technique, Technique::HiddenTriple);
    // The stray 9 is removed from all three subset cells.
    assert_eq!(mv.eliminations.len(), 3);
    for (cell, elimination) in mv.eliminations.iter().enumerate() {
        assert_eq!(elimination.index, cell);
        assert_eq!(elimination.values, vec![9]);
    }
}

#[test]
fn test_naked_quad_found_in_constructed_row() {
    // Four cells restricted to {1, 2, 3, 4} lock those digits for the
    // rest of the row.
    let mut grid = Grid::empty();
    for cell in 0..4 {
        for value in 5..=9 {
            grid.remove_candidate(cell, value).unwrap();
        }
    }

    let mv = subsets::find_naked_quad(&grid).expect("should find a NakedQuad");
    assert_eq!(mv.eliminations.len(), 5);
    for (i, elimination) in mv.eliminations.iter().enumerate() {
        assert_eq!(elimination.index, 4 + i);
        assert_eq!(elimination.values, vec![1, 2, 3, 4]);
    }
}

#[test]
fn test_hidden_quad_found_in_constructed_row() {
    // Digits {1..4} appear only in the first four cells of row 0.
    let mut grid = Grid::empty();
    for cell in 4..9 {
        for value in 1..=4 {
            grid.remove_candidate(cell, value).unwrap();
        }
    }

    let mv = subsets::find_hidden_quad(&grid).expect("should find a HiddenQuad");
    assert_eq!(mv.eliminations.len(), 4);
    for (cell, elimination) in mv.eliminations.iter().enumerate() {
        assert_eq!(elimination.index, cell);
        assert_eq!(elimination.values, vec![5, 6, 7, 8, 9]);
    }
}

#[test]
fn test_empty_grid_has_no_move() {
    let grid = Grid::empty();
    assert_eq!(find_next_move(&grid), Err(SudokuError::NoMoveFound));
    assert_eq!(
        find_next_move_in(&grid, Catalog::Extended),
        Err(SudokuError::NoMoveFound)
    );
}

#[test]
fn test_invalid_grid_is_rejected_by_dispatcher() {
    let conflicting: Grid = format!("55{}", ".".repeat(79)).parse().unwrap();
    assert!(matches!(
        find_next_move(&conflicting),
        Err(SudokuError::InvalidGrid(_))
    ));
    assert!(matches!(
        solve_logically(&conflicting),
        Err(SudokuError::InvalidGrid(_))
    ));
}

#[test]
fn test_apply_move_copies_the_grid() {
    let grid = parse(
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
    );
    let mv = find_next_move(&grid).unwrap();
    let next = apply_move(&grid, &mv).unwrap();

    let placement = mv.placement.unwrap();
    assert_eq!(next.value(placement.index), placement.value);
    // The original grid is untouched.
    assert_eq!(grid.value(placement.index), 0);
}

#[test]
fn test_every_applied_move_preserves_validity() {
    let mut grid = parse(
        ".....8..5..97...1..1.....687.51..........3..46......57.6...5.9..8........4.9.....",
    );
    loop {
        match find_next_move(&grid) {
            Ok(mv) => {
                grid = apply_move(&grid, &mv).unwrap();
                assert!(grid.is_valid(), "move {mv} broke grid validity");
            }
            Err(SudokuError::NoMoveFound) => break,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}

#[test]
fn test_find_all_moves_collects_one_match_per_technique() {
    let grid = parse(
        ".....8..5..97...1..1.....687.51..........3..46......57.6...5.9..8........4.9.....",
    );
    let moves = find_all_moves(&grid, Catalog::Core).unwrap();

    assert_eq!(moves.len(), 6);
    // The first collected move is the dispatcher's pick.
    assert_eq!(moves[0].technique, Technique::HiddenSingle);
    assert_eq!(moves[0], find_next_move(&grid).unwrap());

    let techniques: Vec<Technique> = moves.iter().map(|m| m.technique).collect();
    assert!(techniques.contains(&Technique::PointingCandidates));
    assert!(techniques.contains(&Technique::NakedQuad));
    assert!(techniques.contains(&Technique::HiddenPair));
}

#[test]
fn test_move_export_shape() {
    let puzzle =
        "...2..7...5..96832.8.7....641.....78.2..745..7.31854....2531..4.3164..5...9...61.";
    let result = solve(puzzle);

    let record = result.moves[0].export();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["technique"], "NakedSingle");
    assert_eq!(json["cell"], 9);
    assert_eq!(json["value"], 1);
    assert!(json["eliminations"].is_array());
    assert!(json["description"].is_string());

    // Elimination-only moves omit the placement fields.
    let pointing = result
        .moves
        .iter()
        .find(|m| m.technique == Technique::PointingCandidates);
    if let Some(mv) = pointing {
        let json = serde_json::to_value(mv.export()).unwrap();
        assert!(json.get("cell").is_none());
        assert!(json.get("value").is_none());
    }
}

#[test]
fn test_solve_logically_records_catalog_boundary() {
    // A puzzle that needs fish: the default catalog stops early, the
    // extended one finishes.
    let puzzle =
        "3..6148726148723958723956......86......2.95....6.5...85..9..2...6..2..5.24756.1.9";
    let core = logical_solver::solve_logically(&parse(puzzle)).unwrap();
    let extended = solve_extended(puzzle);

    assert!(!core.solved);
    assert!(extended.solved);
    assert!(extended.moves.len() > core.moves.len());
}
