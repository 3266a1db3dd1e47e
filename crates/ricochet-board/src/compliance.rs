//! Board invariant test helpers.
//!
//! These functions verify that a constructed [`Board`] satisfies the
//! guarantees its constructor promises. Reused across the board and
//! builder test modules.

use crate::board::Board;
use crate::grid;
use indexmap::IndexSet;
use ricochet_core::{Direction, Position};

/// Assert that every tile sits at the position it reports, row-major.
pub fn assert_positions_row_major(board: &Board) {
    let stored: Vec<Position> = board.iter_tiles().map(|t| t.position()).collect();
    let expected: Vec<Position> = grid::row_major(board.height(), board.width()).collect();
    assert_eq!(stored, expected, "tile positions are not row-major");
    for (row, cells) in board.tiles().iter().enumerate() {
        assert_eq!(
            cells.len(),
            board.width(),
            "row {row} has {} tiles, width is {}",
            cells.len(),
            board.width()
        );
    }
}

/// Assert that inaccessible tiles have no open edge.
pub fn assert_inaccessible_tiles_walled(board: &Board) {
    for tile in board.iter_tiles() {
        if !tile.accessible() {
            assert!(
                tile.connected().is_empty(),
                "inaccessible {tile} is open towards {}",
                tile.connected()
            );
        }
    }
}

/// Assert that `is_connected(a, d)` agrees with `is_connected(b, opposite(d))`
/// for every neighbouring pair, and is false off the board edge.
pub fn assert_connectivity_symmetric(board: &Board) {
    for pos in grid::row_major(board.height(), board.width()) {
        for d in Direction::ALL {
            let forward = board.is_connected(pos, d);
            match board.neighbour(pos, d) {
                Some(next) => assert_eq!(
                    forward,
                    board.is_connected(next, d.opposite()),
                    "connectivity asymmetric between {pos} ({d}) and {next} ({})",
                    d.opposite()
                ),
                None => assert!(!forward, "{pos} connected {d} off the board edge"),
            }
        }
    }
}

/// Assert that the targets index lists exactly the targeting tiles, each
/// under its own robot, in row-major order, and only for board robots.
pub fn assert_targets_consistent(board: &Board) {
    let mut seen: IndexSet<Position> = IndexSet::new();
    for (robot, list) in board.targets() {
        assert!(board.contains_robot(robot), "targets index names unknown robot {robot}");
        assert!(!list.is_empty(), "robot {robot} has an empty target entry");
        assert!(
            list.windows(2).all(|w| w[0] < w[1]),
            "targets of {robot} are not row-major: {list:?}"
        );
        for pos in list {
            assert_eq!(board[*pos].target(), Some(robot), "{pos} listed under {robot}");
            assert!(seen.insert(*pos), "{pos} listed twice");
        }
    }
    let scanned: IndexSet<Position> = board.target_positions().into_iter().collect();
    assert_eq!(seen.len(), scanned.len(), "targets index size differs from scan");
    assert!(
        scanned.iter().all(|p| seen.contains(p)),
        "targets index misses a targeting tile"
    );
}

/// Run all board compliance checks.
pub fn run_full_compliance(board: &Board) {
    assert_positions_row_major(board);
    assert_inaccessible_tiles_walled(board);
    assert_connectivity_symmetric(board);
    assert_targets_consistent(board);
}
