//! Benchmark profiles for the Ricochet board model.
//!
//! - [`reference_layout`]: a square tile layout with deterministic walls,
//!   blocked cells, and targets, ready to hand to [`Board::new`]
//! - [`reference_board`]: the same layout, validated

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ricochet_board::{Board, BoardError, Robot, Tile};
use ricochet_core::DirectionSet;

/// Deterministic pseudo-random value for cell `k` under `seed`.
fn mix(seed: u64, k: u64) -> u64 {
    (k ^ seed)
        .wrapping_mul(6364136223846793007)
        .wrapping_add(1442695040888963407)
        >> 33
}

/// Build a `size x size` layout with one robot per entry of `robots`.
///
/// Roughly one cell in sixteen is blocked and one in thirty-two is a target,
/// assigned round-robin to the robots. Walls are drawn from the full
/// 16-value mask range, so most cells have at least one closed edge.
pub fn reference_layout(size: usize, seed: u64, robots: &[Robot]) -> Vec<Vec<Tile>> {
    let mut next_target = 0usize;
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let v = mix(seed, (row * size + col) as u64);
                    let accessible = v % 16 != 0;
                    let open = DirectionSet::from_bits_truncate((v >> 4) as u8);
                    let tile = Tile::new(row, col, accessible, Some(open), None);
                    if robots.is_empty() || (v >> 8) % 32 != 0 {
                        return tile;
                    }
                    let robot = robots[next_target % robots.len()].id();
                    next_target += 1;
                    tile.with_target(robot)
                })
                .collect()
        })
        .collect()
}

/// Build and validate [`reference_layout`].
pub fn reference_board(size: usize, seed: u64, robots: Vec<Robot>) -> Result<Board, BoardError> {
    let tiles = reference_layout(size, seed, &robots);
    Board::new(robots, tiles)
}
