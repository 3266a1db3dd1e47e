//! Ricochet: static board topology for sliding-piece puzzles.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! Ricochet sub-crates. Movement, solving, and rendering are left to
//! consumers; this crate gives them a validated board to read.
//!
//! # Quick start
//!
//! ```rust
//! use ricochet::prelude::*;
//!
//! let red = Robot::new("red", Some(Color::Red), None);
//! let id = red.id();
//!
//! let mut builder = BoardBuilder::new(8, 8).unwrap();
//! builder
//!     .wall(Position::new(2, 5), Direction::Down)
//!     .unwrap()
//!     .target(Position::new(2, 5), id)
//!     .unwrap()
//!     .robot(red);
//! let board = builder.build().unwrap();
//!
//! assert_eq!(board.targets_of(id), &[Position::new(2, 5)]);
//! assert!(!board.is_connected(Position::new(2, 5), Direction::Down));
//! assert_eq!(board[Position::new(2, 5)].connectivity_bits(), 0b0111);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ricochet-core` | Directions, connectivity sets, positions, robot IDs, glyphs |
//! | [`board`] | `ricochet-board` | Tiles, robots, boards, the board builder |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`ricochet-core`).
///
/// Contains the [`types::Direction`] algebra, the [`types::DirectionSet`]
/// connectivity set, [`types::Position`], [`types::RobotId`], and the
/// [`types::glyph`] table.
pub use ricochet_core as types;

/// Board model (`ricochet-board`).
///
/// Provides [`board::Tile`], [`board::Robot`], [`board::Board`], and
/// [`board::BoardBuilder`].
pub use ricochet_board as board;

/// Common imports for typical Ricochet usage.
///
/// ```rust
/// use ricochet::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ricochet_core::{Direction, DirectionSet, Position, RobotId};

    // Board
    pub use ricochet_board::{Board, BoardBuilder, Color, Robot, Tile};

    // Errors
    pub use ricochet_board::BoardError;
    pub use ricochet_core::InvalidDirectionBits;
}
