//! Board model for Ricochet puzzles.
//!
//! A [`Board`] is a rectangular grid of [`Tile`]s plus the set of
//! [`Robot`]s playing on it. Boards are validated once, at construction,
//! and are immutable afterwards; movement and search live elsewhere and
//! read this model.
//!
//! # Construction
//!
//! - [`Board::new`]: validate an explicit robot set and tile layout
//! - [`BoardBuilder`]: start from an open, rim-walled grid and add walls,
//!   blocked cells, robots, and targets
//!
//! Every violation is reported as a [`BoardError`]; no partially built
//! board is ever returned.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod builder;
pub mod error;
pub(crate) mod grid;
pub mod robot;
pub mod tile;

#[cfg(test)]
pub(crate) mod compliance;

pub use board::{Board, TargetList};
pub use builder::BoardBuilder;
pub use error::BoardError;
pub use robot::{Color, Robot};
pub use tile::Tile;
