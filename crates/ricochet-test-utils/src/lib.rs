//! Test fixtures for Ricochet board development.
//!
//! Provides tile-layout helpers for feeding
//! [`Board::new`](ricochet_board::Board::new) directly, and a [`RobotSquad`]
//! of the classic four colored robots for scenarios built with
//! [`BoardBuilder`](ricochet_board::BoardBuilder).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{open_grid, open_row, pos, RobotSquad};
