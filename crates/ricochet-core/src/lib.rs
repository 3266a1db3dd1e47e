//! Core types for the Ricochet board model.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pure, stateless pieces that every other crate in the workspace builds
//! on: the [`Direction`] algebra, the [`DirectionSet`] connectivity set with
//! its packed bit-mask form, grid [`Position`]s and [`RobotId`]s, and the
//! wall-glyph lookup table in [`glyph`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod direction;
pub mod error;
pub mod glyph;
pub mod id;

pub use connectivity::DirectionSet;
pub use direction::Direction;
pub use error::InvalidDirectionBits;
pub use id::{Position, RobotId};
