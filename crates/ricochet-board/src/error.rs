//! Error types for board construction.

use ricochet_core::{Position, RobotId};

/// Errors arising from board construction.
///
/// Construction stops at the first violation found in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A row's length differs from the width set by the first row.
    #[error("row {row} has {found} tiles, expected {expected}")]
    StructuralMismatch {
        /// Index of the offending row.
        row: usize,
        /// Width established by row 0.
        expected: usize,
        /// Actual length of the row.
        found: usize,
    },
    /// A tile's stored position differs from where it sits in the grid.
    #[error("tile at {expected} reports position {found}")]
    PositionMismatch {
        /// Grid position the tile occupies.
        expected: Position,
        /// Position the tile claims.
        found: Position,
    },
    /// A tile targets a robot that is not in the board's robot set.
    #[error("tile at {position} targets robot {robot}, which is not on the board")]
    DanglingTarget {
        /// Position of the targeting tile.
        position: Position,
        /// The missing robot.
        robot: RobotId,
    },
    /// The layout has no rows, or its first row has no tiles.
    #[error("board must have at least one row and one column")]
    EmptyBoard,
    /// A builder operation addressed a position outside the grid.
    #[error("position {position} out of bounds for {height}x{width} board")]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Board height.
        height: usize,
        /// Board width.
        width: usize,
    },
}
