//! Strongly-typed identifiers and grid positions.

use crate::direction::Direction;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`RobotId`] allocation.
static ROBOT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a robot.
///
/// Allocated from a monotonic atomic counter via [`RobotId::next`]. Two
/// robots constructed separately always have different IDs, even when their
/// names and colors are identical. Tiles refer to their target robot by this
/// ID rather than by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RobotId(u64);

impl RobotId {
    /// Allocate a fresh, unique robot ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(ROBOT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A zero-based `(row, col)` cell position, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Row index, growing downward.
    pub row: usize,
    /// Column index, growing rightward.
    pub col: usize,
}

impl Position {
    /// Create a position from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent position one step in `direction`.
    ///
    /// Returns `None` if the step would leave the non-negative quadrant or
    /// overflow. Board bounds are not checked here; see the board's
    /// `neighbour` query for that.
    ///
    /// ```
    /// use ricochet_core::{Direction, Position};
    ///
    /// let p = Position::new(0, 3);
    /// assert_eq!(p.step(Direction::Down), Some(Position::new(1, 3)));
    /// assert_eq!(p.step(Direction::Up), None);
    /// ```
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dcol, drow) = direction.offset();
        let row = self.row.checked_add_signed(drow as isize)?;
        let col = self.col.checked_add_signed(dcol as isize)?;
        Some(Position { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robot_ids_are_unique() {
        let a = RobotId::next();
        let b = RobotId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn robot_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..100).map(|_| RobotId::next()).collect::<Vec<_>>()))
            .collect();
        let mut all: Vec<RobotId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
    }

    #[test]
    fn step_moves_by_offset() {
        let p = Position::new(2, 2);
        assert_eq!(p.step(Direction::Right), Some(Position::new(2, 3)));
        assert_eq!(p.step(Direction::Up), Some(Position::new(1, 2)));
        assert_eq!(p.step(Direction::Left), Some(Position::new(2, 1)));
        assert_eq!(p.step(Direction::Down), Some(Position::new(3, 2)));
    }

    #[test]
    fn step_off_origin_is_none() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
    }

    #[test]
    fn step_there_and_back_is_identity() {
        let p = Position::new(4, 7);
        for d in Direction::ALL {
            assert_eq!(p.step(d).and_then(|q| q.step(d.opposite())), Some(p));
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
        assert!(RobotId::next().to_string().starts_with('#'));
    }
}
