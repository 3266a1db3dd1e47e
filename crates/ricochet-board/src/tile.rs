//! Tiles: single grid cells with walls and an optional target.

use ricochet_core::{Direction, DirectionSet, Position, RobotId};
use std::fmt;

/// One cell of the board.
///
/// Tiles carry no structural equality: two tiles are told apart by the
/// position they occupy on their board.
///
/// An inaccessible tile is always fully walled. [`Tile::new`] discards any
/// connectivity supplied for it, and nothing in this crate can reopen it.
#[derive(Clone, Debug)]
pub struct Tile {
    position: Position,
    accessible: bool,
    connected: DirectionSet,
    target: Option<RobotId>,
}

impl Tile {
    /// Create a tile.
    ///
    /// `connected` of `None` means fully walled. The target is stored as
    /// given; the board checks it against its robot set.
    ///
    /// ```
    /// use ricochet_board::Tile;
    /// use ricochet_core::{Direction, DirectionSet};
    ///
    /// let open: DirectionSet = [Direction::Right, Direction::Up].into_iter().collect();
    /// let tile = Tile::new(0, 1, false, Some(open), None);
    /// assert!(tile.connected().is_empty());
    /// ```
    pub fn new(
        row: usize,
        col: usize,
        accessible: bool,
        connected: Option<DirectionSet>,
        target: Option<RobotId>,
    ) -> Self {
        let connected = match connected {
            Some(set) if accessible => set,
            _ => DirectionSet::EMPTY,
        };
        Self {
            position: Position::new(row, col),
            accessible,
            connected,
            target,
        }
    }

    /// An accessible tile open in the given directions.
    pub fn open(row: usize, col: usize, connected: impl IntoIterator<Item = Direction>) -> Self {
        Self::new(row, col, true, Some(connected.into_iter().collect()), None)
    }

    /// An inaccessible, fully walled tile.
    pub fn blocked(row: usize, col: usize) -> Self {
        Self::new(row, col, false, None, None)
    }

    /// Same tile, targeting `robot`.
    #[must_use]
    pub fn with_target(mut self, robot: RobotId) -> Self {
        self.target = Some(robot);
        self
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.position.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.position.col
    }

    /// Stored `(row, col)` position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether a robot may ever occupy this tile.
    pub fn accessible(&self) -> bool {
        self.accessible
    }

    /// Directions not blocked by a wall on this tile's edge.
    pub fn connected(&self) -> DirectionSet {
        self.connected
    }

    /// Packed connectivity mask (Right = 1, Up = 2, Left = 4, Down = 8).
    pub fn connectivity_bits(&self) -> u8 {
        self.connected.bits()
    }

    /// Whether the edge in `direction` is open.
    pub fn is_open(&self, direction: Direction) -> bool {
        self.connected.contains(direction)
    }

    /// The robot this tile is a goal for, if any.
    pub fn target(&self) -> Option<RobotId> {
        self.target
    }

    pub(crate) fn close(&mut self, direction: Direction) {
        self.connected.remove(direction);
    }

    pub(crate) fn make_inaccessible(&mut self) {
        self.accessible = false;
        self.connected = DirectionSet::EMPTY;
    }

    pub(crate) fn set_target(&mut self, robot: RobotId) {
        self.target = Some(robot);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({}, {})", self.position.row, self.position.col)
    }
}
