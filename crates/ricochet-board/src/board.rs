//! The validated board aggregate.

use crate::error::BoardError;
use crate::grid;
use crate::robot::Robot;
use crate::tile::Tile;
use indexmap::IndexMap;
use ricochet_core::{Direction, Position, RobotId};
use smallvec::SmallVec;
use std::ops::Index;

/// Ordered target positions of one robot, in row-major scan order.
pub type TargetList = SmallVec<[Position; 4]>;

/// A rectangular grid of tiles and the robots playing on it.
///
/// A `Board` only exists in a valid state: [`Board::new`] checks that the
/// grid is rectangular, that every tile sits at the position it reports,
/// and that every target names a robot on the board. The robot-to-targets
/// index is built in the same pass and never changes afterwards.
///
/// # Examples
///
/// ```
/// use ricochet_board::{Board, Robot, Tile};
/// use ricochet_core::Position;
///
/// let r = Robot::named("R");
/// let id = r.id();
/// let tiles = vec![
///     vec![Tile::open(0, 0, []), Tile::open(0, 1, [])],
///     vec![Tile::open(1, 0, []), Tile::open(1, 1, []).with_target(id)],
/// ];
/// let board = Board::new([r], tiles).unwrap();
/// assert_eq!((board.height(), board.width()), (2, 2));
/// assert_eq!(board.targets_of(id), &[Position::new(1, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    robots: IndexMap<RobotId, Robot>,
    tiles: Vec<Vec<Tile>>,
    height: usize,
    width: usize,
    targets: IndexMap<RobotId, TargetList>,
}

impl Board {
    /// Validate a robot collection and a row-major tile layout.
    ///
    /// Robots are deduplicated by identity, keeping the first occurrence.
    /// Checks run row by row and stop at the first violation:
    ///
    /// - `Err(BoardError::EmptyBoard)` if there are no rows
    /// - `Err(BoardError::StructuralMismatch)` if a row's length differs from row 0
    /// - `Err(BoardError::PositionMismatch)` if a tile reports the wrong position
    /// - `Err(BoardError::DanglingTarget)` if a target robot is not in `robots`
    pub fn new<R, T>(robots: R, tiles: T) -> Result<Self, BoardError>
    where
        R: IntoIterator<Item = Robot>,
        T: IntoIterator,
        T::Item: IntoIterator<Item = Tile>,
    {
        let mut robot_set: IndexMap<RobotId, Robot> = IndexMap::new();
        for robot in robots {
            robot_set.entry(robot.id()).or_insert(robot);
        }

        let tiles: Vec<Vec<Tile>> = tiles
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let height = tiles.len();
        let width = tiles.first().map_or(0, Vec::len);
        if height == 0 {
            return Err(BoardError::EmptyBoard);
        }

        let mut targets: IndexMap<RobotId, TargetList> = IndexMap::new();
        for (row, cells) in tiles.iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::StructuralMismatch {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (col, tile) in cells.iter().enumerate() {
                let expected = Position::new(row, col);
                if tile.position() != expected {
                    return Err(BoardError::PositionMismatch {
                        expected,
                        found: tile.position(),
                    });
                }
                if let Some(robot) = tile.target() {
                    if !robot_set.contains_key(&robot) {
                        return Err(BoardError::DanglingTarget {
                            position: expected,
                            robot,
                        });
                    }
                    targets.entry(robot).or_default().push(expected);
                }
            }
        }

        Ok(Self {
            robots: robot_set,
            tiles,
            height,
            width,
            targets,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// The tile grid, indexable as `tiles()[row][col]`.
    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Bounds-checked tile lookup.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(position.row)?.get(position.col)
    }

    /// All tiles in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    /// Robots in the order they were first supplied.
    pub fn robots(&self) -> impl ExactSizeIterator<Item = &Robot> {
        self.robots.values()
    }

    /// Number of distinct robots.
    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }

    /// Look up a robot by identity.
    pub fn robot(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(&id)
    }

    /// Whether `id` belongs to a robot on this board.
    pub fn contains_robot(&self, id: RobotId) -> bool {
        self.robots.contains_key(&id)
    }

    /// Robot-to-targets index, keyed in order of each robot's first target.
    ///
    /// Robots without any target tile have no entry.
    pub fn targets(&self) -> impl ExactSizeIterator<Item = (RobotId, &[Position])> {
        self.targets.iter().map(|(id, list)| (*id, list.as_slice()))
    }

    /// Target positions of one robot, row-major. Empty if it has none.
    pub fn targets_of(&self, id: RobotId) -> &[Position] {
        match self.targets.get(&id) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Target tiles of one robot, row-major.
    pub fn target_tiles(&self, id: RobotId) -> impl Iterator<Item = &Tile> {
        self.targets_of(id).iter().map(move |p| &self[*p])
    }

    /// Every target position on the board, row-major.
    pub fn target_positions(&self) -> Vec<Position> {
        self.iter_tiles()
            .filter(|t| t.target().is_some())
            .map(Tile::position)
            .collect()
    }

    /// The adjacent in-bounds position in `direction`, or `None` at the edge.
    pub fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        grid::resolve_step(position, direction, self.height, self.width)
    }

    /// Whether a robot could pass from `position` to its neighbour in
    /// `direction`, ignoring other robots.
    ///
    /// Requires the tile to be open in `direction`, the neighbour to exist
    /// and be accessible, and the neighbour to be open in the opposite
    /// direction. Out-of-bounds `position`s are never connected.
    pub fn is_connected(&self, position: Position, direction: Direction) -> bool {
        let Some(tile) = self.tile(position) else {
            return false;
        };
        if !tile.is_open(direction) {
            return false;
        }
        self.neighbour(position, direction)
            .map(|p| &self[p])
            .is_some_and(|next| next.accessible() && next.is_open(direction.opposite()))
    }
}

impl Index<Position> for Board {
    type Output = Tile;

    fn index(&self, position: Position) -> &Tile {
        &self.tiles[position.row][position.col]
    }
}
