//! Incremental board configuration.

use crate::board::Board;
use crate::error::BoardError;
use crate::grid;
use crate::robot::Robot;
use crate::tile::Tile;
use ricochet_core::{Direction, DirectionSet, Position, RobotId};

/// Builder for boards described as "open grid plus walls".
///
/// Starts from an accessible grid whose only walls are the outer rim.
/// Every edit keeps walls two-sided: closing an edge on one tile also
/// closes the facing edge on its neighbour. [`build`](Self::build) runs the
/// same validation as [`Board::new`], so a target naming a robot that was
/// never registered still fails with [`BoardError::DanglingTarget`].
///
/// # Examples
///
/// ```
/// use ricochet_board::{BoardBuilder, Robot};
/// use ricochet_core::{Direction, Position};
///
/// let red = Robot::named("red");
/// let id = red.id();
/// let mut builder = BoardBuilder::new(4, 4).unwrap();
/// builder
///     .wall(Position::new(1, 1), Direction::Right)
///     .unwrap()
///     .target(Position::new(3, 0), id)
///     .unwrap()
///     .robot(red);
/// let board = builder.build().unwrap();
/// assert!(!board.is_connected(Position::new(1, 2), Direction::Left));
/// assert_eq!(board.targets_of(id), &[Position::new(3, 0)]);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    height: usize,
    width: usize,
    tiles: Vec<Vec<Tile>>,
    robots: Vec<Robot>,
}

impl BoardBuilder {
    /// Side length of the classic square board.
    pub const CLASSIC_SIZE: usize = 16;

    /// Create an open `height x width` grid walled only at its rim.
    ///
    /// Returns `Err(BoardError::EmptyBoard)` if either dimension is 0.
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        if height == 0 || width == 0 {
            return Err(BoardError::EmptyBoard);
        }
        Ok(Self::open_grid(height, width))
    }

    /// A [`CLASSIC_SIZE`](Self::CLASSIC_SIZE) square board with its central
    /// 2x2 block made inaccessible.
    pub fn classic() -> Self {
        let size = Self::CLASSIC_SIZE;
        let mut builder = Self::open_grid(size, size);
        let mid = size / 2;
        for (row, col) in [(mid - 1, mid - 1), (mid - 1, mid), (mid, mid - 1), (mid, mid)] {
            builder.block_at(Position::new(row, col));
        }
        builder
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Close the edge of `position` facing `direction`, and the facing edge
    /// of its neighbour.
    ///
    /// Walling the rim is a no-op. Returns `Err(BoardError::OutOfBounds)`
    /// for positions outside the grid.
    pub fn wall(
        &mut self,
        position: Position,
        direction: Direction,
    ) -> Result<&mut Self, BoardError> {
        let position = grid::check_bounds(position, self.height, self.width)?;
        self.tile_mut(position).close(direction);
        if let Some(next) = grid::resolve_step(position, direction, self.height, self.width) {
            self.tile_mut(next).close(direction.opposite());
        }
        Ok(self)
    }

    /// Make `position` inaccessible and wall off every neighbour facing it.
    ///
    /// Returns `Err(BoardError::OutOfBounds)` for positions outside the grid.
    pub fn block(&mut self, position: Position) -> Result<&mut Self, BoardError> {
        let position = grid::check_bounds(position, self.height, self.width)?;
        self.block_at(position);
        Ok(self)
    }

    /// Mark `position` as a target for `robot`.
    ///
    /// The robot is not checked here; [`build`](Self::build) rejects it if
    /// it was never registered. Returns `Err(BoardError::OutOfBounds)` for
    /// positions outside the grid.
    pub fn target(&mut self, position: Position, robot: RobotId) -> Result<&mut Self, BoardError> {
        let position = grid::check_bounds(position, self.height, self.width)?;
        self.tile_mut(position).set_target(robot);
        Ok(self)
    }

    /// Register a robot.
    pub fn robot(&mut self, robot: Robot) -> &mut Self {
        self.robots.push(robot);
        self
    }

    /// Validate and produce the board.
    pub fn build(self) -> Result<Board, BoardError> {
        Board::new(self.robots, self.tiles)
    }

    fn open_grid(height: usize, width: usize) -> Self {
        let tiles = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        let pos = Position::new(row, col);
                        let open: DirectionSet = Direction::ALL
                            .into_iter()
                            .filter(|d| grid::resolve_step(pos, *d, height, width).is_some())
                            .collect();
                        Tile::new(row, col, true, Some(open), None)
                    })
                    .collect()
            })
            .collect();
        Self {
            height,
            width,
            tiles,
            robots: Vec::new(),
        }
    }

    fn block_at(&mut self, position: Position) {
        self.tile_mut(position).make_inaccessible();
        for d in Direction::ALL {
            if let Some(next) = grid::resolve_step(position, d, self.height, self.width) {
                self.tile_mut(next).close(d.opposite());
            }
        }
    }

    fn tile_mut(&mut self, position: Position) -> &mut Tile {
        &mut self.tiles[position.row][position.col]
    }
}
