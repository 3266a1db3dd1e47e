//! Reusable board fixtures.
//!
//! - [`open_row`] / [`open_grid`]: accessible tiles open in every direction,
//!   for tests that exercise validation rather than walls.
//! - [`RobotSquad`]: red, yellow, green, and blue robots.
//! - [`RobotSquad::classic_board`]: the 16x16 board with a few walls and one
//!   target per robot.

use ricochet_board::{Board, BoardBuilder, BoardError, Color, Robot, Tile};
use ricochet_core::{Direction, Position, RobotId};

/// Shorthand for [`Position::new`].
pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// One row of fully open tiles at the correct positions.
pub fn open_row(row: usize, width: usize) -> Vec<Tile> {
    (0..width)
        .map(|col| Tile::open(row, col, Direction::ALL))
        .collect()
}

/// A `height x width` layout of fully open tiles at the correct positions.
pub fn open_grid(height: usize, width: usize) -> Vec<Vec<Tile>> {
    (0..height).map(|row| open_row(row, width)).collect()
}

/// The four classic colored robots.
#[derive(Clone, Debug)]
pub struct RobotSquad {
    pub red: Robot,
    pub yellow: Robot,
    pub green: Robot,
    pub blue: Robot,
}

impl RobotSquad {
    pub fn new() -> Self {
        Self {
            red: Robot::new("red", Some(Color::Red), None),
            yellow: Robot::new("yellow", Some(Color::Yellow), None),
            green: Robot::new("green", Some(Color::Green), None),
            blue: Robot::new("blue", Some(Color::Blue), None),
        }
    }

    /// Robots in red, yellow, green, blue order.
    pub fn all(&self) -> Vec<Robot> {
        vec![
            self.red.clone(),
            self.yellow.clone(),
            self.green.clone(),
            self.blue.clone(),
        ]
    }

    pub fn ids(&self) -> [RobotId; 4] {
        [
            self.red.id(),
            self.yellow.id(),
            self.green.id(),
            self.blue.id(),
        ]
    }

    /// Classic 16x16 board: blocked centre, an L-shaped wall pair in each
    /// quadrant, and one target per robot tucked into the corner of its L.
    pub fn classic_board(&self) -> Result<Board, BoardError> {
        let mut builder = BoardBuilder::classic();
        let corners = [
            (pos(2, 3), Direction::Up, Direction::Right, self.red.id()),
            (pos(3, 12), Direction::Up, Direction::Left, self.yellow.id()),
            (pos(12, 2), Direction::Down, Direction::Right, self.green.id()),
            (pos(13, 13), Direction::Down, Direction::Left, self.blue.id()),
        ];
        for (at, a, b, robot) in corners {
            builder.wall(at, a)?.wall(at, b)?.target(at, robot)?;
        }
        for robot in self.all() {
            builder.robot(robot);
        }
        builder.build()
    }
}

impl Default for RobotSquad {
    fn default() -> Self {
        Self::new()
    }
}
