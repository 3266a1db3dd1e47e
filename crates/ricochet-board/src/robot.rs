//! Robots: the movable pieces.

use ricochet_core::{Position, RobotId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Paint color of a robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red robot.
    Red,
    /// Yellow robot.
    Yellow,
    /// Green robot.
    Green,
    /// Blue robot.
    Blue,
    /// Silver robot.
    Silver,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Silver => "silver",
        };
        f.write_str(name)
    }
}

/// A named, optionally colored piece.
///
/// Identity is the [`RobotId`] allocated at construction, not the name:
/// two robots built with the same name are different robots, while a clone
/// is the same robot. Equality and hashing follow the ID.
///
/// `tile` is bookkeeping for movement code. The board neither reads nor
/// enforces it.
#[derive(Clone, Debug)]
pub struct Robot {
    id: RobotId,
    /// Display name. Not required to be unique.
    pub name: String,
    /// Optional paint color.
    pub color: Option<Color>,
    /// Position of the tile the robot currently stands on, if placed.
    pub tile: Option<Position>,
}

impl Robot {
    /// Create a robot with a fresh identity.
    ///
    /// ```
    /// use ricochet_board::{Color, Robot};
    ///
    /// let a = Robot::new("red", Some(Color::Red), None);
    /// let b = Robot::new("red", Some(Color::Red), None);
    /// assert_ne!(a, b);
    /// assert_eq!(a.clone(), a);
    /// ```
    pub fn new(name: impl Into<String>, color: Option<Color>, tile: Option<Position>) -> Self {
        Self {
            id: RobotId::next(),
            name: name.into(),
            color,
            tile,
        }
    }

    /// Create an uncolored, unplaced robot.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None, None)
    }

    /// This robot's identity.
    pub fn id(&self) -> RobotId {
        self.id
    }
}

impl PartialEq for Robot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Robot {}

impl Hash for Robot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} ({color})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_different_identity() {
        let a = Robot::named("R");
        let b = Robot::named("R");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn clone_keeps_identity_through_mutation() {
        let a = Robot::new("blue", Some(Color::Blue), None);
        let mut moved = a.clone();
        moved.tile = Some(Position::new(3, 4));
        assert_eq!(moved, a);
        assert_eq!(moved.id(), a.id());
        assert_eq!(a.tile, None);
    }

    #[test]
    fn fields_are_unchecked() {
        let r = Robot::new("", None, Some(Position::new(usize::MAX, 0)));
        assert!(r.name.is_empty());
        assert_eq!(r.tile, Some(Position::new(usize::MAX, 0)));
    }

    #[test]
    fn display_includes_color() {
        assert_eq!(
            Robot::new("Rosie", Some(Color::Red), None).to_string(),
            "Rosie (red)"
        );
        assert_eq!(Robot::named("Gus").to_string(), "Gus");
    }
}
