//! Shared helpers for row-major grid addressing.

use crate::error::BoardError;
use ricochet_core::{Direction, Position};

/// Check that `position` lies inside a `height x width` grid.
pub(crate) fn check_bounds(
    position: Position,
    height: usize,
    width: usize,
) -> Result<Position, BoardError> {
    if position.row >= height || position.col >= width {
        return Err(BoardError::OutOfBounds {
            position,
            height,
            width,
        });
    }
    Ok(position)
}

/// The in-bounds neighbour of `position` in `direction`, if any.
///
/// Steps off the grid are absorbed: they yield `None` rather than wrapping
/// or clamping.
pub(crate) fn resolve_step(
    position: Position,
    direction: Direction,
    height: usize,
    width: usize,
) -> Option<Position> {
    position
        .step(direction)
        .filter(|p| p.row < height && p.col < width)
}

/// Row-major ordering: `(0,0), (0,1), ..., (height-1, width-1)`.
pub(crate) fn row_major(height: usize, width: usize) -> impl Iterator<Item = Position> {
    (0..height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_accept_interior_and_reject_edges() {
        assert!(check_bounds(Position::new(2, 3), 3, 4).is_ok());
        assert!(matches!(
            check_bounds(Position::new(3, 0), 3, 4),
            Err(BoardError::OutOfBounds { height: 3, width: 4, .. })
        ));
        assert!(check_bounds(Position::new(0, 4), 3, 4).is_err());
    }

    #[test]
    fn steps_off_grid_are_absorbed() {
        let corner = Position::new(0, 0);
        assert_eq!(resolve_step(corner, Direction::Up, 2, 2), None);
        assert_eq!(resolve_step(corner, Direction::Left, 2, 2), None);
        assert_eq!(
            resolve_step(corner, Direction::Right, 2, 2),
            Some(Position::new(0, 1))
        );
        let far = Position::new(1, 1);
        assert_eq!(resolve_step(far, Direction::Down, 2, 2), None);
        assert_eq!(resolve_step(far, Direction::Right, 2, 2), None);
    }

    #[test]
    fn row_major_is_complete_and_ordered() {
        let all: Vec<Position> = row_major(2, 3).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[2], Position::new(0, 2));
        assert_eq!(all[3], Position::new(1, 0));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
