//! The four board directions and their relations.

use std::fmt;

/// One of the four directions a robot can travel on the board.
///
/// Columns grow rightward and rows grow downward, so [`Up`](Direction::Up)
/// decreases the row and [`Right`](Direction::Right) increases the column.
///
/// # Examples
///
/// ```
/// use ricochet_core::Direction;
///
/// assert_eq!(Direction::Right.opposite(), Direction::Left);
/// assert_eq!(Direction::Right.perpendicular(), [Direction::Up, Direction::Down]);
/// assert_eq!(Direction::Up.offset(), (0, -1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards increasing column.
    Right,
    /// Towards decreasing row.
    Up,
    /// Towards decreasing column.
    Left,
    /// Towards increasing row.
    Down,
}

impl Direction {
    /// All directions, in index order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// The direction pointing the other way along the same axis.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
        }
    }

    /// The two directions on the other axis.
    ///
    /// Horizontal directions yield `[Up, Down]`, vertical ones `[Left, Right]`.
    /// The pair never contains `self` or `self.opposite()`, and its two
    /// members are each other's opposites.
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Right | Direction::Left => [Direction::Up, Direction::Down],
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
        }
    }

    /// Unit offset as `(dcol, drow)`.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Single-bit flag used by the packed connectivity mask.
    ///
    /// Right = 1, Up = 2, Left = 4, Down = 8.
    pub const fn bit(self) -> u8 {
        1u8 << self.index()
    }

    /// Position of this direction in [`Direction::ALL`], in `0..4`.
    pub const fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Down => 3,
        }
    }

    /// `true` for [`Left`](Direction::Left) and [`Right`](Direction::Right).
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Right),
            Just(Direction::Up),
            Just(Direction::Left),
            Just(Direction::Down),
        ]
    }

    #[test]
    fn offsets_follow_screen_axes() {
        assert_eq!(Direction::Right.offset(), (1, 0));
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Down.offset(), (0, 1));
    }

    #[test]
    fn bits_are_distinct_single_bits() {
        let bits: Vec<u8> = Direction::ALL.iter().map(|d| d.bit()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8]);
        let combined = bits.iter().fold(0u8, |acc, b| acc | b);
        assert_eq!(combined, 0b1111);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn perpendicular_order_is_stable() {
        assert_eq!(
            Direction::Left.perpendicular(),
            [Direction::Up, Direction::Down]
        );
        assert_eq!(
            Direction::Down.perpendicular(),
            [Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn display_is_lowercase_name() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }

    proptest! {
        #[test]
        fn opposite_is_involution(d in arb_direction()) {
            prop_assert_eq!(d.opposite().opposite(), d);
            prop_assert_ne!(d.opposite(), d);
        }

        #[test]
        fn perpendicular_excludes_own_axis(d in arb_direction()) {
            let perp = d.perpendicular();
            prop_assert!(!perp.contains(&d));
            prop_assert!(!perp.contains(&d.opposite()));
            prop_assert_eq!(perp[0].opposite(), perp[1]);
            prop_assert_ne!(perp[0].is_horizontal(), d.is_horizontal());
        }

        #[test]
        fn opposite_offsets_cancel(d in arb_direction()) {
            let (dx, dy) = d.offset();
            let (ox, oy) = d.opposite().offset();
            prop_assert_eq!((dx + ox, dy + oy), (0, 0));
            prop_assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
