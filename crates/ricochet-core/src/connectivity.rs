//! Per-tile connectivity: a set of open directions.

use crate::direction::Direction;
use crate::error::InvalidDirectionBits;
use std::fmt;

/// The set of directions in which a tile is open (not walled).
///
/// The set is stored as its packed 4-bit mask (Right = 1, Up = 2, Left = 4,
/// Down = 8); the set view is derived from that single representation, so
/// the two forms always agree.
///
/// # Examples
///
/// ```
/// use ricochet_core::{Direction, DirectionSet};
///
/// let set: DirectionSet = [Direction::Right, Direction::Up].into_iter().collect();
/// assert_eq!(set.bits(), 0b0011);
/// assert!(set.contains(Direction::Up));
/// assert_eq!(DirectionSet::from_bits(0b0011), Ok(set));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Mask of all valid direction bits.
    pub const VALID_BITS: u8 = 0b1111;

    /// The empty set: fully walled.
    pub const EMPTY: DirectionSet = DirectionSet(0);

    /// All four directions: fully open.
    pub const ALL: DirectionSet = DirectionSet(Self::VALID_BITS);

    /// Create an empty set.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Decode a packed mask.
    ///
    /// Returns `Err` if any bit outside [`VALID_BITS`](Self::VALID_BITS) is set.
    pub const fn from_bits(bits: u8) -> Result<Self, InvalidDirectionBits> {
        if bits & !Self::VALID_BITS != 0 {
            return Err(InvalidDirectionBits {
                bits,
                valid: Self::VALID_BITS,
            });
        }
        Ok(Self(bits))
    }

    /// Decode a packed mask, discarding bits that are not directions.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::VALID_BITS)
    }

    /// The packed mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `direction` is open.
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Open `direction`. Returns `true` if it was closed before.
    pub fn insert(&mut self, direction: Direction) -> bool {
        let was_absent = !self.contains(direction);
        self.0 |= direction.bit();
        was_absent
    }

    /// Close `direction`. Returns `true` if it was open before.
    pub fn remove(&mut self, direction: Direction) -> bool {
        let was_present = self.contains(direction);
        self.0 &= !direction.bit();
        was_present
    }

    /// Copy of this set with `direction` opened.
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Copy of this set with `direction` closed.
    #[must_use]
    pub const fn without(self, direction: Direction) -> Self {
        Self(self.0 & !direction.bit())
    }

    /// `true` if no direction is open.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of open directions.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Open directions in [`Direction::ALL`] order.
    pub fn iter(self) -> Iter {
        Iter {
            mask: self.0,
            next: 0,
        }
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl<'a> FromIterator<&'a Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = &'a Direction>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Extend<Direction> for DirectionSet {
    fn extend<I: IntoIterator<Item = Direction>>(&mut self, iter: I) {
        for d in iter {
            self.insert(d);
        }
    }
}

impl IntoIterator for DirectionSet {
    type Item = Direction;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the open directions of a [`DirectionSet`].
#[derive(Clone, Debug)]
pub struct Iter {
    mask: u8,
    next: usize,
}

impl Iterator for Iter {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        while self.next < Direction::ALL.len() {
            let d = Direction::ALL[self.next];
            self.next += 1;
            if self.mask & d.bit() != 0 {
                return Some(d);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.mask >> self.next.min(4)).count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self(direction.bit())
    }
}

impl From<DirectionSet> for u8 {
    fn from(set: DirectionSet) -> Self {
        set.0
    }
}

impl TryFrom<u8> for DirectionSet {
    type Error = InvalidDirectionBits;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, d) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{d}")?;
        }
        f.write_str("}")
    }
}
