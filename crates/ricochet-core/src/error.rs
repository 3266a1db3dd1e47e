//! Error types for core conversions.

/// A packed connectivity mask carried bits outside the four direction flags.
///
/// Only the low nibble (`0b1111`) encodes directions; any higher bit makes
/// the mask ambiguous, so [`DirectionSet::from_bits`](crate::DirectionSet::from_bits)
/// rejects it instead of guessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("connectivity mask {bits:#010b} has bits outside {valid:#06b}")]
pub struct InvalidDirectionBits {
    /// The offending mask.
    pub bits: u8,
    /// The mask of all valid direction bits.
    pub valid: u8,
}
