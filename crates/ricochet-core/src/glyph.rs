//! Glyphs for drawing walls and cells in text renderings of a board.
//!
//! [`BARS`] maps a pair of edge configuration classes at a tile corner to
//! the stroke drawn there. Renderers pass indices in `0..4`; the table has
//! a blank on its diagonal and is symmetric.

use crate::direction::Direction;

/// Corner stroke table, indexed `[row_class][col_class]`.
pub const BARS: [[char; 4]; 4] = [
    [' ', '\\', '|', '/'],
    ['\\', ' ', '/', '-'],
    ['|', '/', ' ', '\\'],
    ['/', '-', '\\', ' '],
];

/// Glyph for an open, connected passage.
pub const CONNECTED_CHAR: char = ' ';

/// Shading for an accessible cell with no target.
pub const EMPTY_FIELD_CHAR: char = '\u{2591}';

/// Shading for a target cell.
pub const TARGET_CHAR: char = '\u{2593}';

/// Look up the corner stroke for two configuration classes.
///
/// # Panics
///
/// Panics if either index is `>= 4`.
///
/// ```
/// use ricochet_core::glyph::bar;
///
/// assert_eq!(bar(0, 2), '|');
/// assert_eq!(bar(3, 1), '-');
/// ```
pub const fn bar(row: usize, col: usize) -> char {
    BARS[row][col]
}

/// Corner stroke keyed by two directions.
///
/// Equivalent to `bar(a.index(), b.index())`; total over all direction pairs.
pub const fn bar_between(a: Direction, b: Direction) -> char {
    bar(a.index(), b.index())
}
