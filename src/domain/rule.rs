//! Wolfram rule numbers and the transition tables derived from them.
//!
//! A rule number is an 8-bit integer. Bit `i` holds the next value of a
//! cell whose neighborhood, read as `left*4 + center*2 + right`, equals `i`.

use std::fmt;

use super::Cell;

/// Number of distinct 3-cell neighborhoods
pub const PATTERN_COUNT: usize = 8;

/// An elementary automaton rule in [0, 255].
/// Storing it as `u8` keeps every value in range by construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Rule(u8);

impl Rule {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Clamp an arbitrary integer (e.g. user input) into [0, 255]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, u8::MAX as i64) as u8)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Step to a neighbouring rule number, saturating at the ends
    pub fn offset(self, delta: i64) -> Self {
        Self::clamped(self.0 as i64 + delta)
    }

    /// Derive the 8-entry lookup table: output for pattern `i` is bit `i`.
    pub const fn transition_table(self) -> TransitionTable {
        let mut outputs = [Cell::Dead; PATTERN_COUNT];
        let mut i = 0;
        while i < PATTERN_COUNT {
            outputs[i] = Cell::from_bit(self.0 >> i);
            i += 1;
        }
        TransitionTable { outputs }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self(30)
    }
}

impl From<u8> for Rule {
    fn from(number: u8) -> Self {
        Self(number)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.0)
    }
}

/// Lookup table from a neighborhood pattern to the next center value
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TransitionTable {
    outputs: [Cell; PATTERN_COUNT],
}

impl TransitionTable {
    /// Pattern index of a neighborhood: `left*4 + center*2 + right`
    #[inline]
    pub const fn pattern_index(left: Cell, center: Cell, right: Cell) -> usize {
        ((left.bit() << 2) | (center.bit() << 1) | right.bit()) as usize
    }

    /// Neighborhood encoded by a pattern index, as (left, center, right)
    pub const fn pattern(index: usize) -> [Cell; 3] {
        debug_assert!(index < PATTERN_COUNT);
        let i = index as u8;
        [Cell::from_bit(i >> 2), Cell::from_bit(i >> 1), Cell::from_bit(i)]
    }

    /// Three-character binary form of a pattern, e.g. 5 -> "101"
    pub fn pattern_label(index: usize) -> String {
        format!("{:03b}", index & 0b111)
    }

    /// Next value of the center cell for the given neighborhood
    #[inline]
    pub fn next(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        self.outputs[Self::pattern_index(left, center, right)]
    }

    pub fn output(&self, index: usize) -> Cell {
        self.outputs[index]
    }

    /// Patterns in display order (111 first, 000 last).
    /// Ordering only matters for showing the rule; simulation ignores it.
    pub fn iter_descending(&self) -> impl Iterator<Item = (usize, [Cell; 3], Cell)> + '_ {
        (0..PATTERN_COUNT)
            .rev()
            .map(|i| (i, Self::pattern(i), self.outputs[i]))
    }
}

impl From<TransitionTable> for Rule {
    fn from(table: TransitionTable) -> Self {
        let number = table
            .outputs
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, cell)| acc | (cell.bit() << i));
        Rule(number)
    }
}
