//! Basic types shared by the counter, the analyzers and the search driver.
//!
//! Input patterns, output codes and bit positions all live in one unsigned
//! integer type, [`Word`]. The widths are bounded by [`MAX_BITS`], which keeps
//! `pin2mask(MAX_BITS) + pin2mask(MAX_BITS)` representable in a [`Word`].
use std::fmt;

/// Integer type for input patterns, output codes and bit positions.
pub type Word = u32;

/// Largest supported number of input or output pins.
///
/// The search takes up to `O(MAX_BITS^MAX_BITS)` time, so this is plenty.
pub const MAX_BITS: Word = 20;

const _: () = assert!(Word::BITS >= MAX_BITS + 1);

/// Returns the mask with only `pin` set.
#[inline]
pub fn pin2mask(pin: Word) -> Word {
    debug_assert!(pin <= MAX_BITS);
    1 << pin
}

/// A skip target: the position in the truth table that must change before a
/// property could possibly hold.
///
/// `place` is the index into the image (the lowest input pattern that upset
/// an analyzer), `bit` is the most significant output bit inside that digit
/// that has to change. A `place` equal to the table length means "satisfied",
/// in which case `bit` carries no meaning.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitAddress {
    pub place: usize,
    pub bit: Word,
}

impl BitAddress {
    /// Creates a skip target at the given place and bit.
    pub fn new(place: usize, bit: Word) -> Self {
        Self { place, bit }
    }

    /// The "satisfied" sentinel for a table of length `len`.
    pub fn satisfied(len: usize) -> Self {
        Self { place: len, bit: 0 }
    }

    /// The smallest possible step in a table of length `len`.
    pub fn last(len: usize) -> Self {
        debug_assert!(len > 0);
        Self { place: len - 1, bit: 0 }
    }

    /// Returns true if this is the "satisfied" sentinel for a table of length `len`.
    pub fn is_satisfied(self, len: usize) -> bool {
        self.place >= len
    }

    /// Keeps the more conservative of two skip targets.
    ///
    /// The smaller place wins; on a tie, the smaller bit wins.
    pub fn assign_min(&mut self, other: BitAddress) {
        if other.place < self.place {
            *self = other;
        } else if other.place == self.place {
            self.bit = self.bit.min(other.bit);
        }
    }

    /// Non-mutating version of [`assign_min`][BitAddress::assign_min].
    pub fn min(mut self, other: BitAddress) -> Self {
        self.assign_min(other);
        self
    }
}

impl fmt::Display for BitAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.place, self.bit)
    }
}
