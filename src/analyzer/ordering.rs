//! Output relevance, independence and ordering.
//!
//! Yes, that's three properties in one analyzer, because all three are
//! really the same thing:
//!
//! 1. **Relevance.** No output pin is constant. Since `f(0) == 0`, a constant
//!    pin is a pin that never turns on.
//! 2. **Independence.** Every two output pins differ on some input. This
//!    removes functions with redundant output pins.
//! 3. **Order.** Read each output pin's column of the truth table as a bit
//!    string, input pattern 0 first. The columns must be strictly increasing
//!    from pin 0 to pin `m - 1`: at the first input where pins `a < b` differ,
//!    `b` must be on and `a` off. This leaves exactly one representative of
//!    every class of functions that only differ by a permutation of output pins.
//!
//! A strict order implies independence, and every pin except pin 0 is above
//! some other pin and thus turns on somewhere. So it suffices to track the
//! first difference of every pair, plus the first activation of pin 0.

use log::trace;

use crate::analyzer::Analyzer;
use crate::function::Function;
use crate::types::{pin2mask, BitAddress, Word};
use crate::utils::{max_pairs_per_step, triangle_index, triangle_size};

/// Checks that output pins are non-constant, pairwise distinct and ordered.
#[derive(Debug, Clone)]
pub struct OutputOrder {
    num_outputs: usize,
    /// Table length, doubling as the "not seen yet" marker.
    len: usize,
    /// For each pair `(a, b)`, `a < b`, the input pattern where the two pins
    /// first differ. Flattened upper triangle, see [`triangle_index`].
    first_difference: Vec<usize>,
    /// Number of pairs with a known first difference.
    differences: usize,
    /// Input pattern where pin 0 first turns on.
    first_one: usize,
}

impl OutputOrder {
    pub fn new(f: &Function) -> Self {
        let num_outputs = f.num_outputs() as usize;
        let len = f.len();
        Self {
            num_outputs,
            len,
            first_difference: vec![len; triangle_size(num_outputs)],
            differences: 0,
            first_one: len,
        }
    }

    /// Number of output pin pairs.
    pub fn num_pairs(&self) -> usize {
        self.first_difference.len()
    }

    /// Number of pairs whose order is already established.
    pub fn differences(&self) -> usize {
        self.differences
    }

    /// Input pattern where the pins `a < b` first differ, if known.
    pub fn first_difference(&self, a: usize, b: usize) -> Option<usize> {
        let first = self.first_difference[triangle_index(a, b, self.num_outputs)];
        (first != self.len).then_some(first)
    }

    /// Input pattern where pin 0 first turns on, if known.
    pub fn first_one(&self) -> Option<usize> {
        (self.first_one != self.len).then_some(self.first_one)
    }

    fn is_complete(&self) -> bool {
        self.differences == self.num_pairs() && self.first_one != self.len
    }

    /// Forgets everything learned at or after `first_changed`.
    fn unwind(&mut self, first_changed: usize) {
        let len = self.len;
        if self.differences > 0 {
            for first in self.first_difference.iter_mut() {
                if *first != len && *first >= first_changed {
                    *first = len;
                    self.differences -= 1;
                }
            }
        }
        if self.first_one != len && self.first_one >= first_changed {
            self.first_one = len;
        }
    }

    /// Records every pair that first differs at input `i`.
    ///
    /// Returns the violation if some pair is out of order. Each out-of-order
    /// pair `(a, b)` stays so while bits `a..` are kept, so the highest such
    /// `a` is reported.
    fn wind(&mut self, i: usize, output: Word) -> Option<BitAddress> {
        let m = self.num_outputs;
        let mut violation = None;
        let mut k = 0;
        for a in 0..m {
            let on_a = output & pin2mask(a as Word) != 0;
            for b in (a + 1)..m {
                debug_assert_eq!(k, triangle_index(a, b, m));
                let first = &mut self.first_difference[k];
                k += 1;
                if *first != self.len {
                    continue;
                }
                let on_b = output & pin2mask(b as Word) != 0;
                if on_a == on_b {
                    continue;
                }
                if on_a {
                    // The lower pin turned on first
                    violation = Some(a as Word);
                    continue;
                }
                *first = i;
                self.differences += 1;
            }
        }
        violation.map(|a| BitAddress::new(i, a))
    }

    /// Where to jump if the whole table was scanned without completing.
    fn shortfall(&self, f: &Function) -> BitAddress {
        let missing = self.num_pairs() - self.differences;
        if missing == 0 {
            // Everything is ordered, only pin 0 never turned on.
            // Only the very last digit could still fix that.
            assert_eq!(self.first_one, self.len, "out_ord: scan of {} ended complete, but not satisfied", f);
            return BitAddress::last(self.len);
        }
        // Each further digit can establish at most this many pairs, so at
        // least `steps` digits at the end of the table must change.
        let per_step = max_pairs_per_step(self.num_outputs);
        let steps = (missing + per_step - 1) / per_step;
        BitAddress::new(self.len.saturating_sub(steps), 0)
    }
}

impl Analyzer for OutputOrder {
    fn analyze(&mut self, f: &Function, first_changed: usize) -> BitAddress {
        assert_eq!(self.len, f.len());

        self.unwind(first_changed);
        if self.is_complete() {
            trace!("out_ord: still satisfied after unwinding to {}", first_changed);
            return BitAddress::satisfied(self.len);
        }

        for i in first_changed..self.len {
            let output = f[i];
            if self.first_one == self.len && output & 1 != 0 {
                self.first_one = i;
            }
            if self.differences < self.num_pairs() {
                if let Some(at) = self.wind(i, output) {
                    trace!("out_ord: pins out of order at {}", at);
                    return at;
                }
            }
            if self.is_complete() {
                return BitAddress::satisfied(self.len);
            }
        }

        let at = self.shortfall(f);
        trace!(
            "out_ord: {} of {} pairs ordered, skipping to {}",
            self.differences,
            self.num_pairs(),
            at
        );
        at
    }

    fn holds(&self, f: &Function) -> bool {
        let column = |pin: Word| f.image().iter().map(move |&code| code & pin2mask(pin) != 0);
        let ordered = (1..f.num_outputs()).all(|pin| column(pin - 1).lt(column(pin)));
        ordered && column(0).any(|on| on)
    }

    fn name(&self) -> &'static str {
        "out_ord"
    }
}
