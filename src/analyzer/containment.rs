//! Metastability containment.
//!
//! A function is metastability-containing if flipping any single input pin
//! changes at most one output pin, for every input pattern.

use log::trace;

use crate::analyzer::Analyzer;
use crate::function::Function;
use crate::types::{pin2mask, BitAddress, Word};
use crate::utils::is_pot_or_zero;

/// Checks that every single-pin input change flips at most one output pin.
///
/// Stateless: each call rescans from the first changed place.
#[derive(Debug, Default, Copy, Clone)]
pub struct Containment;

impl Containment {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for Containment {
    fn analyze(&mut self, f: &Function, first_changed: usize) -> BitAddress {
        for i in first_changed..f.len() {
            let output = f[i];
            let mut max_tz_plus_one: Word = 0;
            for in_pin in (0..f.num_inputs()).rev() {
                // Affected bits if in_pin is metastable
                let change = output ^ f[i & !(pin2mask(in_pin) as usize)];
                if is_pot_or_zero(change) {
                    continue;
                }
                // At least two output pins change. Every fix has to touch a bit
                // at or above the lowest of them, for each offending input pin.
                max_tz_plus_one = max_tz_plus_one.max(change.trailing_zeros() + 1);
            }
            if max_tz_plus_one > 0 {
                let at = BitAddress::new(i, max_tz_plus_one - 1);
                trace!("is_msc: violated at {}", at);
                return at;
            }
        }
        BitAddress::satisfied(f.len())
    }

    fn holds(&self, f: &Function) -> bool {
        (0..f.len()).all(|i| {
            (0..f.num_inputs()).all(|in_pin| {
                let neighbor = i ^ pin2mask(in_pin) as usize;
                (f[i] ^ f[neighbor]).count_ones() <= 1
            })
        })
    }

    fn name(&self) -> &'static str {
        "is_msc"
    }
}
