//! Input relevance.
//!
//! An input pin is relevant iff there are two inputs `x`, `y` only differing
//! on the state of that pin, such that `f(x) != f(y)`.

use log::trace;

use crate::analyzer::Analyzer;
use crate::function::Function;
use crate::types::{pin2mask, BitAddress};

/// Checks that every input pin is relevant.
#[derive(Debug, Clone)]
pub struct InputRelevance {
    /// On which input pattern was each input pin first relevant? (`len` if not yet.)
    first_relevant: Vec<usize>,
    /// How many input pins are known to be relevant?
    relevant_inputs: usize,
}

impl InputRelevance {
    pub fn new(f: &Function) -> Self {
        Self {
            first_relevant: vec![f.len(); f.num_inputs() as usize],
            relevant_inputs: 0,
        }
    }

    /// Number of input pins currently known to be relevant.
    pub fn relevant_inputs(&self) -> usize {
        self.relevant_inputs
    }

    /// Forgets everything learned at or after `first_changed`.
    fn unwind(&mut self, len: usize, first_changed: usize) {
        for first in self.first_relevant.iter_mut() {
            if *first != len && *first >= first_changed {
                *first = len;
                self.relevant_inputs -= 1;
            }
        }
    }
}

impl Analyzer for InputRelevance {
    fn analyze(&mut self, f: &Function, first_changed: usize) -> BitAddress {
        let len = f.len();
        let num_inputs = self.first_relevant.len();
        assert_eq!(num_inputs, f.num_inputs() as usize);

        self.unwind(len, first_changed);
        if self.relevant_inputs == num_inputs {
            trace!("in_rel: still satisfied after unwinding to {}", first_changed);
            return BitAddress::satisfied(len);
        }

        for i in first_changed..len {
            let output = f[i];
            for in_pin in 0..num_inputs {
                let first = self.first_relevant[in_pin];
                debug_assert_ne!(first, i);
                if first < i {
                    continue;
                }
                let mask = pin2mask(in_pin as u32) as usize;
                if i & mask == 0 {
                    continue;
                }
                if output != f[i & !mask] {
                    self.first_relevant[in_pin] = i;
                    self.relevant_inputs += 1;
                    if self.relevant_inputs == num_inputs {
                        return BitAddress::satisfied(len);
                    }
                }
            }
        }

        // There is an irrelevant input. Any change of the last digit may fix
        // that, so the smallest increment is all we can ask for.
        assert!(self.relevant_inputs < num_inputs, "in_rel: scan of {} ended with all inputs relevant", f);
        BitAddress::last(len)
    }

    fn holds(&self, f: &Function) -> bool {
        (0..f.num_inputs()).all(|in_pin| {
            let mask = pin2mask(in_pin) as usize;
            (0..f.len()).any(|i| f[i] != f[i ^ mask])
        })
    }

    fn name(&self) -> &'static str {
        "in_rel"
    }
}
