//! The truth table of a function `B^n -> B^m`, doubling as a big counter.
//!
//! The image is read as one large mixed-radix number: `image[0]` is the most
//! significant digit and `image[len - 1]` the least significant one, each
//! digit ranging over `[0, 2^m)`. Enumerating all functions is counting this
//! number up; skipping a part of the search space is counting up at a more
//! significant place (or bit) than the last one.
//!
//! Only functions mapping the all-zero input to the all-zero output are
//! considered, so `image[0]` is never touched and always zero.

use std::fmt;
use std::ops::Index;

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::types::{pin2mask, BitAddress, Word, MAX_BITS};

/// A function `B^num_inputs -> B^num_outputs` given by its image.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Function {
    num_inputs: Word,
    num_outputs: Word,
    end_output: Word,
    image: Vec<Word>,
}

fn check_width(name: &'static str, value: Word) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidArgument(format!("{} must be positive", name)));
    }
    if value > MAX_BITS {
        return Err(Error::OutOfRange { name, value });
    }
    Ok(())
}

impl Function {
    /// Creates the all-zero function `B^num_inputs -> B^num_outputs`.
    ///
    /// Fails with [`Error::InvalidArgument`] if a width is zero,
    /// and with [`Error::OutOfRange`] if it exceeds [`MAX_BITS`].
    pub fn new(num_inputs: Word, num_outputs: Word) -> Result<Self> {
        check_width("num_inputs", num_inputs)?;
        check_width("num_outputs", num_outputs)?;
        let len = pin2mask(num_inputs) as usize;
        Ok(Self {
            num_inputs,
            num_outputs,
            end_output: pin2mask(num_outputs),
            image: vec![0; len],
        })
    }

    /// Creates a function from an explicit image.
    ///
    /// The image must have `2^num_inputs` entries, start with zero, and every
    /// entry must fit into `num_outputs` bits.
    pub fn from_image(num_inputs: Word, num_outputs: Word, image: Vec<Word>) -> Result<Self> {
        let mut f = Self::new(num_inputs, num_outputs)?;
        if image.len() != f.len() {
            return Err(Error::InvalidArgument(format!(
                "image has {} entries, expected {}",
                image.len(),
                f.len()
            )));
        }
        if image[0] != 0 {
            return Err(Error::InvalidArgument("image[0] must be zero".to_string()));
        }
        if let Some(&code) = image.iter().find(|&&code| code >= f.end_output) {
            return Err(Error::InvalidArgument(format!(
                "output code {:#x} does not fit into {} bits",
                code, num_outputs
            )));
        }
        f.image = image;
        Ok(f)
    }

    /// Number of input pins.
    pub fn num_inputs(&self) -> Word {
        self.num_inputs
    }

    /// Number of output pins.
    pub fn num_outputs(&self) -> Word {
        self.num_outputs
    }

    /// Number of input patterns, i.e. `2^num_inputs`. Also the "exhausted" sentinel.
    pub fn len(&self) -> usize {
        self.image.len()
    }

    /// Always false: a function has at least two input patterns.
    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }

    /// Number of output codes, i.e. `2^num_outputs`.
    pub fn end_output(&self) -> Word {
        self.end_output
    }

    /// The output codes, in input-pattern order.
    pub fn image(&self) -> &[Word] {
        &self.image
    }

    /// Number of tables the unpruned search would visit: `(2^m)^(2^n - 1)`.
    pub fn search_space_size(&self) -> BigUint {
        BigUint::from(1u32) << self.search_space_bits()
    }

    /// Base 2 logarithm of [`search_space_size`][Self::search_space_size].
    pub fn search_space_bits(&self) -> usize {
        self.num_outputs as usize * (self.len() - 1)
    }

    /// Counts up at the given place and bit.
    ///
    /// All digits after `at.place` are reset to zero. The digit at `at.place`
    /// is rounded down to a multiple of `2^at.bit` and increased by `2^at.bit`;
    /// on overflow it wraps to zero and the carry moves to the next more
    /// significant place. `image[0]` is never changed.
    ///
    /// Returns the most significant place that changed, which is `at.place`
    /// or a smaller index, or `len()` if the whole counter wrapped around.
    pub fn advance(&mut self, at: BitAddress) -> usize {
        assert!(
            at.place < self.len(),
            "advance: place {} out of bounds for table of length {}",
            at.place,
            self.len()
        );
        assert!(at.bit < self.num_outputs, "advance: bit {} out of range", at.bit);

        // Reset digits at less significant places
        for digit in &mut self.image[at.place + 1..] {
            *digit = 0;
        }

        let mut increment = pin2mask(at.bit);
        if at.place >= 1 {
            self.image[at.place] &= !(increment - 1);
        }
        // Never change image[0]
        for i in (1..=at.place).rev() {
            self.image[i] += increment;
            increment = 1;
            if self.image[i] < self.end_output {
                return i;
            }
            self.image[i] = 0;
        }
        self.len()
    }
}

impl Index<usize> for Function {
    type Output = Word;

    fn index(&self, input: usize) -> &Self::Output {
        &self.image[input]
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(B^{} -> B^{})[", self.num_inputs, self.num_outputs)?;
        // Always output the full hex code, including leading zeros
        let width = (self.num_outputs as usize + 3) / 4;
        for (i, code) in self.image.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:0width$x}", code, width = width)?;
        }
        write!(f, "]")
    }
}
