use crate::types::Word;

/// Index of the pair `(i, j)`, `i < j < m`, in a flattened strict upper triangle.
///
/// ```text
/// (i, j) -> i * (2m - i - 1) / 2 + (j - i - 1)
/// ```
///
/// Pairs are laid out row by row: `(0,1), (0,2), ..., (0,m-1), (1,2), ...`.
#[inline]
pub fn triangle_index(i: usize, j: usize, m: usize) -> usize {
    debug_assert!(i < j && j < m);
    i * (2 * m - i - 1) / 2 + (j - i - 1)
}

/// Number of unordered pairs among `m` elements.
#[inline]
pub fn triangle_size(m: usize) -> usize {
    m * m.saturating_sub(1) / 2
}

/// Upper bound on how many output-pin pairs a single table entry can tell apart.
///
/// An entry splits the `m` pins into the ones that are on and the ones that
/// are off; only pairs across that split differ, and `k * (m - k)` peaks at
/// `k = m / 2`.
#[inline]
pub fn max_pairs_per_step(m: usize) -> usize {
    (m / 2) * ((m + 1) / 2)
}

/// Is `v` a power of two, or zero?
#[inline]
pub fn is_pot_or_zero(v: Word) -> bool {
    // https://graphics.stanford.edu/~seander/bithacks.html#DetermineIfPowerOf2
    v & v.wrapping_sub(1) == 0
}

/// Can `ones` distinct first activations fit into `runway` consecutive input patterns?
///
/// Two consecutive patterns `..0` and `..1` cannot introduce two first
/// activations between them without breaking metastability containment, so
/// at most `ceil(runway / 2)` fit.
#[inline]
pub fn can_fit(ones: usize, runway: usize) -> bool {
    ones <= (runway + 1) / 2
}
