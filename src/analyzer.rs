//! Incremental property checkers.
//!
//! Each analyzer represents one criterion a function needs to fulfill, and
//! may keep whatever state it needs to avoid rescanning the whole table on
//! every step of the search.
//!
//! Every analyzer's skip target is sound on its own, so the driver may
//! combine any subset of them. The static feasibility check in
//! [`search`][crate::search] is the exception: it relies on [`Containment`].

use crate::function::Function;
use crate::types::BitAddress;

pub mod containment;
pub mod ordering;
pub mod relevance;

pub use containment::Containment;
pub use ordering::OutputOrder;
pub use relevance::InputRelevance;

/// A property of a function, checked incrementally.
pub trait Analyzer {
    /// Analyzes `f`, given the most significant place that changed since the
    /// previous call (or `0` if there was no previous call, which is the same
    /// as "everything changed").
    ///
    /// Returns the most significant place and bit that have to change before
    /// the property could hold, or [`BitAddress::satisfied`] if it already holds
    /// for the whole table. The target must never skip a table that has the
    /// property.
    ///
    /// Callers must not report a `first_changed` beyond the place of the
    /// previous non-satisfied target: analyzers stop scanning there.
    fn analyze(&mut self, f: &Function, first_changed: usize) -> BitAddress;

    /// Checks the property from scratch, ignoring any incremental state.
    fn holds(&self, f: &Function) -> bool;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Creates the standard set of analyzers for functions shaped like `f`.
///
/// The order is ordering, containment, relevance. The combined skip target
/// does not depend on it.
pub fn default_analyzers(f: &Function) -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(OutputOrder::new(f)),
        Box::new(Containment::new()),
        Box::new(InputRelevance::new(f)),
    ]
}

/// Checks all properties from scratch.
pub fn holds_all(analyzers: &[Box<dyn Analyzer>], f: &Function) -> bool {
    analyzers.iter().all(|a| a.holds(f))
}
