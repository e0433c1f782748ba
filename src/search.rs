//! The search driver.
//!
//! The driver walks the truth table counter of a [`Function`] and asks every
//! [`Analyzer`] where the next candidate could possibly be. The most
//! conservative (most significant) proposal wins, and the counter jumps
//! straight there:
//!
//! ```text
//!            ┌───────────────────────────────┐
//!            │            Function           │
//!            │   [0, c1, c2, ..., c_{2^n-1}] │
//!            └───────┬───────────────▲───────┘
//!          image     │               │  advance(place, bit)
//!                    ▼               │
//!   ┌──────────┬──────────┬──────────┐   min    ┌────────────┐
//!   │ out_ord  │  is_msc  │  in_rel  │ ───────▶ │ BitAddress │
//!   └──────────┴──────────┴──────────┘          └────────────┘
//! ```
//!
//! When every analyzer is satisfied, the function is handed to the [`Sink`]
//! and the counter takes the smallest possible step.

use std::io;

use log::{debug, info, trace, warn};

use crate::analyzer::{default_analyzers, holds_all, Analyzer};
use crate::error::Result;
use crate::function::Function;
use crate::types::{BitAddress, Word};
use crate::utils::can_fit;

/// Receiver of the search results.
pub trait Sink {
    /// Called for every function having all properties.
    fn emit(&mut self, f: &Function) -> io::Result<()>;

    /// Called periodically with the current table and counters.
    fn progress(&mut self, f: &Function, stats: &SearchStats) -> io::Result<()> {
        info!("#_ {}", f);
        info!("#_ {} fns in {} steps.", stats.found, stats.steps);
        Ok(())
    }

    /// Called once when the search is over.
    fn finish(&mut self, _stats: &SearchStats) -> io::Result<()> {
        Ok(())
    }
}

/// Knobs of a single search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Report progress every this many steps. Zero disables progress reports.
    pub progress_step: u64,
    /// Stop after finding this many functions.
    pub limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_step: 5_000_000,
            limit: None,
        }
    }
}

/// Counters of a search run.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SearchStats {
    /// Number of tables visited.
    pub steps: u64,
    /// Number of functions handed to the sink.
    pub found: u64,
    /// False if the search was pruned entirely by the static feasibility check.
    pub feasible: bool,
}

/// Can `num_outputs` ordered output pins possibly fit into `2^num_inputs` input patterns?
pub fn is_feasible(num_inputs: Word, num_outputs: Word) -> bool {
    can_fit(num_outputs as usize, 1usize << num_inputs)
}

/// A search over all functions `B^n -> B^m` with a fixed set of properties.
pub struct Search {
    function: Function,
    analyzers: Vec<Box<dyn Analyzer>>,
    config: SearchConfig,
}

impl Search {
    /// Creates a search with the standard analyzers and the default config.
    pub fn new(num_inputs: Word, num_outputs: Word) -> Result<Self> {
        let function = Function::new(num_inputs, num_outputs)?;
        let analyzers = default_analyzers(&function);
        Ok(Self::with_analyzers(function, analyzers))
    }

    /// Creates a search starting at `function` with the given analyzers.
    pub fn with_analyzers(function: Function, analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        Self {
            function,
            analyzers,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The current table.
    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Names of the analyzers, in query order.
    pub fn analyzer_names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    fn limit_reached(&self, stats: &SearchStats) -> bool {
        self.config.limit.is_some_and(|limit| stats.found >= limit)
    }

    fn report_progress<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        stats: &SearchStats,
        watchdog: &mut u64,
    ) -> io::Result<()> {
        let step = self.config.progress_step;
        if step > 0 && *watchdog >= step {
            sink.progress(&self.function, stats)?;
            *watchdog -= step;
        }
        Ok(())
    }

    /// Hands all (remaining) functions having every property to `sink`.
    pub fn run<S: Sink + ?Sized>(mut self, sink: &mut S) -> io::Result<SearchStats> {
        let len = self.function.len();
        debug!(
            "Searching for {} with {} properties: {:?}",
            self.function,
            self.analyzers.len(),
            self.analyzer_names()
        );

        let mut stats = SearchStats {
            feasible: is_feasible(self.function.num_inputs(), self.function.num_outputs()),
            ..SearchStats::default()
        };
        if !stats.feasible {
            warn!("Impossibly many output pins. Pruning whole search right away.");
            info!("Done searching. Found 0 fns in 0 steps.");
            sink.finish(&stats)?;
            return Ok(stats);
        }

        let mut watchdog = 0;
        let mut last_change = 0;
        loop {
            stats.steps += 1;
            watchdog += 1;
            trace!("#? {}", self.function);

            let mut next_change = BitAddress::satisfied(len);
            for a in self.analyzers.iter_mut() {
                let proposed = a.analyze(&self.function, last_change);
                trace!("{}: {}", a.name(), proposed);
                next_change.assign_min(proposed);
            }

            if next_change.is_satisfied(len) {
                sink.emit(&self.function)?;
                stats.found += 1;
                if self.limit_reached(&stats) {
                    debug!("Limit of {} fns reached", stats.found);
                    break;
                }
                next_change = BitAddress::last(len);
            } else {
                self.report_progress(sink, &stats, &mut watchdog)?;
            }

            last_change = self.function.advance(next_change);
            if last_change >= len {
                break;
            }
        }

        info!("Done searching. Found {} fns in {} steps.", stats.found, stats.steps);
        sink.finish(&stats)?;
        Ok(stats)
    }

    /// Brute force: visits every single table and checks all properties from scratch.
    ///
    /// Finds the same functions as [`run`][Search::run], in the same order, and
    /// exists to cross-check it on small widths.
    pub fn run_exhaustive<S: Sink + ?Sized>(mut self, sink: &mut S) -> io::Result<SearchStats> {
        let len = self.function.len();
        debug!("Exhaustively searching {}", self.function);

        let mut stats = SearchStats {
            feasible: true,
            ..SearchStats::default()
        };
        let mut watchdog = 0;
        loop {
            stats.steps += 1;
            watchdog += 1;
            if holds_all(&self.analyzers, &self.function) {
                sink.emit(&self.function)?;
                stats.found += 1;
                if self.limit_reached(&stats) {
                    break;
                }
            } else {
                self.report_progress(sink, &stats, &mut watchdog)?;
            }
            if self.function.advance(BitAddress::last(len)) >= len {
                break;
            }
        }

        info!("Done searching. Found {} fns in {} steps.", stats.found, stats.steps);
        sink.finish(&stats)?;
        Ok(stats)
    }
}
