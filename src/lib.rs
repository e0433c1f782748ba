//! # mcf-rs: enumerating metastability-containing functions
//!
//! **`mcf-rs`** enumerates all Boolean functions `f: B^n -> B^m` that are safe
//! to use as multi-bit state encodings in circuits that may go metastable.
//!
//! ## What is searched for?
//!
//! A function is reported iff all of the following hold:
//!
//! - **Metastability containment**: flipping any single input pin changes at most one output pin.
//! - **Input relevance**: every input pin changes the output somewhere.
//! - **Output relevance, independence and order**: no output pin is constant, no two output pins are equal,
//!   and the output pins are sorted, so that every function is reported once and not once per permutation of its outputs.
//! - `f(0) == 0`.
//!
//! ## How?
//!
//! There are `(2^m)^(2^n - 1)` candidate tables, so visiting them one by one is hopeless beyond tiny widths.
//! Instead, the truth table is treated as one big counter (see [`Function`][crate::function::Function]),
//! and every property checker (see [`Analyzer`][crate::analyzer::Analyzer]) tells the
//! [`Search`][crate::search::Search] driver the most significant digit (and bit) that *must* change before the
//! property could hold. The driver jumps straight there, skipping everything in between.
//! Analyzers keep incremental state, so after a jump only the changed suffix of the table is rescanned.
//!
//! ## Basic Usage
//!
//! ```rust
//! use mcf_rs::search::Search;
//! use mcf_rs::sink::CollectSink;
//!
//! let mut sink = CollectSink::default();
//! let stats = Search::new(2, 2).unwrap().run(&mut sink).unwrap();
//!
//! assert_eq!(stats.found, 3);
//! assert_eq!(sink.functions[0], vec![0, 2, 1, 0]);
//! ```
//!
//! ## Core Components
//!
//! - **[`function`]**: The truth table counter.
//! - **[`analyzer`]**: The property checkers.
//! - **[`search`]**: The driver, combining the analyzers' skip targets.
//! - **[`sink`]**: Where the results go.

pub mod analyzer;
pub mod error;
pub mod function;
pub mod search;
pub mod sink;
pub mod types;
pub mod utils;
