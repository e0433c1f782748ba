//! End-to-end tests of the pruning search.
//!
//! The pruning search is cross-checked against brute force, and every skip
//! target is checked to never jump over a function having the property.

use mcf_rs::analyzer::{default_analyzers, Analyzer, Containment, InputRelevance, OutputOrder};
use mcf_rs::function::Function;
use mcf_rs::search::{is_feasible, Search};
use mcf_rs::sink::CollectSink;
use mcf_rs::types::{BitAddress, Word};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn pruned(num_inputs: Word, num_outputs: Word) -> Vec<Vec<Word>> {
    let mut sink = CollectSink::default();
    Search::new(num_inputs, num_outputs).unwrap().run(&mut sink).unwrap();
    sink.functions
}

fn exhaustive(num_inputs: Word, num_outputs: Word) -> Vec<Vec<Word>> {
    let mut sink = CollectSink::default();
    Search::new(num_inputs, num_outputs)
        .unwrap()
        .run_exhaustive(&mut sink)
        .unwrap();
    sink.functions
}

fn analyzers_by_index(f: &Function, order: [usize; 3]) -> Vec<Box<dyn Analyzer>> {
    let mut all: Vec<Option<Box<dyn Analyzer>>> = vec![
        Some(Box::new(OutputOrder::new(f))),
        Some(Box::new(Containment::new())),
        Some(Box::new(InputRelevance::new(f))),
    ];
    order.iter().map(|&i| all[i].take().unwrap()).collect()
}

fn random_function<R: Rng>(num_inputs: Word, num_outputs: Word, rng: &mut R) -> Function {
    let len = 1usize << num_inputs;
    let end_output = 1 << num_outputs;
    let mut image = vec![0; len];
    for code in image.iter_mut().skip(1) {
        *code = rng.random_range(0..end_output);
    }
    Function::from_image(num_inputs, num_outputs, image).unwrap()
}

// ─── Counts ────────────────────────────────────────────────────────────────────

#[test]
fn reference_counts() {
    for (n, m, expected) in [(2, 2, 3), (2, 3, 0), (3, 2, 195), (3, 3, 55), (3, 4, 2), (3, 5, 0)] {
        assert_eq!(pruned(n, m).len(), expected, "n = {}, m = {}", n, m);
    }
}

#[test]
fn pruning_matches_brute_force() {
    for (n, m) in [(1, 1), (1, 2), (2, 1), (2, 2), (2, 3), (3, 1), (3, 2), (3, 3)] {
        assert_eq!(pruned(n, m), exhaustive(n, m), "n = {}, m = {}", n, m);
    }
}

#[test]
fn infeasible_widths_have_no_functions() {
    for (n, m) in [(1, 2), (2, 3), (2, 4)] {
        assert!(!is_feasible(n, m));
        assert!(exhaustive(n, m).is_empty(), "n = {}, m = {}", n, m);
    }
}

#[test]
fn four_inputs() {
    assert_eq!(pruned(4, 1).len(), 32297);
    assert_eq!(pruned(4, 2).len(), 131667);
}

#[test]
fn every_result_has_every_property() {
    let f = Function::new(3, 3).unwrap();
    let analyzers = default_analyzers(&f);
    for image in pruned(3, 3) {
        let g = Function::from_image(3, 3, image).unwrap();
        for a in &analyzers {
            assert!(a.holds(&g), "{} fails {}", g, a.name());
        }
    }
}

// ─── Analyzer order ────────────────────────────────────────────────────────────

#[test]
fn analyzer_order_does_not_matter() {
    let expected = pruned(3, 3);
    for order in [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
        let f = Function::new(3, 3).unwrap();
        let analyzers = analyzers_by_index(&f, order);
        let mut sink = CollectSink::default();
        let stats = Search::with_analyzers(f, analyzers).run(&mut sink).unwrap();
        assert_eq!(sink.functions, expected, "order {:?}", order);
        assert_eq!(stats.found, 55);
    }
}

// ─── Soundness of skips ────────────────────────────────────────────────────────

/// Checks that no table strictly between `f` and the table `at` leads to has the property.
fn assert_skip_is_sound(a: &dyn Analyzer, f: &Function, at: BitAddress) {
    let mut target = f.clone();
    let exhausted = target.advance(at) >= target.len();

    let mut g = f.clone();
    loop {
        assert!(!a.holds(&g), "{} skipped {} (from {} to {})", a.name(), g, f, at);
        if g.advance(BitAddress::last(g.len())) >= g.len() {
            assert!(exhausted, "{}: {} overran the target of {}", a.name(), f, at);
            break;
        }
        if !exhausted && g == target {
            break;
        }
    }
}

#[test]
fn skips_are_sound() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for (n, m) in [(2, 2), (2, 3), (3, 2), (2, 4)] {
        for _ in 0..100 {
            let f = random_function(n, m, &mut rng);
            for mut a in analyzers_by_index(&f, [0, 1, 2]) {
                let at = a.analyze(&f, 0);
                if at.is_satisfied(f.len()) {
                    assert!(a.holds(&f), "{} accepted {}", a.name(), f);
                } else {
                    assert_skip_is_sound(a.as_ref(), &f, at);
                }
            }
        }
    }
}

#[test]
fn combined_skips_are_sound() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let f = random_function(3, 2, &mut rng);
        let mut analyzers = default_analyzers(&f);
        let mut at = BitAddress::satisfied(f.len());
        for a in analyzers.iter_mut() {
            at.assign_min(a.analyze(&f, 0));
        }
        if at.is_satisfied(f.len()) {
            continue;
        }
        let mut target = f.clone();
        let exhausted = target.advance(at) >= target.len();
        let mut g = f.clone();
        loop {
            assert!(
                !analyzers.iter().all(|a| a.holds(&g)),
                "skipped {} (from {} to {})",
                g,
                f,
                at
            );
            if g.advance(BitAddress::last(g.len())) >= g.len() || (!exhausted && g == target) {
                break;
            }
        }
    }
}

// ─── Freshness of incremental state ────────────────────────────────────────────

/// Wraps an analyzer and double-checks every "satisfied" from scratch.
struct Checked {
    inner: Box<dyn Analyzer>,
}

impl Analyzer for Checked {
    fn analyze(&mut self, f: &Function, first_changed: usize) -> BitAddress {
        let at = self.inner.analyze(f, first_changed);
        if at.is_satisfied(f.len()) {
            assert!(self.inner.holds(f), "{}: stale state accepted {}", self.inner.name(), f);
        }
        at
    }

    fn holds(&self, f: &Function) -> bool {
        self.inner.holds(f)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[test]
fn incremental_state_is_never_stale() {
    for (n, m) in [(2, 2), (3, 1), (3, 2), (3, 3), (3, 4)] {
        let f = Function::new(n, m).unwrap();
        let analyzers: Vec<Box<dyn Analyzer>> = default_analyzers(&f)
            .into_iter()
            .map(|inner| Box::new(Checked { inner }) as Box<dyn Analyzer>)
            .collect();
        let mut sink = CollectSink::default();
        Search::with_analyzers(f, analyzers).run(&mut sink).unwrap();
        assert_eq!(sink.functions, pruned(n, m));
    }
}
