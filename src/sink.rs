//! Ready-made [`Sink`]s.

use std::io::{self, Write};

use crate::function::Function;
use crate::search::{SearchStats, Sink};
use crate::types::Word;

/// Writes every function as `=> fn(B^n -> B^m)[..]` on its own line.
pub struct PrintSink<W: Write> {
    out: W,
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for PrintSink<W> {
    fn emit(&mut self, f: &Function) -> io::Result<()> {
        writeln!(self.out, "=> {}", f)
    }

    fn finish(&mut self, _stats: &SearchStats) -> io::Result<()> {
        self.out.flush()
    }
}

/// Keeps the images of all functions in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectSink {
    pub functions: Vec<Vec<Word>>,
}

impl Sink for CollectSink {
    fn emit(&mut self, f: &Function) -> io::Result<()> {
        self.functions.push(f.image().to_vec());
        Ok(())
    }
}

/// Only counts.
#[derive(Debug, Default, Copy, Clone)]
pub struct CountSink {
    pub count: u64,
}

impl Sink for CountSink {
    fn emit(&mut self, _f: &Function) -> io::Result<()> {
        self.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::search::Search;

    #[test]
    fn test_print_sink() {
        let mut sink = PrintSink::new(Vec::new());
        Search::new(2, 2).unwrap().run(&mut sink).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "=> fn(B^2 -> B^2)[0, 2, 1, 0]\n=> fn(B^2 -> B^2)[0, 2, 1, 3]\n=> fn(B^2 -> B^2)[0, 2, 2, 3]\n"
        );
    }

    #[test]
    fn test_count_sink() {
        let mut sink = CountSink::default();
        let stats = Search::new(3, 3).unwrap().run(&mut sink).unwrap();
        assert_eq!(sink.count, 55);
        assert_eq!(stats.found, 55);
    }
}
