use std::io;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{debug, info};

use mcf_rs::search::{Search, SearchConfig, Sink};
use mcf_rs::sink::{CountSink, PrintSink};
use mcf_rs::types::MAX_BITS;

/// Enumerates all metastability-containing functions `B^n -> B^m`.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Number of binary inputs.
    #[arg(value_name = "INT", default_value = "4")]
    num_inputs: u32,

    /// Number of binary outputs.
    #[arg(value_name = "INT", default_value = "7")]
    num_outputs: u32,

    /// Report progress every this many steps (0 to disable).
    #[arg(long, value_name = "INT", default_value = "5000000")]
    progress_step: u64,

    /// Stop after finding this many functions.
    #[arg(long, value_name = "INT")]
    limit: Option<u64>,

    /// Only count the functions, do not print them.
    #[arg(long)]
    count_only: bool,

    /// Check every single table instead of pruning (only sensible for small widths).
    #[arg(long)]
    exhaustive: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Log every step of the search (very slow).
    #[arg(long)]
    trace: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.trace {
        simplelog::LevelFilter::Trace
    } else if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let search = match Search::new(args.num_inputs, args.num_outputs) {
        Ok(search) => search,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(
                ErrorKind::ValueValidation,
                format!("{} (supported widths are 1 to {})", e, MAX_BITS),
            )
            .exit();
        }
    };
    let search = search.with_config(SearchConfig {
        progress_step: args.progress_step,
        limit: args.limit,
    });

    info!("n_in = {}, n_out = {}", args.num_inputs, args.num_outputs);
    let space_bits = search.function().search_space_bits();
    info!("Search space: 2^{} tables", space_bits);
    debug!("Search space: {} tables", search.function().search_space_size());

    let stdout = io::stdout();
    let mut printer;
    let mut counter;
    let sink: &mut dyn Sink = if args.count_only {
        counter = CountSink::default();
        &mut counter
    } else {
        printer = PrintSink::new(io::BufWriter::new(stdout.lock()));
        &mut printer
    };

    let stats = if args.exhaustive {
        search.run_exhaustive(sink)?
    } else {
        search.run(sink)?
    };

    info!("Visited {} of 2^{} tables", stats.steps, space_bits);
    if args.count_only {
        println!("{}", stats.found);
    }

    let time_total = time_total.elapsed();
    info!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
