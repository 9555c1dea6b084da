mod result;

use std::io::Write;

use clap::Parser;
use cutoff_core::asserts::CUTOFF_ASSERT_LEVEL_DEFINITION;
use cutoff_core::asserts::CUTOFF_ASSERT_MODERATE;
use cutoff_core::Cutoff;
use cutoff_core::CutoffOptions;
use cutoff_core::CutoffStrategy;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::CliResult;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Decides the sequence based on which the cutoffs are generated.
    ///
    /// - The "constant" approach hands every attempt the same cutoff
    /// - The "linear" approach increases the cutoff by the same amount every attempt
    /// - The "geometric" approach uses a geometrically increasing sequence
    /// - The "luby" approach uses a recursive sequence of the form 1, 1, 2, 1, 1, 2, 4, 1, 1, 2,
    ///   1, 1, 2, 4, 8, 1, 1, 2.... (see "Optimal speedup of Las Vegas algorithms - Luby et al.
    ///   (1993)")
    /// - The "random" approach draws cutoffs from a window which grows over time
    ///
    /// To be used in combination with "--base".
    #[arg(long, value_enum, default_value_t, verbatim_doc_comment)]
    strategy: CutoffStrategy,

    /// The base of the sequence.
    /// - In the case of the "constant" sequence this is the cutoff of every attempt
    /// - For the "linear" approach this is the amount by which the cutoff grows
    /// - For the "geometric" approach this is the starting value of the sequence
    /// - For the "luby" approach, the sequence is multiplied by this value
    ///
    /// Possible values: u64
    #[arg(long = "base", default_value_t = 100, verbatim_doc_comment)]
    base: u64,

    /// The coefficient in the geometric sequence `x_i = x_{i-1} * "--geometric-factor"` where
    /// `x_1 = "--base"`. Used only if "--strategy" is "geometric".
    ///
    /// Possible values: f64
    #[arg(long = "geometric-factor", default_value_t = 1.5, verbatim_doc_comment)]
    geometric_factor: f64,

    /// The seed of the "random" sequence.
    ///
    /// Possible values: u64
    #[arg(long = "seed", default_value_t = 42, verbatim_doc_comment)]
    seed: u64,

    /// The smallest cutoff of the "random" sequence.
    ///
    /// Possible values: u64
    #[arg(long = "random-min", default_value_t = 100, verbatim_doc_comment)]
    random_min: u64,

    /// The initial largest cutoff of the "random" sequence.
    ///
    /// Possible values: u64
    #[arg(long = "random-max", default_value_t = 1000, verbatim_doc_comment)]
    random_max: u64,

    /// The number of values in the window of the "random" sequence; after this many draws the
    /// window grows. 0 means "--random-max" minus "--random-min".
    ///
    /// Possible values: u64
    #[arg(long = "random-window", default_value_t = 10, verbatim_doc_comment)]
    random_window: u64,

    /// The number of cutoffs to print.
    ///
    /// Possible values: usize
    #[arg(short = 'n', long = "count", default_value_t = 20, verbatim_doc_comment)]
    count: usize,

    /// Enables log message output from the generators.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,
}

impl Args {
    fn cutoff_options(&self) -> CutoffOptions {
        CutoffOptions {
            strategy: self.strategy,
            base: self.base,
            geometric_factor: self.geometric_factor,
            seed: self.seed,
            random_min: self.random_min,
            random_max: self.random_max,
            random_window: self.random_window,
        }
    }
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose);

    if CUTOFF_ASSERT_LEVEL_DEFINITION >= CUTOFF_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the cutoff assert level is set to {CUTOFF_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active which may result in performance degradation."
        );
    }

    let mut cutoff = args.cutoff_options().create()?;
    info!("Printing {} cutoffs of the {} sequence", args.count, args.strategy);

    let mut stdout = std::io::stdout().lock();
    for _ in 0..args.count {
        writeln!(stdout, "{}", cutoff.next())?;
    }
    stdout.flush()?;

    Ok(())
}
