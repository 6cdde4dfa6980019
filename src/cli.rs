//! Command line entry point of the demonstration.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sort_test_tools::patterns;
use tracing::{error, info};

use crate::harness::Harness;
use crate::{Algorithm, Error, Result, CLASSROOM_INPUT};

#[derive(Debug, Parser)]
#[command(
    name = "sort_emporium",
    version,
    about = "Runs the classroom sorts on one input and times each of them"
)]
pub struct Cli {
    /// Print every intermediate step of every sort.
    #[arg(short, long)]
    pub trace: bool,

    /// Ask on stdin whether to enable trace mode. Ignored together with --trace.
    #[arg(short, long)]
    pub ask: bool,

    /// Sort to run, may be repeated. Runs all of them by default.
    #[arg(long = "algorithm", value_enum)]
    pub algorithms: Vec<Algorithm>,

    /// Input to sort.
    #[arg(long, value_enum, default_value_t = Pattern::Fixed)]
    pub pattern: Pattern,

    /// Length of generated inputs, at most `i32::MAX`. The fixed input always has nine elements.
    #[arg(
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u32).range(0..=i32::MAX as i64)
    )]
    pub len: u32,
}

impl Cli {
    /// The algorithms to run, in order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    pub fn input(&self) -> Vec<i32> {
        self.pattern.generate(self.len as usize)
    }
}

/// Input shapes, generated with the seed from `OVERRIDE_SEED` when set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// `37 82 11 10 5 95 26 22 31`
    Fixed,
    Random,
    Ascending,
    Descending,
    AllEqual,
    PipeOrgan,
    /// Random values, ascending in runs of `len / 5`.
    Saw,
    /// Zipf distributed, many duplicates.
    Zipf,
}

impl Pattern {
    pub fn generate(self, len: usize) -> Vec<i32> {
        match self {
            Pattern::Fixed => CLASSROOM_INPUT.to_vec(),
            Pattern::Random => patterns::random(len),
            Pattern::Ascending => patterns::ascending(len),
            Pattern::Descending => patterns::descending(len),
            Pattern::AllEqual => patterns::all_equal(len),
            Pattern::PipeOrgan => patterns::pipe_organ(len),
            Pattern::Saw => patterns::saw_ascending(len, len / 5),
            Pattern::Zipf => patterns::random_zipf(len, 1.0),
        }
    }
}

/// Prompts on `out` and reads one line from `input`. Only an answer starting with `y` or `Y`
/// enables trace mode, end of input counts as no. The line is read as raw bytes, any encoding
/// is accepted.
pub fn ask_trace<R, W>(input: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(out, "Enable trace mode? (y/n): ")?;
    out.flush()?;

    let mut answer = Vec::new();
    input.read_until(b'\n', &mut answer).map_err(Error::Prompt)?;

    let first = answer.iter().find(|byte| !byte.is_ascii_whitespace());
    Ok(matches!(first, Some(b'y' | b'Y')))
}

/// Resolves the trace mode and runs the selected algorithms, reporting to `out`.
pub fn execute<R, W>(cli: &Cli, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let trace = if cli.trace {
        true
    } else if cli.ask {
        ask_trace(input, out)?
    } else {
        false
    };

    let data = cli.input();
    let algorithms = cli.algorithms();

    info!(
        pattern = ?cli.pattern,
        len = data.len(),
        algorithms = algorithms.len(),
        trace,
        "starting"
    );

    if cli.pattern != Pattern::Fixed {
        info!(seed = patterns::random_init_seed(), "generated input");
    }

    Harness::new(&mut *out, trace).run_all(&algorithms, &data)?;

    Ok(())
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match execute(&cli, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, source = ?std::error::Error::source(&err), "sort_emporium failed");
            ExitCode::FAILURE
        }
    }
}
