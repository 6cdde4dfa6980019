//! Times one sort at a time and reports its input, output and duration.

use std::fmt::Display;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::printer::write_sequence;
use crate::trace::Printer;
use crate::{Algorithm, Result};

/// Outcome of a single harness run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<T> {
    pub label: &'static str,
    pub input: Vec<T>,
    pub output: Vec<T>,
    pub elapsed: Duration,
}

impl<T> Record<T> {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs sorts against independent copies of an input and writes a report for each to `out`.
///
/// With `trace` enabled the step narration is written into the same sink, between the original
/// and the sorted array, and its cost is part of the measured time.
pub struct Harness<W> {
    out: W,
    trace: bool,
}

impl<W: Write> Harness<W> {
    pub fn new(out: W, trace: bool) -> Self {
        Self { out, trace }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Sorts a copy of `input` with `algorithm`. `input` itself is left untouched so every
    /// algorithm starts from the same data.
    pub fn run<T>(&mut self, algorithm: Algorithm, input: &[T]) -> Result<Record<T>>
    where
        T: Ord + Clone + Display,
    {
        let label = algorithm.label();
        let mut arr = input.to_vec();

        writeln!(self.out, "{label}:")?;
        write!(self.out, "Original array: ")?;
        write_sequence(&mut self.out, &arr)?;

        debug!(algorithm = label, len = arr.len(), trace = self.trace, "running sort");

        let start = Instant::now();
        let printer = if self.trace {
            let mut printer = Printer::new(&mut self.out);
            algorithm.sort_observed(&mut arr, &mut printer);
            Some(printer)
        } else {
            algorithm.sort(&mut arr);
            None
        };
        let elapsed = start.elapsed();

        if let Some(printer) = printer {
            printer.finish()?;
        }

        debug_assert!(arr.windows(2).all(|w| w[0] <= w[1]));

        write!(self.out, "Array after {label}: ")?;
        write_sequence(&mut self.out, &arr)?;
        writeln!(self.out, "Time: {:.6} seconds.", elapsed.as_secs_f64())?;
        writeln!(self.out)?;

        debug!(
            algorithm = label,
            elapsed_ns = elapsed.as_nanos() as u64,
            "sort finished"
        );

        Ok(Record {
            label,
            input: input.to_vec(),
            output: arr,
            elapsed,
        })
    }

    /// Runs every algorithm in `algorithms`, in order, on its own copy of `input`.
    pub fn run_all<T>(&mut self, algorithms: &[Algorithm], input: &[T]) -> Result<Vec<Record<T>>>
    where
        T: Ord + Clone + Display,
    {
        let records = algorithms
            .iter()
            .map(|&algorithm| self.run(algorithm, input))
            .collect::<Result<Vec<_>>>()?;

        self.out.flush()?;

        Ok(records)
    }
}
