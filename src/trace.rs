//! Step events emitted by the sorts, and the observers that consume them.
//!
//! Every sort takes its observer as an explicit argument. Nothing about tracing is global, so the
//! algorithms can be driven with [`NoTrace`] in tests and benchmarks, with a [`StepCounter`] to
//! check structural properties, or with a [`Printer`] for the classroom narration.

use std::fmt::Display;
use std::io::{self, Write};

use crate::printer::Sequence;

/// A single observable step of a sort. Slices show the state right after the step.
#[derive(Debug)]
pub enum Step<'a, T> {
    /// Selection sort exchanged the minimum of the unsorted suffix at `min` into `pass`. Emitted
    /// for self swaps too.
    Selected { pass: usize, min: usize, arr: &'a [T] },
    /// Bubble sort exchanged the adjacent pair `left`, `right`.
    Exchanged {
        left: usize,
        right: usize,
        arr: &'a [T],
    },
    /// Bubble sort completed sweep `pass` with `exchanges` exchanges.
    SweepFinished { pass: usize, exchanges: usize },
    /// Insertion sort picked up the value at `index` as key. `arr` is the state before processing.
    Key {
        index: usize,
        key: &'a T,
        arr: &'a [T],
    },
    /// Insertion sort moved `value`, which is greater than `key`, from `from` to `from + 1`.
    Shifted {
        from: usize,
        value: &'a T,
        key: &'a T,
    },
    /// Insertion sort placed `key` at `index`.
    Inserted { index: usize, key: &'a T },
    /// Merge sort merged `left..=mid` and `mid + 1..=right`. `depth` counts the halvings from the
    /// whole input down to this range, the top level merge has depth 0.
    Merged {
        left: usize,
        mid: usize,
        right: usize,
        depth: usize,
        left_run: &'a [T],
        right_run: &'a [T],
        merged: &'a [T],
    },
}

pub trait Observer<T> {
    fn observe(&mut self, step: Step<'_, T>);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(Step<'_, T>),
{
    fn observe(&mut self, step: Step<'_, T>) {
        self(step)
    }
}

/// Ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl<T> Observer<T> for NoTrace {
    #[inline(always)]
    fn observe(&mut self, _step: Step<'_, T>) {}
}

/// Tallies steps by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub selections: usize,
    pub exchanges: usize,
    pub sweeps: usize,
    /// Exchanges performed by the last finished sweep.
    pub last_sweep_exchanges: Option<usize>,
    pub keys: usize,
    pub shifts: usize,
    pub insertions: usize,
    pub merges: usize,
    pub max_merge_depth: Option<usize>,
    /// Merges where one of the two halves was empty.
    pub empty_merge_halves: usize,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recursion levels that performed a merge.
    pub fn merge_levels(&self) -> usize {
        self.max_merge_depth.map_or(0, |depth| depth + 1)
    }
}

impl<T> Observer<T> for StepCounter {
    fn observe(&mut self, step: Step<'_, T>) {
        match step {
            Step::Selected { .. } => self.selections += 1,
            Step::Exchanged { .. } => self.exchanges += 1,
            Step::SweepFinished { exchanges, .. } => {
                self.sweeps += 1;
                self.last_sweep_exchanges = Some(exchanges);
            }
            Step::Key { .. } => self.keys += 1,
            Step::Shifted { .. } => self.shifts += 1,
            Step::Inserted { .. } => self.insertions += 1,
            Step::Merged {
                depth,
                left_run,
                right_run,
                ..
            } => {
                self.merges += 1;
                self.max_merge_depth = self.max_merge_depth.max(Some(depth));
                if left_run.is_empty() || right_run.is_empty() {
                    self.empty_merge_halves += 1;
                }
            }
        }
    }
}

const MERGE_SEPARATOR: &str = "--------------------";

/// Narrates every step as text, the verbose mode of the demonstration.
///
/// Write errors don't interrupt the sort. The first one is kept and returned by
/// [`Printer::finish`], later steps are dropped.
#[derive(Debug)]
pub struct Printer<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes and returns the sink, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        self.out.flush()?;
        Ok(self.out)
    }

    fn write_step<T: Display>(&mut self, step: Step<'_, T>) -> io::Result<()> {
        let out = &mut self.out;

        match step {
            Step::Selected { pass, arr, .. } => {
                writeln!(out, "Pass {}: {}", pass + 1, Sequence(arr))
            }
            Step::Exchanged { left, right, arr } => {
                // The pair is already exchanged, name it in its original order.
                writeln!(
                    out,
                    "Swapped {} and {}: {}",
                    arr[right],
                    arr[left],
                    Sequence(arr)
                )
            }
            Step::SweepFinished { .. } => Ok(()),
            Step::Key { key, arr, .. } => {
                writeln!(out, "Key: {key}")?;
                writeln!(out, "Array before: {}", Sequence(arr))
            }
            Step::Shifted { from, value, key } => {
                writeln!(
                    out,
                    "{value} > {key}, shifting {value} from {from} to {}",
                    from + 1
                )
            }
            Step::Inserted { index, key } => {
                writeln!(out, "Inserted {key} at position {index}")
            }
            Step::Merged {
                left,
                right,
                left_run,
                right_run,
                merged,
                ..
            } => {
                writeln!(out, "{MERGE_SEPARATOR}")?;
                writeln!(out, "Merging [{left}..={right}]")?;
                writeln!(out, "Left: {}", Sequence(left_run))?;
                writeln!(out, "Right: {}", Sequence(right_run))?;
                writeln!(out, "Merged: {}", Sequence(merged))?;
                writeln!(out, "{MERGE_SEPARATOR}")
            }
        }
    }
}

impl<T: Display, W: Write> Observer<T> for Printer<W> {
    fn observe(&mut self, step: Step<'_, T>) {
        if self.error.is_some() {
            return;
        }

        if let Err(err) = self.write_step(step) {
            self.error = Some(err);
        }
    }
}
