use std::fmt;

use crate::trace::Observer;

pub use error::{Error, Result};

// Gives every algorithm module a `SortImpl` usable with the `sort_test_tools` harness.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }
        }
    };
}

pub mod cli;
pub mod error;
pub mod harness;
pub mod printer;
pub mod stable;
pub mod trace;
pub mod unstable;

/// The fixed input every algorithm is demonstrated on.
pub const CLASSROOM_INPUT: [i32; 9] = [37, 82, 11, 10, 5, 95, 26, 22, 31];

/// One of the classroom sorts, as a runtime value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Selection,
    Bubble,
    Insertion,
    Merge,
}

impl Algorithm {
    /// Every algorithm, in the order the demonstration runs them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
    ];

    /// Human readable name, used as the report label.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Whether equal elements are guaranteed to keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Merge)
    }

    /// Sorts `arr` in place without observing it.
    pub fn sort<T: Ord + Clone>(self, arr: &mut [T]) {
        self.sort_observed(arr, &mut trace::NoTrace);
    }

    /// Sorts `arr` in place, reporting every step to `observer`.
    pub fn sort_observed<T, O>(self, arr: &mut [T], observer: &mut O)
    where
        T: Ord + Clone,
        O: Observer<T> + ?Sized,
    {
        match self {
            Algorithm::Selection => unstable::selection_sort::sort_observed(arr, observer),
            Algorithm::Bubble => unstable::bubble_sort::sort_observed(arr, observer),
            Algorithm::Insertion => stable::insertion_sort::sort_observed(arr, observer),
            Algorithm::Merge => stable::merge_sort::sort_observed(arr, observer),
        }
    }

    /// Sorts an independent copy of `input` and returns it.
    pub fn run<T, O>(self, input: &[T], observer: &mut O) -> Vec<T>
    where
        T: Ord + Clone,
        O: Observer<T> + ?Sized,
    {
        let mut output = input.to_vec();
        self.sort_observed(&mut output, observer);
        output
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
