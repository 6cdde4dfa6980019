use crate::trace::{NoTrace, Observer, Step};

sort_impl!("selection_sort_unstable");

/// Sorts the slice in place by repeatedly selecting the minimum of the unsorted suffix.
///
/// *O*(*n*^2) comparisons regardless of input, at most *n* - 1 exchanges.
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    sort_observed(arr, &mut NoTrace);
}

/// Like [`sort`], reporting a [`Step::Selected`] after every pass.
pub fn sort_observed<T, O>(arr: &mut [T], observer: &mut O)
where
    T: Ord,
    O: Observer<T> + ?Sized,
{
    let len = arr.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        // Strict less-than keeps the leftmost of several equal minimums.
        let mut min = pass;
        for j in (pass + 1)..len {
            if arr[j] < arr[min] {
                min = j;
            }
        }

        // Exchanged even if `min == pass`.
        arr.swap(pass, min);

        observer.observe(Step::Selected {
            pass,
            min,
            arr: &*arr,
        });
    }
}
