use crate::trace::{NoTrace, Observer, Step};

sort_impl!("merge_sort_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Current implementation
///
/// Classic top-down merge sort. The range is halved until it holds at most one element, then
/// adjacent sorted halves are merged back together. Every merge allocates two temporary buffers,
/// one per half, so peak scratch memory is *O*(*n*) and nothing is reused across merges.
pub fn sort<T>(arr: &mut [T])
where
    T: Ord + Clone,
{
    sort_observed(arr, &mut NoTrace);
}

/// Like [`sort`], reporting a [`Step::Merged`] after every merge.
pub fn sort_observed<T, O>(arr: &mut [T], observer: &mut O)
where
    T: Ord + Clone,
    O: Observer<T> + ?Sized,
{
    if arr.is_empty() {
        return;
    }

    let right = arr.len() - 1;
    merge_sort(arr, 0, right, 0, observer);
}

/// Sorts the inclusive range `left..=right`.
///
/// Each level halves the range, so the recursion depth is bounded by *log*(*n*) and no explicit
/// guard is needed.
fn merge_sort<T, O>(arr: &mut [T], left: usize, right: usize, depth: usize, observer: &mut O)
where
    T: Ord + Clone,
    O: Observer<T> + ?Sized,
{
    if left >= right {
        return;
    }

    // `left..=mid` is the larger half for odd lengths. Written this way to avoid overflowing
    // `left + right`.
    let mid = left + (right - left) / 2;

    merge_sort(arr, left, mid, depth + 1, observer);
    merge_sort(arr, mid + 1, right, depth + 1, observer);
    merge(arr, left, mid, right, depth, observer);
}

/// Merges the sorted runs `left..=mid` and `mid + 1..=right`. Both runs are non-empty.
fn merge<T, O>(
    arr: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    depth: usize,
    observer: &mut O,
) where
    T: Ord + Clone,
    O: Observer<T> + ?Sized,
{
    let left_run = arr[left..=mid].to_vec();
    let right_run = arr[(mid + 1)..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut dest = left;

    while i < left_run.len() && j < right_run.len() {
        // Taking from the left on ties is what makes the sort stable.
        if left_run[i] <= right_run[j] {
            arr[dest] = left_run[i].clone();
            i += 1;
        } else {
            arr[dest] = right_run[j].clone();
            j += 1;
        }

        dest += 1;
    }

    // At most one of the two runs has elements left.
    for val in left_run[i..].iter().chain(&right_run[j..]) {
        arr[dest] = val.clone();
        dest += 1;
    }

    observer.observe(Step::Merged {
        left,
        mid,
        right,
        depth,
        left_run: &left_run,
        right_run: &right_run,
        merged: &arr[left..=right],
    });
}
