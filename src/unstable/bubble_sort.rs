use crate::trace::{NoTrace, Observer, Step};

sort_impl!("bubble_sort_unstable");

/// Sorts the slice in place by sweeping adjacent out-of-order pairs towards the end.
///
/// Every sweep moves the largest remaining element to the end of the unsorted prefix, so the
/// prefix shrinks by one per sweep. A sweep without exchanges ends the sort early, which makes an
/// already sorted input *O*(*n*).
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    sort_observed(arr, &mut NoTrace);
}

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
        let mut exchanges = 0;

        for j in 0..(len - 1 - pass) {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                exchanges += 1;

                observer.observe(Step::Exchanged {
                    left: j,
                    right: j + 1,
                    arr: &*arr,
                });
            }
        }

        observer.observe(Step::SweepFinished { pass, exchanges });

        if exchanges == 0 {
            break;
        }
    }
}
