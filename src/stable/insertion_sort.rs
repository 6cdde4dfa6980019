use crate::trace::{NoTrace, Observer, Step};

sort_impl!("insertion_sort_stable");

/// Sorts the slice in place by growing a sorted prefix one element at a time.
///
/// This sort is stable (i.e., does not reorder equal elements): a key is only moved past elements
/// that are strictly greater than it. *O*(*n*^2) worst-case, *O*(*n*) on sorted input.
pub fn sort<T>(arr: &mut [T])
where
    T: Ord + Clone,
{
    sort_observed(arr, &mut NoTrace);
}

/// Like [`sort`], reporting for every key a [`Step::Key`], one [`Step::Shifted`] per moved element
/// and a final [`Step::Inserted`].
pub fn sort_observed<T, O>(arr: &mut [T], observer: &mut O)
where
    T: Ord + Clone,
    O: Observer<T> + ?Sized,
{
    // `arr[..1]` is sorted by definition. The last element has to be a key as well, otherwise it
    // never leaves the end of the slice.
    for i in 1..arr.len() {
        let key = arr[i].clone();
        observer.observe(Step::Key {
            index: i,
            key: &key,
            arr: &*arr,
        });

        // `hole` is the slot the key would land in if inserted now.
        let mut hole = i;
        while hole > 0 && arr[hole - 1] > key {
            arr[hole] = arr[hole - 1].clone();
            observer.observe(Step::Shifted {
                from: hole - 1,
                value: &arr[hole],
                key: &key,
            });

            hole -= 1;
        }

        arr[hole] = key;
        observer.observe(Step::Inserted {
            index: hole,
            key: &arr[hole],
        });
    }
}
