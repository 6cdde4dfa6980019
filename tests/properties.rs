use sort_emporium::stable::{insertion_sort, merge_sort};
use sort_emporium::trace::{Step, StepCounter};
use sort_emporium::unstable::{bubble_sort, selection_sort};
use sort_emporium::{Algorithm, CLASSROOM_INPUT};
use sort_test_tools::patterns;
use sort_test_tools::tests::ValueWithExtra;

const CLASSROOM_SORTED: [i32; 9] = [5, 10, 11, 22, 26, 31, 37, 82, 95];

fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

fn tagged(keys: &[i32]) -> Vec<ValueWithExtra> {
    keys.iter()
        .zip(0..)
        .map(|(&key, extra)| ValueWithExtra { key, extra })
        .collect()
}

#[test]
fn classroom_input_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let mut arr = CLASSROOM_INPUT;
        algorithm.sort(&mut arr);
        assert_eq!(arr, CLASSROOM_SORTED, "{algorithm}");
    }
}

#[test]
fn run_leaves_input_untouched() {
    let input = CLASSROOM_INPUT.to_vec();

    for algorithm in Algorithm::ALL {
        let output = algorithm.run(&input, &mut StepCounter::new());
        assert_eq!(output, CLASSROOM_SORTED);
        assert_eq!(input, CLASSROOM_INPUT);
    }
}

#[test]
fn stability_flags() {
    assert!(!Algorithm::Selection.is_stable());
    assert!(!Algorithm::Bubble.is_stable());
    assert!(Algorithm::Insertion.is_stable());
    assert!(Algorithm::Merge.is_stable());
}

#[test]
fn insertion_sort_keeps_duplicates_in_order() {
    let mut arr = tagged(&[5, 3, 3, 1]);
    insertion_sort::sort(&mut arr);

    let keys = arr.iter().map(|v| v.key).collect::<Vec<_>>();
    let extras = arr.iter().map(|v| v.extra).collect::<Vec<_>>();
    assert_eq!(keys, [1, 3, 3, 5]);
    assert_eq!(extras, [3, 1, 2, 0]);
}

#[test]
fn merge_sort_keeps_duplicates_in_order() {
    let mut arr = tagged(&[2, 1, 2, 1, 2, 1, 0]);
    merge_sort::sort(&mut arr);

    let pairs = arr.iter().map(|v| (v.key, v.extra)).collect::<Vec<_>>();
    assert_eq!(
        pairs,
        [(0, 6), (1, 1), (1, 3), (1, 5), (2, 0), (2, 2), (2, 4)]
    );
}

#[test]
fn insertion_sort_moves_last_element() {
    // A loop bound of `len - 1` would leave the 1 at the end.
    let mut arr = [5, 4, 3, 2, 1];
    let mut inserted = Vec::new();

    insertion_sort::sort_observed(&mut arr, &mut |step: Step<'_, i32>| {
        if let Step::Inserted { index, key } = step {
            inserted.push((*key, index));
        }
    });

    assert_eq!(arr, [1, 2, 3, 4, 5]);
    assert_eq!(inserted.len(), 4);
    assert_eq!(inserted.last(), Some(&(1, 0)));
}

#[test]
fn insertion_sort_shifts_once_per_inversion() {
    let mut counter = StepCounter::new();
    let mut arr = [5, 4, 3, 2, 1];
    insertion_sort::sort_observed(&mut arr, &mut counter);

    assert_eq!(counter.keys, 4);
    assert_eq!(counter.insertions, 4);
    assert_eq!(counter.shifts, 10);

    let mut counter = StepCounter::new();
    let mut arr = patterns::ascending(50);
    insertion_sort::sort_observed(&mut arr, &mut counter);
    assert_eq!(counter.shifts, 0);
}

#[test]
fn bubble_sort_stops_after_clean_sweep() {
    for len in [2, 3, 10, 100] {
        let mut counter = StepCounter::new();
        let mut arr = patterns::ascending(len);
        bubble_sort::sort_observed(&mut arr, &mut counter);

        assert_eq!(counter.sweeps, 1, "len: {len}");
        assert_eq!(counter.exchanges, 0, "len: {len}");
        assert_eq!(counter.last_sweep_exchanges, Some(0), "len: {len}");
    }
}

#[test]
fn bubble_sort_descending_exchanges() {
    let len = 20;
    let mut counter = StepCounter::new();
    let mut arr = patterns::descending(len);
    bubble_sort::sort_observed(&mut arr, &mut counter);

    assert_eq!(arr, patterns::ascending(len));
    assert_eq!(counter.exchanges, len * (len - 1) / 2);
    // Every sweep exchanges something, the last one is not followed by a clean sweep.
    assert_eq!(counter.sweeps, len - 1);
}

#[test]
fn bubble_sort_trivial_inputs() {
    let mut counter = StepCounter::new();
    let mut arr: [i32; 0] = [];
    bubble_sort::sort_observed(&mut arr, &mut counter);

    let mut arr = [42];
    bubble_sort::sort_observed(&mut arr, &mut counter);

    assert_eq!(counter, StepCounter::new());
}

#[test]
fn selection_sort_passes_include_self_swaps() {
    let mut counter = StepCounter::new();
    let mut arr = patterns::all_equal(12);
    selection_sort::sort_observed(&mut arr, &mut counter);
    assert_eq!(counter.selections, 11);

    let mut passes = Vec::new();
    let mut arr = [1, 2, 3];
    selection_sort::sort_observed(&mut arr, &mut |step: Step<'_, i32>| {
        if let Step::Selected { pass, min, .. } = step {
            passes.push((pass, min));
        }
    });
    assert_eq!(passes, [(0, 0), (1, 1)]);
}

#[test]
fn selection_sort_takes_leftmost_minimum() {
    let mut passes = Vec::new();
    let mut arr = [4, 1, 1, 0];
    selection_sort::sort_observed(&mut arr, &mut |step: Step<'_, i32>| {
        if let Step::Selected { pass, min, .. } = step {
            passes.push((pass, min));
        }
    });

    assert_eq!(arr, [0, 1, 1, 4]);
    // Pass 1 sees [1, 1, 4] at 1..=3 and keeps the first 1.
    assert_eq!(passes, [(0, 3), (1, 1), (2, 2)]);
}

#[test]
fn merge_sort_recursion_shape() {
    for len in 0..=130 {
        let mut counter = StepCounter::new();
        let mut arr = patterns::random(len);
        merge_sort::sort_observed(&mut arr, &mut counter);

        assert_eq!(counter.merges, len.saturating_sub(1), "len: {len}");
        assert_eq!(counter.merge_levels(), ceil_log2(len), "len: {len}");
        assert_eq!(counter.empty_merge_halves, 0, "len: {len}");
    }
}

#[test]
fn merge_sort_merged_ranges() {
    let mut ranges = Vec::new();
    let mut arr = [3, 1, 2];
    merge_sort::sort_observed(&mut arr, &mut |step: Step<'_, i32>| {
        if let Step::Merged {
            left,
            mid,
            right,
            depth,
            merged,
            ..
        } = step
        {
            ranges.push((left, mid, right, depth, merged.to_vec()));
        }
    });

    assert_eq!(arr, [1, 2, 3]);
    assert_eq!(
        ranges,
        [(0, 0, 1, 1, vec![1, 3]), (0, 1, 2, 0, vec![1, 2, 3])]
    );
}
