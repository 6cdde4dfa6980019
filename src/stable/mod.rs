// Sorts that keep equal elements in their original relative order.

pub mod insertion_sort;

// Top-down, two scratch buffers per merge.
pub mod merge_sort;
