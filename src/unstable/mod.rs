// Sorts that make no promise about the relative order of equal elements.

pub mod selection_sort;

// Adjacent strict exchanges happen to keep equal elements in order, but that is not part of its
// contract.
pub mod bubble_sort;
