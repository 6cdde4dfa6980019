pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;
}

pub mod patterns;

// Used by the exported test macros to build per-pattern test names.
#[doc(hidden)]
pub use paste;
