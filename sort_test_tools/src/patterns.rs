use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
#[allow(deprecated)]
use zipf::ZipfDistribution;

// One seed per process so every pattern in a failing run can be regenerated.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// Returns the process wide seed. Set `OVERRIDE_SEED=<u64>` to reproduce a previous run.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly random over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly random inside `range`. Panics if `range` is empty.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_rng();
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Zipfian distributed values in `1..=len`, lots of duplicates among the small values.
// zipf 7 deprecates its distribution in favour of `rand_distr::Zipf`.
#[allow(deprecated)]
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// Random values, sorted ascending in chunks of `saw_len`.
pub fn saw_ascending(len: usize, saw_len: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    let mut vals = random(len);
    for chunk in vals.chunks_mut(saw_len.max(1)) {
        chunk.sort_unstable();
    }

    vals
}

/// Random values, sorted descending in chunks of `saw_len`.
pub fn saw_descending(len: usize, saw_len: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    let mut vals = random(len);
    for chunk in vals.chunks_mut(saw_len.max(1)) {
        chunk.sort_unstable_by(|a, b| b.cmp(a));
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let first_half = len / 2;
    (0..first_half as i32)
        .chain((0..(len - first_half) as i32).rev())
        .collect()
}
