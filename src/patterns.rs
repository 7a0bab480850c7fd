//! Input patterns for testing and benchmarking sort implementations.
//! Currently limited to i32 values.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

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

    (0..len).map(|_| 66).collect()
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

pub fn ascending_saw(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    let mut vals = random(len);
    for chunk in saw_chunks(&mut vals, saw_count) {
        chunk.sort_unstable();
    }

    vals
}

pub fn descending_saw(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    let mut vals = random(len);
    for chunk in saw_chunks(&mut vals, saw_count) {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let mut vals = random(len);
    let directions = random_uniform(saw_count + 1, 0..=1);

    for (i, chunk) in saw_chunks(&mut vals, saw_count).enumerate() {
        if directions[i % directions.len()] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    let (rise, fall) = vals.split_at_mut(len / 2);
    rise.sort_unstable();
    fall.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

pub fn valley(len: usize) -> Vec<i32> {
    // :.    .:
    // :::..:::

    let mut vals = random(len);

    let (fall, rise) = vals.split_at_mut(len / 2);
    fall.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    rise.sort_unstable();

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    // Random seed per process, printed by the test harness for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn saw_chunks(vals: &mut [i32], saw_count: usize) -> std::slice::ChunksMut<'_, i32> {
    let chunk_len = (vals.len() / saw_count.max(1)).max(1);
    vals.chunks_mut(chunk_len)
}
