//! Reproducible row shuffle.
//!
//! Rows are permuted with a 32-bit Mersenne Twister (MT19937, `init_genrand`
//! seeding) driving a backwards Fisher–Yates walk. Each swap index is drawn
//! in `0..=i` by masking the generator output to the bit width of `i` and
//! redrawing while it exceeds `i`. This is the same permutation legacy NumPy
//! produces for `RandomState(seed).permutation(len)`, so outputs line up with
//! lists generated by `DataFrame.sample(frac=1, random_state=seed)`.
use rand::RngCore;
use tracing::info;

use crate::table::WordTable;

/// MT19937 generator. `Mt19937::new(seed)` seeds the state the way the
/// reference `init_genrand` does.
pub type Mt19937 = rand_mt::Mt;

/// Uniform value in `0..=max` by masked rejection sampling.
fn bounded<R: RngCore>(rng: &mut R, max: u64) -> u64 {
    if max == 0 {
        return 0;
    }
    let mask = u64::MAX >> max.leading_zeros();
    if max <= u32::MAX as u64 {
        loop {
            let v = rng.next_u32() as u64 & mask;
            if v <= max {
                return v;
            }
        }
    }
    loop {
        let v = rng.next_u64() & mask;
        if v <= max {
            return v;
        }
    }
}

/// Permutation of `0..len` determined by `rng`.
pub fn permutation_with<R: RngCore>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = bounded(rng, i as u64) as usize;
        order.swap(i, j);
    }
    order
}

/// Permutation of `0..len` for `seed`.
pub fn permutation(len: usize, seed: u32) -> Vec<usize> {
    permutation_with(len, &mut Mt19937::new(seed))
}

/// Return every row of `table` exactly once, reordered by `seed`.
pub fn shuffle(table: &WordTable, seed: u32) -> WordTable {
    let records = table.records();
    let shuffled = permutation(records.len(), seed)
        .into_iter()
        .map(|i| records[i].clone())
        .collect();
    info!(seed, rows = records.len(), "shuffled word list");
    table.with_records(shuffled)
}
