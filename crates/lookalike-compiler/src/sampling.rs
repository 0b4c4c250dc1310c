// Post-hoc random sampling of a drawn candidate list
//
// The compiler draws `OVERSAMPLE_FACTOR * k` candidates in product order and
// this module shuffles them down to `k`. The result is uniform over that
// drawn prefix only, not over the whole combination space. Reservoir sampling
// over the full sequence would remove the bias at the cost of walking every
// combination.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Shuffle `candidates` and keep at most `k` of them.
///
/// Lists already within `k` are returned untouched, in product order.
pub fn shuffle_truncate(candidates: &mut Vec<String>, k: usize, seed: Option<u64>) {
    if candidates.len() <= k {
        return;
    }
    match seed {
        Some(seed) => candidates.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => candidates.shuffle(&mut rand::thread_rng()),
    }
    candidates.truncate(k);
}
