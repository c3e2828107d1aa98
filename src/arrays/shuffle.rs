use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a copy of `seq` in a uniformly random order, using the thread-local random number
/// generator. `seq` itself is left untouched.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::rng())
}

/// Returns a copy of `seq` in a uniformly random order, drawing randomness from `rng`.
///
/// This is a Fisher-Yates shuffle: each position is filled by picking uniformly from the elements
/// which haven't been placed yet.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = seq.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
