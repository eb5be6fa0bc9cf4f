/// A permutation in the mathematical sense.
pub trait Permutation<T: Clone>: Clone + Sync {
    fn permute(&self, mut input: T) -> T {
        self.permute_mut(&mut input);
        input
    }

    fn permute_mut(&self, input: &mut T);
}

/// A permutation thought to be cryptographically secure, in the sense that it is thought to be
/// difficult to distinguish (in a nontrivial way) from a random permutation.
pub trait CryptographicPermutation<T: Clone>: Permutation<T> {}

/// An iterated permutation whose individual rounds can be applied on their own.
///
/// Applying `NUM_ROUNDS` rounds must agree with [`Permutation::permute`]. Fewer rounds are
/// not a secure permutation; they exist to pin down intermediate states.
pub trait RoundPermutation<T: Clone>: CryptographicPermutation<T> {
    const NUM_ROUNDS: usize;

    /// Applies rounds `0..rounds` to `input`.
    ///
    /// # Panics
    /// Panics if `rounds > Self::NUM_ROUNDS`.
    fn permute_rounds(&self, input: T, rounds: usize) -> T;
}
