use rand::Rng;

/// A source of random bits for salting.
///
/// This seam lets tests pin the salt; production code uses
/// [`ThreadRandom`].
pub trait RandSource {
    /// Returns 64 random bits.
    fn rand(&self) -> u64;
}

/// A [`RandSource`] backed by the thread-local RNG.
///
/// Zero-sized: the generator itself lives in thread-local storage, so this
/// handle can be cloned and shared across threads freely.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand(&self) -> u64 {
        rand::rng().random()
    }
}
