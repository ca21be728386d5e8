use rand_core::{OsRng, TryRngCore};
use std::fmt::{Debug, Display};

/// Source of entropy input for instantiation and reseeding.
pub trait Entropy {
    type Error: Display + Debug;

    /// Fills all of `bytes` or fails.
    fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Self::Error>;
}

impl Entropy for OsRng {
    type Error = <OsRng as TryRngCore>::Error;

    fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.try_fill_bytes(bytes)
    }
}

/// Lends a source to a generator without giving it up.
impl<E: Entropy + ?Sized> Entropy for &mut E {
    type Error = E::Error;

    fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Self::Error> {
        (**self).fill_bytes(bytes)
    }
}
