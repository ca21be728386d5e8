use crate::{
    Entropy,
    drbg::{Drbg, MAX_BYTES_PER_GENERATE, variant::DrbgVariant},
    pr::PredictionResistance,
};
use std::io::{self, Read};
use zeroize::Zeroizing;

/// `Read` adapter over a [`Drbg`].
///
/// Output is produced `MAX_BYTES_PER_GENERATE` bytes at a time and handed out
/// across reads; the generator is only called again once the buffer is
/// drained. Errors from the generator (such as a required reseed) surface as
/// [`io::ErrorKind::Other`].
pub struct DrbgReader<V, Pr, E> {
    drbg: Drbg<V, Pr, E>,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl<V: DrbgVariant, Pr: PredictionResistance, E: Entropy> DrbgReader<V, Pr, E> {
    pub fn new(drbg: Drbg<V, Pr, E>) -> Self {
        Self {
            drbg,
            buffer: Zeroizing::new(vec![0; MAX_BYTES_PER_GENERATE]),
            pos: MAX_BYTES_PER_GENERATE,
        }
    }

    pub fn get_ref(&self) -> &Drbg<V, Pr, E> {
        &self.drbg
    }

    /// Reseeding through this keeps any buffered output, which was generated
    /// before the reseed.
    pub fn get_mut(&mut self) -> &mut Drbg<V, Pr, E> {
        &mut self.drbg
    }

    pub fn into_inner(self) -> Drbg<V, Pr, E> {
        self.drbg
    }
}

impl<V, Pr, E> Read for DrbgReader<V, Pr, E>
where
    V: DrbgVariant,
    Pr: PredictionResistance,
    E: Entropy,
    E::Error: std::error::Error + Send + Sync + 'static,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut n = 0;
        while n < buf.len() {
            if self.pos == self.buffer.len() {
                if let Err(err) = self.drbg.generate(&mut self.buffer, None) {
                    if n > 0 {
                        return Ok(n);
                    }
                    return Err(io::Error::other(err));
                }
                self.pos = 0;
            }
            let len = (buf.len() - n).min(self.buffer.len() - self.pos);
            buf[n..n + len].copy_from_slice(&self.buffer[self.pos..self.pos + len]);
            self.pos += len;
            n += len;
        }
        Ok(n)
    }
}
