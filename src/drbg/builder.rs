use crate::{
    Entropy,
    drbg::{Drbg, DrbgError, variant::DrbgVariant},
    pr::PredictionResistance,
};
use std::marker::PhantomData;
use zeroize::Zeroizing;

/// Instantiates a [`Drbg`] from an entropy source.
///
/// `build` draws `security_strength / 8` bytes of entropy input, then the
/// nonce (`security_strength / 16` bytes) unless one was supplied.
pub struct DrbgBuilder<V, Pr, E> {
    entropy: E,
    security_strength: Option<u32>,
    nonce: Option<Vec<u8>>,
    personalization_string: Vec<u8>,
    reseed_interval: Option<u64>,
    _drbg: PhantomData<(V, Pr)>,
}

impl<V: DrbgVariant, Pr: PredictionResistance, E: Entropy> DrbgBuilder<V, Pr, E> {
    pub(crate) fn new(entropy: E) -> Self {
        Self {
            entropy,
            security_strength: None,
            nonce: None,
            personalization_string: Vec::new(),
            reseed_interval: None,
            _drbg: PhantomData,
        }
    }

    pub fn entropy<T: Entropy>(self, entropy: T) -> DrbgBuilder<V, Pr, T> {
        DrbgBuilder {
            entropy,
            security_strength: self.security_strength,
            nonce: self.nonce,
            personalization_string: self.personalization_string,
            reseed_interval: self.reseed_interval,
            _drbg: PhantomData,
        }
    }

    /// Defaults to the highest strength the mechanism supports.
    pub fn security_strength(mut self, security_strength: u32) -> Self {
        self.security_strength = Some(security_strength);
        self
    }

    pub fn nonce(mut self, nonce: &[u8]) -> Self {
        self.nonce = Some(nonce.to_vec());
        self
    }

    pub fn personalization_string(mut self, personalization_string: &[u8]) -> Self {
        self.personalization_string = personalization_string.to_vec();
        self
    }

    pub fn reseed_interval(mut self, reseed_interval: u64) -> Self {
        self.reseed_interval = Some(reseed_interval);
        self
    }

    pub fn build(mut self) -> Result<Drbg<V, Pr, E>, DrbgError<E::Error>> {
        let requested = self.security_strength.unwrap_or(V::SECURITY_STRENGTH);
        let security_strength = super::supported_security_strength::<V, E::Error>(requested)?;

        let entropy_len = security_strength as usize / 8;
        let mut seed_material = Zeroizing::new(vec![0; entropy_len]);
        self.entropy
            .fill_bytes(&mut seed_material)
            .map_err(DrbgError::Entropy)?;
        match self.nonce.take() {
            Some(nonce) => seed_material.extend_from_slice(&nonce),
            None => {
                seed_material.resize(entropy_len + security_strength as usize / 16, 0);
                self.entropy
                    .fill_bytes(&mut seed_material[entropy_len..])
                    .map_err(DrbgError::Entropy)?;
            }
        }

        let mut drbg = Drbg::instantiate_with_entropy(
            self.entropy,
            security_strength,
            &seed_material,
            Some(&self.personalization_string),
        )?;
        if let Some(reseed_interval) = self.reseed_interval {
            drbg.set_reseed_interval(reseed_interval)?;
        }
        Ok(drbg)
    }
}
