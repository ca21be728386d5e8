use crate::{Entropy, drbg::variant::DrbgVariant, pr::PredictionResistance};
use rand_core::{OsRng, TryCryptoRng, TryRngCore};
use std::{fmt, marker::PhantomData};
use zeroize::Zeroizing;

mod builder;
pub mod variant;

pub use builder::DrbgBuilder;

/// Largest request a single `generate` call serves: 7500 bits, rounded down
/// to whole bytes.
pub const MAX_BYTES_PER_GENERATE: usize = 7500 / 8;

const SECURITY_STRENGTHS: [u32; 4] = [112, 128, 192, 256];

#[derive(Debug)]
pub enum DrbgError<E> {
    InvalidRequestLength { requested: usize, max: usize },
    ReseedRequired,
    UnsupportedSecurityStrength { requested: u32, max: u32 },
    InvalidReseedInterval(u64),
    PersonalizationStringTooLong,
    AdditionalInputTooLong,
    Entropy(E),
}

impl<E: fmt::Display> fmt::Display for DrbgError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrbgError::InvalidRequestLength { requested, max } => {
                write!(f, "Requested {requested} bytes, must be between 1 and {max}.")
            }
            DrbgError::ReseedRequired => write!(f, "Reseed required."),
            DrbgError::UnsupportedSecurityStrength { requested, max } => write!(
                f,
                "Security strength of {requested} bits exceeds the supported {max} bits."
            ),
            DrbgError::InvalidReseedInterval(interval) => {
                write!(f, "Invalid reseed interval {interval}.")
            }
            DrbgError::PersonalizationStringTooLong => {
                write!(f, "Personalization string too long.")
            }
            DrbgError::AdditionalInputTooLong => write!(f, "Additional input too long."),
            DrbgError::Entropy(e) => write!(f, "Drbg Entropy Error: {e}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for DrbgError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DrbgError::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

/// A DRBG instance. Exists only once instantiated; every operation takes
/// `&mut self`, so sharing one across threads needs external locking.
pub struct Drbg<V, Pr, E = OsRng> {
    variant: V,
    entropy: E,
    reseed_counter: u64,
    reseed_interval: u64,
    security_strength: u32,
    _pr: PhantomData<Pr>,
}

impl<V: DrbgVariant, Pr: PredictionResistance> Drbg<V, Pr, OsRng> {
    /// Instantiates from caller-supplied seed material (entropy input with any
    /// nonce already appended). The OS entropy source is only consulted if the
    /// generator later reseeds itself through [`Drbg::fill_bytes`].
    pub fn instantiate(
        security_strength: u32,
        seed_material: &[u8],
        personalization_string: Option<&[u8]>,
    ) -> Result<Self, DrbgError<<OsRng as Entropy>::Error>> {
        Self::instantiate_with_entropy(
            OsRng,
            security_strength,
            seed_material,
            personalization_string,
        )
    }

    pub fn builder() -> DrbgBuilder<V, Pr, OsRng> {
        DrbgBuilder::new(OsRng)
    }
}

impl<V: DrbgVariant, Pr: PredictionResistance, E: Entropy> Drbg<V, Pr, E> {
    pub fn instantiate_with_entropy(
        entropy: E,
        security_strength: u32,
        seed_material: &[u8],
        personalization_string: Option<&[u8]>,
    ) -> Result<Self, DrbgError<E::Error>> {
        let security_strength = supported_security_strength::<V, E::Error>(security_strength)?;
        let personalization_string = personalization_string.unwrap_or_default();
        if personalization_string.len() as u64 > V::MAX_PERSONALIZATION_STRING_LENGTH {
            return Err(DrbgError::PersonalizationStringTooLong);
        }
        log::debug!("instantiating {} at {security_strength}-bit security strength", V::NAME);
        Ok(Self {
            variant: V::instantiate(seed_material, personalization_string),
            entropy,
            reseed_counter: 1,
            reseed_interval: V::MAX_RESEED_INTERVAL,
            security_strength,
            _pr: PhantomData,
        })
    }

    pub fn security_strength(&self) -> u32 {
        self.security_strength
    }

    pub fn reseed_counter(&self) -> u64 {
        self.reseed_counter
    }

    pub fn reseed_interval(&self) -> u64 {
        self.reseed_interval
    }

    pub fn set_reseed_interval(&mut self, reseed_interval: u64) -> Result<(), DrbgError<E::Error>> {
        if reseed_interval == 0 || reseed_interval > V::MAX_RESEED_INTERVAL {
            return Err(DrbgError::InvalidReseedInterval(reseed_interval));
        }
        self.reseed_interval = reseed_interval;
        Ok(())
    }

    pub fn reseed(
        &mut self,
        entropy_input: &[u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError<E::Error>> {
        let additional_input = checked_additional_input::<V, E::Error>(additional_input)?;
        self.variant.reseed(entropy_input, additional_input);
        self.reseed_counter = 1;
        log::debug!("reseeded {}", V::NAME);
        Ok(())
    }

    /// Reseeds with `security_strength / 8` bytes drawn from the entropy source.
    pub fn reseed_from_entropy(
        &mut self,
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError<E::Error>> {
        let mut entropy_input = Zeroizing::new(vec![0; self.security_strength as usize / 8]);
        self.entropy
            .fill_bytes(&mut entropy_input)
            .map_err(DrbgError::Entropy)?;
        self.reseed(&entropy_input, additional_input)
    }

    /// Fills `bytes` with `1..=MAX_BYTES_PER_GENERATE` bytes of output. On
    /// error the internal state is left untouched.
    pub fn generate(
        &mut self,
        bytes: &mut [u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError<E::Error>> {
        let requested = bytes.len();
        if requested == 0 || requested > MAX_BYTES_PER_GENERATE {
            return Err(DrbgError::InvalidRequestLength {
                requested,
                max: MAX_BYTES_PER_GENERATE,
            });
        }
        let additional_input = checked_additional_input::<V, E::Error>(additional_input)?;
        if self.reseed_counter > self.reseed_interval {
            log::warn!(
                "{} refused to generate after {} requests, reseed required",
                V::NAME,
                self.reseed_interval
            );
            return Err(DrbgError::ReseedRequired);
        }
        self.variant.generate(bytes, additional_input);
        self.reseed_counter += 1;
        Ok(())
    }

    /// Fills a buffer of any length, reseeding from the entropy source when the
    /// reseed interval runs out, or before every request under prediction
    /// resistance.
    pub fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), DrbgError<E::Error>> {
        self.fill_bytes_with_ai(bytes, &[])
    }

    pub fn fill_bytes_with_ai(
        &mut self,
        bytes: &mut [u8],
        additional_input: &[u8],
    ) -> Result<(), DrbgError<E::Error>> {
        for block in bytes.chunks_mut(MAX_BYTES_PER_GENERATE) {
            if Pr::must_reseed(self.reseed_counter, self.reseed_interval) {
                log::debug!("reseeding {} from entropy source", V::NAME);
                // The additional input went into the reseed, so it is not
                // mixed in a second time.
                self.reseed_from_entropy(Some(additional_input))?;
                self.generate(block, None)?;
            } else {
                self.generate(block, Some(additional_input))?;
            }
        }
        Ok(())
    }
}

fn supported_security_strength<V: DrbgVariant, E>(requested: u32) -> Result<u32, DrbgError<E>> {
    if requested > V::SECURITY_STRENGTH {
        return Err(DrbgError::UnsupportedSecurityStrength {
            requested,
            max: V::SECURITY_STRENGTH,
        });
    }
    Ok(SECURITY_STRENGTHS
        .into_iter()
        .find(|&strength| requested <= strength)
        .unwrap_or(V::SECURITY_STRENGTH))
}

fn checked_additional_input<V: DrbgVariant, E>(
    additional_input: Option<&[u8]>,
) -> Result<&[u8], DrbgError<E>> {
    let additional_input = additional_input.unwrap_or_default();
    if additional_input.len() as u64 > V::MAX_ADDITIONAL_INPUT_LENGTH {
        return Err(DrbgError::AdditionalInputTooLong);
    }
    Ok(additional_input)
}

impl<V: DrbgVariant, Pr: PredictionResistance, E> fmt::Debug for Drbg<V, Pr, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drbg")
            .field("mechanism", &V::NAME)
            .field("prediction_resistance", &Pr::ENABLED)
            .field("security_strength", &self.security_strength)
            .field("reseed_counter", &self.reseed_counter)
            .field("reseed_interval", &self.reseed_interval)
            .finish_non_exhaustive()
    }
}

impl<V: DrbgVariant, Pr: PredictionResistance, E: Entropy> TryRngCore for Drbg<V, Pr, E> {
    type Error = DrbgError<E::Error>;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut bytes = [0; 4];
        self.fill_bytes(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut bytes = [0; 8];
        self.fill_bytes(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.fill_bytes(dst)
    }
}

impl<V: DrbgVariant, Pr: PredictionResistance, E: Entropy> TryCryptoRng for Drbg<V, Pr, E> {}
