/// Mechanism-level DRBG algorithm: owns the working state and knows nothing
/// about reseed counters or entropy sources.
pub trait DrbgVariant {
    const NAME: &'static str;
    const MAX_RESEED_INTERVAL: u64;
    const SECURITY_STRENGTH: u32;
    const MAX_NUMBER_OF_BYTES_PER_REQUEST: usize;

    const MAX_PERSONALIZATION_STRING_LENGTH: u64 = 1 << 32;
    const MAX_ADDITIONAL_INPUT_LENGTH: u64 = 1 << 32;

    fn instantiate(seed_material: &[u8], personalization_string: &[u8]) -> Self;
    fn reseed(&mut self, entropy_input: &[u8], additional_input: &[u8]);
    /// Fills all of `bytes`; callers enforce the per-request limit.
    fn generate(&mut self, bytes: &mut [u8], additional_input: &[u8]);
}
