use crate::{drbg::variant::DrbgVariant, hash_based::hashfn::HashFn};
use zeroize::Zeroize;

/// HMAC_DRBG working state `(K, V)`.
pub struct Hmac<F: HashFn> {
    v: F::Hash,
    key: F::Hash,
}

impl<F: HashFn> Hmac<F> {
    /// `provided_data` is the concatenation of its parts; it counts as empty
    /// when every part is empty.
    fn update(&mut self, provided_data: &[&[u8]]) {
        self.mix(0x00, provided_data);
        if provided_data.iter().any(|data| !data.is_empty()) {
            self.mix(0x01, provided_data);
        }
    }

    fn mix(&mut self, separator: u8, provided_data: &[&[u8]]) {
        let mut input = Vec::with_capacity(provided_data.len() + 2);
        input.push(self.v.as_ref());
        input.push(std::slice::from_ref(&separator));
        input.extend_from_slice(provided_data);
        self.key = F::hmac(&self.key, &input);
        self.v = F::hmac(&self.key, &[self.v.as_ref()]);
    }
}

impl<F: HashFn> DrbgVariant for Hmac<F> {
    const NAME: &'static str = F::NAME;
    const MAX_RESEED_INTERVAL: u64 = F::MAX_RESEED_INTERVAL;
    const SECURITY_STRENGTH: u32 = F::SECURITY_STRENGTH;
    const MAX_NUMBER_OF_BYTES_PER_REQUEST: usize = F::MAX_NUMBER_OF_BYTES_PER_REQUEST;

    fn instantiate(seed_material: &[u8], personalization_string: &[u8]) -> Self {
        let mut hmac = Self {
            v: F::hash_from_byte(0x01),
            key: F::hash_from_byte(0x00),
        };
        hmac.update(&[seed_material, personalization_string]);
        hmac
    }

    fn reseed(&mut self, entropy_input: &[u8], additional_input: &[u8]) {
        self.update(&[entropy_input, additional_input]);
    }

    fn generate(&mut self, bytes: &mut [u8], additional_input: &[u8]) {
        if !additional_input.is_empty() {
            self.update(&[additional_input]);
        }
        for block in bytes.chunks_mut(F::OUT_LEN) {
            self.v = F::hmac(&self.key, &[self.v.as_ref()]);
            block.copy_from_slice(&self.v.as_ref()[..block.len()]);
        }
        self.update(&[additional_input]);
    }
}

impl<F: HashFn> Drop for Hmac<F> {
    fn drop(&mut self) {
        self.key.as_mut().zeroize();
        self.v.as_mut().zeroize();
    }
}
