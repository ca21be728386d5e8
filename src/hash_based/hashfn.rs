use hmac::Mac;
use sha2::digest::{OutputSizeUser, generic_array::GenericArray};

/// A SHA-2 hash usable as the keyed-hash primitive of HMAC_DRBG.
pub trait HashFn {
    const NAME: &'static str;
    const OUT_LEN: usize;
    /// Highest security strength, in bits, this hash supports (SP 800-57).
    const SECURITY_STRENGTH: u32;

    const MAX_NUMBER_OF_BYTES_PER_REQUEST: usize = (1 << 19) / 8;
    const MAX_RESEED_INTERVAL: u64 = 1 << 48;

    type Hash: Clone + AsRef<[u8]> + AsMut<[u8]>;
    fn hash_from_byte(byte: u8) -> Self::Hash;

    /// HMAC over the concatenation of `data`.
    fn hmac(key: &Self::Hash, data: &[&[u8]]) -> Self::Hash;
}

macro_rules! impl_sha2 {
    ($name:ident, $inner:ty, $label:literal, $out_len:literal, $strength:literal) => {
        pub struct $name;

        impl HashFn for $name {
            const NAME: &'static str = $label;
            const OUT_LEN: usize = $out_len;
            const SECURITY_STRENGTH: u32 = $strength;

            type Hash = GenericArray<u8, <$inner as OutputSizeUser>::OutputSize>;
            fn hash_from_byte(byte: u8) -> Self::Hash {
                let mut hash = Self::Hash::default();
                hash.fill(byte);
                hash
            }

            fn hmac(key: &Self::Hash, data: &[&[u8]]) -> Self::Hash {
                let mut mac = <hmac::Hmac<$inner> as Mac>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                for part in data {
                    mac.update(part);
                }
                mac.finalize().into_bytes()
            }
        }
    };
}

impl_sha2!(Sha224, sha2::Sha224, "HMAC-SHA-224", 28, 192);
impl_sha2!(Sha256, sha2::Sha256, "HMAC-SHA-256", 32, 256);
impl_sha2!(Sha384, sha2::Sha384, "HMAC-SHA-384", 48, 256);
impl_sha2!(Sha512, sha2::Sha512, "HMAC-SHA-512", 64, 256);
impl_sha2!(Sha512_224, sha2::Sha512_224, "HMAC-SHA-512/224", 28, 192);
impl_sha2!(Sha512_256, sha2::Sha512_256, "HMAC-SHA-512/256", 32, 256);
