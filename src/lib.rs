//! HMAC_DRBG, the HMAC-based deterministic random bit generator of
//! NIST SP 800-90A.
//!
//! ```
//! use hmacdrbg::DrbgHmacSha256;
//!
//! let seed_material = [0x61; 48];
//! let mut drbg = DrbgHmacSha256::instantiate(256, &seed_material, None).unwrap();
//! let mut bytes = [0; 32];
//! drbg.generate(&mut bytes, None).unwrap();
//! ```

use hash_based::hashfn::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use rand_core::OsRng;

mod drbg;
mod entropy;
mod hash_based;
mod pr;
mod reader;

pub use drbg::{Drbg, DrbgBuilder, DrbgError, MAX_BYTES_PER_GENERATE, variant::DrbgVariant};
pub use entropy::Entropy;
pub use hash_based::{hashfn, hmac::Hmac};
pub use pr::{NoPr, Pr, PredictionResistance};
pub use reader::DrbgReader;

macro_rules! define_drbg {
    ($name:ident, $pr:ty, $inner:ident) => {
        #[doc = concat!("HMAC_DRBG over `", stringify!($inner), "`.")]
        pub type $name<E = OsRng> = Drbg<Hmac<$inner>, $pr, E>;
    };
}

macro_rules! define_all_drbg {
    ($(($name:ident, $pr:ty, $inner:ident)),*$(,)?) => {
        $(
            define_drbg!($name, $pr, $inner);
        )*
    };
}

define_all_drbg!(
    (DrbgHmacSha224, NoPr, Sha224),
    (DrbgPrHmacSha224, Pr, Sha224),
    (DrbgHmacSha256, NoPr, Sha256),
    (DrbgPrHmacSha256, Pr, Sha256),
    (DrbgHmacSha384, NoPr, Sha384),
    (DrbgPrHmacSha384, Pr, Sha384),
    (DrbgHmacSha512, NoPr, Sha512),
    (DrbgPrHmacSha512, Pr, Sha512),
    (DrbgHmacSha512_224, NoPr, Sha512_224),
    (DrbgPrHmacSha512_224, Pr, Sha512_224),
    (DrbgHmacSha512_256, NoPr, Sha512_256),
    (DrbgPrHmacSha512_256, Pr, Sha512_256),
);
