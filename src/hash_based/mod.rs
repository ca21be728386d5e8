pub mod hashfn;
pub mod hmac;
