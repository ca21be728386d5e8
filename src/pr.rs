/// Prediction resistance: every request reseeds from the entropy source first.
pub struct Pr;

/// Reseeds only once the reseed interval has run out.
pub struct NoPr;

pub trait PredictionResistance {
    const ENABLED: bool;

    /// Whether the next request has to reseed before generating.
    fn must_reseed(reseed_counter: u64, reseed_interval: u64) -> bool {
        Self::ENABLED || reseed_counter > reseed_interval
    }
}

impl PredictionResistance for Pr {
    const ENABLED: bool = true;
}

impl PredictionResistance for NoPr {
    const ENABLED: bool = false;
}
