// ID Provider Port (for deterministic testing)

/// Request id provider interface (allows deterministic ids in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a correlation id for one request
    fn next_id(&self) -> u64;
}

/// Random id provider (production)
///
/// Every call draws independently; there is no shared counter.
pub struct RandomIdProvider;

impl IdProvider for RandomIdProvider {
    fn next_id(&self) -> u64 {
        // Kept within 2^53 so JavaScript-based daemons echo it back intact
        rand::random::<u64>() >> 11
    }
}

/// Fixed id provider (tests)
pub struct FixedIdProvider(pub u64);

impl IdProvider for FixedIdProvider {
    fn next_id(&self) -> u64 {
        self.0
    }
}
