// src/modules/project/application/ports/outgoing/fault_source.rs

use std::time::Duration;

/// Inclusive latency window in milliseconds for one simulated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyWindow {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

/// Randomness capability behind the simulated backend.
///
/// Injected so tests can script exact fault outcomes and latencies instead
/// of depending on an ambient random source.
pub trait FaultSource: Send + Sync {
    /// One roll; `true` means the current call fails with a transient error.
    fn should_fail(&self, probability: f64) -> bool;

    /// Sample a latency uniformly from the window.
    fn sample_latency(&self, window: LatencyWindow) -> Duration;
}
