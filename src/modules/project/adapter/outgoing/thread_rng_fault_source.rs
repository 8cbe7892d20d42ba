// src/modules/project/adapter/outgoing/thread_rng_fault_source.rs

use std::time::Duration;

use rand::Rng;

use crate::modules::project::application::ports::outgoing::fault_source::{
    FaultSource, LatencyWindow,
};

/// Production randomness: plain thread-local RNG rolls.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngFaultSource;

impl FaultSource for ThreadRngFaultSource {
    fn should_fail(&self, probability: f64) -> bool {
        rand::thread_rng().gen::<f64>() < probability
    }

    fn sample_latency(&self, window: LatencyWindow) -> Duration {
        let ms = rand::thread_rng().gen_range(window.min_ms..=window.max_ms);
        Duration::from_millis(ms)
    }
}
