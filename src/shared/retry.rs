// src/shared/retry.rs

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

/// Classifies an error as worth re-attempting or terminal.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

/// Retry budget and backoff base for one wrapped operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Re-attempts after the initial one; total attempts = max_retries + 1.
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(1000),
        }
    }
}

/// Runs `operation`, re-attempting retryable failures with exponential
/// backoff until success, a terminal failure, or budget exhaustion.
///
/// The wait before re-attempt `n` is `base_delay * 2^n`, scaled by a
/// uniform jitter factor in `[1.0, 1.5)` so simultaneous callers do not
/// retry in lockstep. Terminal errors and the last error after exhaustion
/// propagate unchanged.
pub async fn with_retry<T, E, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T, E>
where
    E: Retryable + Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt: u32 = 0;
    loop {
        debug!("attempt {} of {}", attempt + 1, policy.max_retries + 1);
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!("attempt {} failed: {}", attempt + 1, err);
                if !err.is_retryable() || attempt >= policy.max_retries {
                    return Err(err);
                }
                let backoff = policy.base_delay * 2u32.pow(attempt);
                let wait = backoff.mul_f64(rand::thread_rng().gen_range(1.0..1.5));
                debug!("retrying in {:?}", wait);
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use tokio::time::Instant;

    #[derive(Debug, Clone, PartialEq)]
    enum StubError {
        Transient,
        Fatal,
    }

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                StubError::Transient => write!(f, "transient failure"),
                StubError::Fatal => write!(f, "fatal failure"),
            }
        }
    }

    impl Retryable for StubError {
        fn is_retryable(&self) -> bool {
            matches!(self, StubError::Transient)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_budget_on_persistent_transient_failure() {
        let attempts = AtomicU32::new(0);

        let res: Result<(), StubError> = with_retry(RetryPolicy::default(), || {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(StubError::Transient) }
        })
        .await;

        assert_eq!(res, Err(StubError::Transient));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn never_retries_a_terminal_failure() {
        let attempts = AtomicU32::new(0);

        let res: Result<(), StubError> = with_retry(RetryPolicy::default(), || {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(StubError::Fatal) }
        })
        .await;

        assert_eq!(res, Err(StubError::Fatal));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_first_success() {
        let attempts = AtomicU32::new(0);

        let res = with_retry(RetryPolicy::default(), || {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 1 {
                    Err(StubError::Transient)
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(res, Ok(1));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_doubles_within_jitter_bounds() {
        let timestamps: Mutex<Vec<Instant>> = Mutex::new(Vec::new());
        let policy = RetryPolicy {
            max_retries: 2,
            base_delay: Duration::from_millis(1000),
        };

        let _res: Result<(), StubError> = with_retry(policy, || {
            timestamps.lock().unwrap().push(Instant::now());
            async { Err(StubError::Transient) }
        })
        .await;

        let timestamps = timestamps.lock().unwrap();
        assert_eq!(timestamps.len(), 3);
        for (n, pair) in timestamps.windows(2).enumerate() {
            let gap = pair[1] - pair[0];
            let floor = policy.base_delay * 2u32.pow(n as u32);
            let ceiling = floor.mul_f64(1.5);
            assert!(gap >= floor, "gap {:?} below floor {:?}", gap, floor);
            assert!(gap <= ceiling, "gap {:?} above ceiling {:?}", gap, ceiling);
        }
    }
}
