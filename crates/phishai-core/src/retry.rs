//! Bounded retry for upstream calls.
//!
//! A [`RetryPolicy`] describes how many attempts are made, how long each may
//! take and which failures are worth another try. [`call_with_retry`] applies
//! a policy to any async operation returning [`UpstreamError`].

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::UpstreamError;

/// Attempts made for each analysis, including the first.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

/// Budget for a single attempt.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(15);

/// Pause between attempts.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Retry behaviour for an upstream call.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub attempt_timeout: Duration,
    pub backoff: Duration,
    /// Decides whether an upstream HTTP status is transient.
    pub retryable_status: fn(u16) -> bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            backoff: DEFAULT_BACKOFF,
            retryable_status: default_retryable_status,
        }
    }
}

/// Client errors are final, except request-timeout and rate-limit answers.
pub fn default_retryable_status(status: u16) -> bool {
    !(400..500).contains(&status) || status == 408 || status == 429
}

impl RetryPolicy {
    /// Whether `err` warrants another attempt under this policy.
    pub fn should_retry(&self, err: &UpstreamError) -> bool {
        match err {
            UpstreamError::Status { status, .. } => (self.retryable_status)(*status),
            UpstreamError::MalformedPayload(_) => false,
            UpstreamError::Offline(_) | UpstreamError::Timeout(_) | UpstreamError::Network(_) => true,
        }
    }
}

/// Run `op` under `policy`.
///
/// `op` receives the 1-based attempt number. Each attempt is bounded by
/// `policy.attempt_timeout`; the backoff is only slept between attempts.
/// The error of the last attempt is returned when all attempts fail.
pub async fn call_with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, UpstreamError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, UpstreamError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let outcome = match tokio::time::timeout(policy.attempt_timeout, op(attempt)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(policy.attempt_timeout)),
        };

        let err = match outcome {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        warn!(attempt, max_attempts, error = %err, "Upstream attempt failed");

        if attempt >= max_attempts || !policy.should_retry(&err) {
            return Err(err);
        }

        debug!(backoff_ms = policy.backoff.as_millis() as u64, "Retrying upstream call");
        tokio::time::sleep(policy.backoff).await;
        attempt += 1;
    }
}
