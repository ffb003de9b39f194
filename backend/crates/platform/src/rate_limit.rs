//! Rate Limiting Infrastructure
//!
//! Sliding-window admission gate for outbound calls. The limiter counts call
//! *initiations*: a slot is consumed when a call starts, not when it ends.

use std::collections::VecDeque;
use std::error::Error;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum initiations allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
    /// Delay between two admission checks while the window is full
    pub poll_interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 60,
            window: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
            ..Self::default()
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Error returned by [`RateLimiter::run_with_limit`].
///
/// The operation's own error type is flattened into a message at the surface;
/// the original value stays reachable through `source()` and
/// [`RateLimitError::downcast_source`].
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Execution failed: {message}")]
    ExecutionFailed {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },
}

impl RateLimitError {
    /// Message of the wrapped error
    pub fn message(&self) -> &str {
        match self {
            RateLimitError::ExecutionFailed { message, .. } => message,
        }
    }

    /// Borrow the wrapped error as its concrete type, if it is one
    pub fn downcast_source<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match self {
            RateLimitError::ExecutionFailed { source, .. } => source.downcast_ref::<E>(),
        }
    }
}

/// Sliding-window limiter over initiation timestamps.
///
/// Keeps a FIFO of at most `max_requests` timestamps. A new call is admitted
/// when the FIFO is not full, or when its oldest entry has left the window.
/// Waiting is coarse: a full window is re-checked every `poll_interval`.
///
/// The check-and-record step runs under a mutex and never suspends, so
/// concurrent callers sharing one instance cannot overrun the bound.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    initiations: Mutex<VecDeque<Instant>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let capacity = (config.max_requests as usize).min(1024);
        Self {
            config,
            initiations: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Record an initiation if a slot is free right now.
    ///
    /// A limiter configured with `max_requests == 0` never admits.
    pub fn try_admit(&self) -> bool {
        let max = self.config.max_requests as usize;
        if max == 0 {
            return false;
        }

        let now = Instant::now();
        let mut initiations = self.initiations();

        if initiations.len() >= max {
            if let Some(oldest) = initiations.front() {
                if now.duration_since(*oldest) < self.config.window {
                    return false;
                }
            }
        }

        initiations.push_back(now);
        while initiations.len() > max {
            initiations.pop_front();
        }
        true
    }

    /// Wait until a slot is free, then record the initiation.
    pub async fn admit(&self) {
        let mut waiting = false;
        while !self.try_admit() {
            if !waiting {
                tracing::debug!(
                    max_requests = self.config.max_requests,
                    window_ms = self.config.window_ms(),
                    "Rate limit window full, waiting for a free slot"
                );
                waiting = true;
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Number of recorded initiations still inside the trailing window
    pub fn in_window(&self) -> usize {
        let now = Instant::now();
        self.initiations()
            .iter()
            .filter(|started| now.duration_since(**started) < self.config.window)
            .count()
    }

    /// Admit, then run `operation`.
    ///
    /// Any error from `operation` comes back as [`RateLimitError::ExecutionFailed`].
    pub async fn run_with_limit<F, Fut, T, E>(&self, operation: F) -> Result<T, RateLimitError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Error + Send + Sync + 'static,
    {
        self.admit().await;
        operation()
            .await
            .map_err(|err| RateLimitError::ExecutionFailed {
                message: err.to_string(),
                source: Box::new(err),
            })
    }

    fn initiations(&self) -> MutexGuard<'_, VecDeque<Instant>> {
        self.initiations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
