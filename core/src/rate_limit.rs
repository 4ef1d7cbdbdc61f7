//! Per-endpoint sliding-window request budget.
//!
//! # Design
//! Each endpoint key owns a queue of admission timestamps. A request is
//! admitted when fewer than `max_requests` timestamps fall inside the trailing
//! `window`; rejected requests are not recorded and never queued. Stale
//! timestamps are pruned lazily, only for the key being checked.
//!
//! The window configuration is bound to a key the first time that key is
//! seen. Later calls carrying a different configuration keep the original one.
//!
//! All state sits behind one mutex so check-and-record is atomic with respect
//! to concurrent callers.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::clock::{Clock, SystemClock};

/// Window size and request budget for one endpoint key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: u32,
}

impl RateLimitConfig {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
        }
    }

    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(Duration::from_secs(60), max_requests)
    }
}

impl Default for RateLimitConfig {
    /// 30 requests per rolling minute.
    fn default() -> Self {
        Self::per_minute(30)
    }
}

#[derive(Debug)]
struct Window {
    config: RateLimitConfig,
    hits: VecDeque<Instant>,
}

impl Window {
    fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            hits: VecDeque::new(),
        }
    }

    fn prune(&mut self, now: Instant) {
        while let Some(oldest) = self.hits.front() {
            if within(*oldest, now, self.config.window) {
                break;
            }
            self.hits.pop_front();
        }
    }

    fn live(&self, now: Instant) -> usize {
        self.hits
            .iter()
            .filter(|hit| within(**hit, now, self.config.window))
            .count()
    }
}

fn within(hit: Instant, now: Instant, window: Duration) -> bool {
    now.saturating_duration_since(hit) <= window
}

/// Sliding-window limiter keyed by endpoint.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    clock: Arc<dyn Clock>,
    default_config: RateLimitConfig,
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), RateLimitConfig::default())
    }
}

impl RateLimiter {
    /// `default_config` answers `remaining` for keys that were never checked.
    pub fn new(clock: Arc<dyn Clock>, default_config: RateLimitConfig) -> Self {
        Self {
            clock,
            default_config,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn default_config(&self) -> RateLimitConfig {
        self.default_config
    }

    /// Admit one request for `key` if its budget allows, recording it.
    pub fn is_allowed(&self, key: &str, config: RateLimitConfig) -> bool {
        let now = self.clock.now();
        let mut windows = self.lock();
        let window = windows
            .entry(key.to_string())
            .or_insert_with(|| Window::new(config));

        if window.config != config {
            debug!(
                key,
                bound = ?window.config,
                requested = ?config,
                "ignoring rate limit reconfiguration"
            );
        }

        window.prune(now);
        if window.hits.len() < window.config.max_requests as usize {
            window.hits.push_back(now);
            debug!(
                key,
                used = window.hits.len(),
                max = window.config.max_requests,
                "request admitted"
            );
            true
        } else {
            debug!(key, max = window.config.max_requests, "request rejected");
            false
        }
    }

    /// Requests still admissible for `key` in the current window.
    pub fn remaining(&self, key: &str) -> u32 {
        self.remaining_with(key, self.default_config)
    }

    /// Like `remaining`, but a key that was never checked answers from
    /// `fresh` instead of the limiter default.
    pub fn remaining_with(&self, key: &str, fresh: RateLimitConfig) -> u32 {
        let now = self.clock.now();
        let windows = self.lock();
        match windows.get(key) {
            Some(window) => {
                let live = u32::try_from(window.live(now)).unwrap_or(u32::MAX);
                window.config.max_requests.saturating_sub(live)
            }
            None => fresh.max_requests,
        }
    }

    /// Drop all recorded windows.
    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Window>> {
        // A panic while holding the lock leaves only timestamps behind,
        // which are still valid.
        self.windows.lock().unwrap_or_else(|e| e.into_inner())
    }
}
