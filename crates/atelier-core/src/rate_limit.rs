//! Fixed-window request limiting.
//!
//! One counter per client key (IP), reset when its window expires. The map
//! is the only shared mutable structure in the gateway; dashmap shards the
//! locking per key.

use std::time::{Duration, Instant};

use dashmap::DashMap;

pub const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try again later.";

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window per-client rate limiter.
#[derive(Debug)]
pub struct RateLimiter {
    windows: DashMap<String, Window>,
    window: Duration,
    max_requests: u32,
}

impl RateLimiter {
    /// `max_requests == 0` disables limiting entirely.
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self { windows: DashMap::new(), window, max_requests }
    }

    /// Record one request for `key`; returns false when over the limit.
    pub fn check(&self, key: &str) -> bool {
        if self.max_requests == 0 {
            return true;
        }

        let now = Instant::now();
        let mut entry = self
            .windows
            .entry(key.to_string())
            .or_insert_with(|| Window { started: now, count: 0 });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }
}
