//! Per-client rate limiting
//!
//! Two rules per client IP: a minimum spacing between consecutive requests
//! and a cap on requests within a rolling minute. Rejected requests are not
//! counted.

use crate::shared::config::RateLimitConfig;
use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(60);

/// Клиентов больше этого числа: выметаем тех, кто молчит дольше окна
const SWEEP_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed,
    /// Previous request from the same client was too recent
    TooSoon,
    /// Per-minute quota used up
    QuotaExceeded,
}

#[derive(Debug, Default)]
struct ClientHistory {
    accepted: VecDeque<Instant>,
}

#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    per_minute: usize,
    disabled: bool,
    clients: Mutex<HashMap<IpAddr, ClientHistory>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            min_interval: Duration::from_millis(config.min_interval_ms),
            per_minute: config.per_minute as usize,
            disabled: config.disabled,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, client: IpAddr) -> RateLimitDecision {
        self.check_at(client, Instant::now())
    }

    pub fn check_at(&self, client: IpAddr, now: Instant) -> RateLimitDecision {
        if self.disabled {
            return RateLimitDecision::Allowed;
        }

        let mut clients = self
            .clients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if clients.len() > SWEEP_THRESHOLD {
            clients.retain(|_, history| {
                history
                    .accepted
                    .back()
                    .is_some_and(|last| now.saturating_duration_since(*last) < WINDOW)
            });
        }

        let history = clients.entry(client).or_default();
        while history
            .accepted
            .front()
            .is_some_and(|first| now.saturating_duration_since(*first) >= WINDOW)
        {
            history.accepted.pop_front();
        }

        if history.accepted.len() >= self.per_minute {
            return RateLimitDecision::QuotaExceeded;
        }
        if let Some(last) = history.accepted.back() {
            if now.saturating_duration_since(*last) < self.min_interval {
                return RateLimitDecision::TooSoon;
            }
        }

        history.accepted.push_back(now);
        RateLimitDecision::Allowed
    }
}
