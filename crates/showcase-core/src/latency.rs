//! Simulated request latency
//!
//! Every collection operation waits as if it crossed a network boundary, so
//! callers exercise the same loading states they will see against a real
//! backend.

use std::time::Duration;

use crate::config::Config;

/// Artificial delays applied by the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Delay before each collection read or write
    pub request: Duration,
    /// Delay after the session slot is cleared on logout
    pub logout: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            request: Duration::from_millis(600),
            logout: Duration::from_millis(200),
        }
    }
}

impl Latency {
    /// No artificial delay at all
    pub fn none() -> Self {
        Self {
            request: Duration::ZERO,
            logout: Duration::ZERO,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            request: Duration::from_millis(config.latency_ms),
            logout: Duration::from_millis(config.logout_latency_ms),
        }
    }

    /// Wait out the per-request delay
    pub async fn request(&self) {
        pause(self.request).await;
    }

    /// Wait out the logout delay
    pub async fn logout(&self) {
        pause(self.logout).await;
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
