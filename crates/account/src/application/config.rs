//! Application Configuration
//!
//! Configuration for the account form pipeline.

use std::time::Duration;

/// Form pipeline configuration
#[derive(Debug, Clone)]
pub struct FormsConfig {
    /// Latency of the simulated account round trip
    pub submit_latency: Duration,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            submit_latency: Duration::from_millis(1500),
        }
    }
}

impl FormsConfig {
    /// Config for development and tests (no artificial latency)
    pub fn development() -> Self {
        Self {
            submit_latency: Duration::ZERO,
        }
    }

    /// Get the submit latency in milliseconds
    pub fn submit_latency_ms(&self) -> u64 {
        self.submit_latency.as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latency() {
        assert_eq!(FormsConfig::default().submit_latency_ms(), 1500);
    }

    #[test]
    fn test_development_has_no_latency() {
        assert_eq!(FormsConfig::development().submit_latency, Duration::ZERO);
    }
}
