//! Runtime configuration for the toolkit.
//!
//! Tunables can be loaded from environment variables or constructed
//! programmatically; [`UixConfig::apply`] pushes the document-level
//! settings onto a [`dom::Document`].

use dom::Document;
use std::env;
use std::time::Duration;

/// Runtime configuration: animation stepping and the lazyload throttle
/// window.
#[derive(Clone, Debug)]
pub struct UixConfig {
    /// Animation step interval in milliseconds (minimum 1 ms).
    pub animation_tick_ms: u64,
    /// Throttle window for the lazyload scroll listener, in milliseconds.
    pub lazyload_throttle_ms: u64,
}

impl Default for UixConfig {
    fn default() -> Self {
        Self {
            animation_tick_ms: 16,
            lazyload_throttle_ms: 50,
        }
    }
}

impl UixConfig {
    /// Load configuration from environment variables.
    ///
    /// - `UIX_ANIMATION_TICK_MS`: animation step interval (default: 16)
    /// - `UIX_LAZYLOAD_THROTTLE_MS`: lazyload throttle window (default: 50)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let animation_tick_ms = env::var("UIX_ANIMATION_TICK_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(defaults.animation_tick_ms)
            .max(1);
        let lazyload_throttle_ms = env::var("UIX_LAZYLOAD_THROTTLE_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(defaults.lazyload_throttle_ms);
        Self {
            animation_tick_ms,
            lazyload_throttle_ms,
        }
    }

    /// Push document-level settings onto `doc`.
    pub fn apply(&self, doc: &mut Document) {
        doc.set_animation_tick(Duration::from_millis(self.animation_tick_ms));
    }

    /// The lazyload throttle window as a `Duration`.
    pub fn lazyload_throttle(&self) -> Duration {
        Duration::from_millis(self.lazyload_throttle_ms)
    }
}
