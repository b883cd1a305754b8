// crates/mindgaps-core/src/config.rs
// Site configuration with serde defaults

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level site configuration.
///
/// Every field has a default, so a host page only needs to embed the values
/// it wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselTiming,
    pub notification: NotificationConfig,
    pub contact: ContactConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub preload_images: Vec<String>,
    pub service_worker: ServiceWorkerConfig,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselTiming::default(),
            notification: NotificationConfig::default(),
            contact: ContactConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
            preload_images: vec![
                "https://imagizer.imageshack.com/img922/9554/MMjUt8.jpg".to_string(),
            ],
            service_worker: ServiceWorkerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configured log level, or the parse error for an unknown name
    pub fn try_level(&self) -> std::result::Result<log::Level, log::ParseLevelError> {
        self.log_level.parse()
    }

    /// Configured log level, falling back to `Debug` when unparsable
    pub fn level(&self) -> log::Level {
        self.try_level().unwrap_or(log::Level::Debug)
    }
}

fn default_log_level() -> String {
    "debug".to_string()
}

/// Carousel timer periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselTiming {
    /// Auto-advance period
    pub advance_ms: u64,
    /// Delay before a newly selected slide is marked active (exit transition)
    pub activation_delay_ms: u64,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            advance_ms: 5000,
            activation_delay_ms: 100,
        }
    }
}

impl CarouselTiming {
    pub fn advance_period(&self) -> Duration {
        Duration::from_millis(self.advance_ms)
    }

    pub fn activation_delay(&self) -> Duration {
        Duration::from_millis(self.activation_delay_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub ttl_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { ttl_ms: 5000 }
    }
}

impl NotificationConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Simulated round-trip of the contact form submission
    pub submit_latency_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 2000,
        }
    }
}

impl ContactConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }
}

/// Scroll offsets used by the navbar, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll depth past which the navbar gets the `scrolled` class
    pub scrolled_threshold: f64,
    /// How far above a section its nav link becomes active
    pub section_offset: f64,
    /// Space left above an anchor target after smooth scrolling (fixed navbar height)
    pub anchor_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            section_offset: 100.0,
            anchor_offset: 80.0,
        }
    }
}

/// IntersectionObserver options for scroll-reveal animations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Background caching agent registration. Shipped disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceWorkerConfig {
    pub enabled: bool,
    pub script: String,
}

impl Default for ServiceWorkerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            script: "/sw.js".to_string(),
        }
    }
}
