use super::particles::FieldConfig;
use crate::constants::*;
use std::time::Duration;

/// Runtime knobs for the page, defaulting to the tuning constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub field: FieldConfig,
    pub reveal_threshold: f64,
    pub hero_entrance_delay: Duration,
    pub spotlight_debounce: Duration,
    pub spotlight_activate: Duration,
    pub spotlight_lifetime: Duration,
    pub notice_lifetime: Duration,
    pub contact_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            reveal_threshold: REVEAL_THRESHOLD,
            hero_entrance_delay: Duration::from_millis(HERO_ENTRANCE_DELAY_MS),
            spotlight_debounce: Duration::from_millis(SPOTLIGHT_DEBOUNCE_MS),
            spotlight_activate: Duration::from_millis(SPOTLIGHT_ACTIVATE_MS),
            spotlight_lifetime: Duration::from_millis(SPOTLIGHT_LIFETIME_MS),
            notice_lifetime: Duration::from_millis(NOTICE_LIFETIME_MS),
            contact_endpoint: CONTACT_ENDPOINT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Apply `data-*` overrides. `lookup` receives the attribute name without
    /// the `data-` prefix. Unparsable values are logged and skipped;
    /// `max-particles` can only lower the particle cap.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup("contact-endpoint") {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                self.contact_endpoint = endpoint.to_string();
            }
        }
        if let Some(raw) = lookup("reveal-threshold") {
            match raw.trim().parse::<f64>() {
                Ok(t) if (0.0..=1.0).contains(&t) => self.reveal_threshold = t,
                _ => log::warn!("[config] ignoring reveal-threshold={:?}", raw),
            }
        }
        if let Some(raw) = lookup("max-particles") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > MAX_PARTICLES => {
                    log::warn!("[config] max-particles={} clamped to {}", n, MAX_PARTICLES);
                    self.field.max_particles = MAX_PARTICLES;
                }
                Ok(n) => self.field.max_particles = n,
                Err(_) => log::warn!("[config] ignoring max-particles={:?}", raw),
            }
        }
        self
    }
}
