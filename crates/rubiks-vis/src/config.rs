//! Visualiser configuration.

use std::time::Duration;

use crate::camera::Viewport;
use crate::error::{Error, Result};

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TICK: Duration = Duration::from_millis(1000);
pub const DEFAULT_HOVER_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq)]
pub struct VisConfig {
    /// Base URL of the transformation service
    pub service_url: String,
    /// Interval between playback steps
    pub tick: Duration,
    /// Debounce before a hovered marker's tooltip appears
    pub hover_delay: Duration,
    /// Distance between neighbouring sub-cube centres
    pub cube_spacing: f32,
    pub viewport: Viewport,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            tick: DEFAULT_TICK,
            hover_delay: DEFAULT_HOVER_DELAY,
            cube_spacing: 1.0,
            viewport: Viewport::default(),
        }
    }
}

impl VisConfig {
    /// Create config from `RUBIKS_*` environment variables, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("RUBIKS_SERVICE_URL") {
            config.service_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(value) = lookup("RUBIKS_TICK_MS") {
            config.tick = Duration::from_millis(parse("RUBIKS_TICK_MS", value)?);
        }
        if let Some(value) = lookup("RUBIKS_HOVER_DELAY_MS") {
            config.hover_delay = Duration::from_millis(parse("RUBIKS_HOVER_DELAY_MS", value)?);
        }
        if let Some(value) = lookup("RUBIKS_CUBE_SPACING") {
            let spacing: f32 = parse("RUBIKS_CUBE_SPACING", value.clone())?;
            if !(spacing.is_finite() && spacing > 0.0) {
                return Err(Error::Config {
                    var: "RUBIKS_CUBE_SPACING",
                    value,
                });
            }
            config.cube_spacing = spacing;
        }
        if let Some(value) = lookup("RUBIKS_VIEWPORT") {
            let size = value
                .split_once('x')
                .and_then(|(w, h)| Some((w.trim().parse::<f32>().ok()?, h.trim().parse::<f32>().ok()?)))
                .filter(|&(w, h)| w > 0.0 && h > 0.0);
            let (width, height) = size.ok_or(Error::Config {
                var: "RUBIKS_VIEWPORT",
                value,
            })?;
            config.viewport = Viewport::new(width, height);
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T> {
    value.trim().parse().map_err(|_| Error::Config { var, value })
}
