// Configuration for the playback scheduler and the terminal theme.
// Environment variables can override the playback values at startup.

use crate::playback::Speed;
use std::env;

/// Playback configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Starting speed (default 300 WPM; invalid input falls back to a fixed delay)
    pub speed: Speed,

    /// Lowest speed reachable through speed changes (default 100 WPM)
    pub wpm_floor: u32,

    /// WPM added or removed per speed key press (default 100)
    pub speed_step: u32,

    /// Units skipped per seek key press (default 20)
    pub seek_step: usize,

    /// Delay per unit when the speed is not a positive number (default 200ms)
    pub fallback_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: Speed::Wpm(300),
            wpm_floor: 100,
            speed_step: 100,
            seek_step: 20,
            fallback_delay_ms: 200,
        }
    }
}

impl PlaybackConfig {
    fn apply_env(&mut self) {
        if let Ok(value) = env::var("SPEEDREAD_WPM") {
            self.speed = Speed::parse(&value);
            if self.speed == Speed::Invalid {
                log::warn!(
                    "SPEEDREAD_WPM={value:?} is not a positive number, using fallback delay"
                );
            }
        }
        if let Some(step) = parse_var("SPEEDREAD_SPEED_STEP") {
            self.speed_step = step;
        }
        if let Some(step) = parse_var("SPEEDREAD_SEEK_STEP") {
            self.seek_step = step;
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring {name}={value:?}: not a number");
            None
        }
    }
}

/// Display colours as hex strings, converted by the UI theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub background_color: String,
    pub text_color: String,
    pub anchor_color: String,
    pub dimmed_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#1A1B26".to_string(),
            text_color: "#A9B1D6".to_string(),
            anchor_color: "#F7768E".to_string(),
            dimmed_color: "#646E96".to_string(),
        }
    }
}

/// Master configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub theme: ThemeConfig,
}

impl Config {
    /// Defaults overlaid with `SPEEDREAD_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.playback.apply_env();
        config
    }
}
