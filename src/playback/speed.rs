use crate::engine::timing::wpm_to_milliseconds;
use std::fmt;
use std::time::Duration;

/// Reading speed as entered by the user.
///
/// Input that is not a positive integer is kept as `Invalid` rather than
/// rejected; playback then runs at the configured fallback delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Wpm(u32),
    Invalid,
}

impl Speed {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(wpm) => Self::from_wpm(wpm),
            Err(_) => Self::Invalid,
        }
    }

    pub fn from_wpm(wpm: i64) -> Self {
        if wpm > 0 {
            Self::Wpm(wpm.min(u32::MAX as i64) as u32)
        } else {
            Self::Invalid
        }
    }

    pub fn wpm(&self) -> Option<u32> {
        match *self {
            Self::Wpm(wpm) if wpm > 0 => Some(wpm),
            _ => None,
        }
    }

    /// Time each unit stays on screen: `round(60000 / wpm)` ms.
    pub fn delay(&self, fallback: Duration) -> Duration {
        self.wpm()
            .map(|wpm| Duration::from_millis(wpm_to_milliseconds(wpm)))
            .unwrap_or(fallback)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wpm() {
            Some(wpm) => write!(f, "{wpm} WPM"),
            None => write!(f, "-- WPM"),
        }
    }
}
