pub mod config;
pub mod error;
pub mod ovp;
pub mod timing;

pub use config::{Config, PlaybackConfig, ThemeConfig};
pub use error::SpeedReadError;
pub use ovp::calculate_anchor_position;
pub use timing::wpm_to_milliseconds;
