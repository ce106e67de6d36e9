use crate::engine::config::PlaybackConfig;

/// Abstract controls accepted by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Toggle,
    Stop,
    /// Relative move in units.
    Seek(isize),
    /// Relative change in WPM.
    AdjustSpeed(i64),
}

impl PlaybackCommand {
    pub fn seek_forward(config: &PlaybackConfig) -> Self {
        Self::Seek(seek_magnitude(config))
    }

    pub fn seek_back(config: &PlaybackConfig) -> Self {
        Self::Seek(-seek_magnitude(config))
    }

    pub fn faster(config: &PlaybackConfig) -> Self {
        Self::AdjustSpeed(i64::from(config.speed_step))
    }

    pub fn slower(config: &PlaybackConfig) -> Self {
        Self::AdjustSpeed(-i64::from(config.speed_step))
    }
}

// Steps past isize::MAX clamp; seeking clamps to the sequence anyway.
fn seek_magnitude(config: &PlaybackConfig) -> isize {
    isize::try_from(config.seek_step).unwrap_or(isize::MAX)
}
