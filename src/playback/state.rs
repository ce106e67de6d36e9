use super::speed::Speed;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Inputs that move the status machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Toggle,
    Stop,
    /// The last unit has been shown.
    Exhausted,
}

impl PlaybackStatus {
    /// Stopped → Running → Paused → Running ...; Stop always lands in
    /// Stopped; exhaustion only ends a running session.
    pub fn next(self, transition: Transition) -> Self {
        match (self, transition) {
            (Self::Stopped, Transition::Toggle) => Self::Running,
            (Self::Running, Transition::Toggle) => Self::Paused,
            (Self::Paused, Transition::Toggle) => Self::Running,
            (_, Transition::Stop) => Self::Stopped,
            (Self::Running, Transition::Exhausted) => Self::Stopped,
            (status, Transition::Exhausted) => status,
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stopped => "STOPPED",
            Self::Running => "READING",
            Self::Paused => "PAUSED",
        };
        f.write_str(label)
    }
}

/// Position and speed of one playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    /// Last displayed unit, or 0 before anything was shown.
    pub current_index: usize,
    pub speed: Speed,
}

impl PlaybackState {
    pub fn new(speed: Speed) -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            current_index: 0,
            speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let status = PlaybackStatus::Stopped.next(Transition::Toggle);
        assert_eq!(status, PlaybackStatus::Running);
        let status = status.next(Transition::Toggle);
        assert_eq!(status, PlaybackStatus::Paused);
        let status = status.next(Transition::Toggle);
        assert_eq!(status, PlaybackStatus::Running);
    }

    #[test]
    fn test_stop_from_anywhere() {
        for status in [
            PlaybackStatus::Stopped,
            PlaybackStatus::Running,
            PlaybackStatus::Paused,
        ] {
            assert_eq!(status.next(Transition::Stop), PlaybackStatus::Stopped);
        }
    }

    #[test]
    fn test_exhaustion_only_ends_running() {
        assert_eq!(
            PlaybackStatus::Running.next(Transition::Exhausted),
            PlaybackStatus::Stopped
        );
        assert_eq!(
            PlaybackStatus::Paused.next(Transition::Exhausted),
            PlaybackStatus::Paused
        );
    }

    #[test]
    fn test_new_state_is_stopped_at_start() {
        let state = PlaybackState::new(Speed::Wpm(300));
        assert_eq!(state.status, PlaybackStatus::Stopped);
        assert_eq!(state.current_index, 0);
    }
}
