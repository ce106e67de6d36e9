use crate::app::mode::AppMode;
use crate::playback::{PlaybackStatus, Speed};

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub status: PlaybackStatus,
    pub current_unit: Option<String>,
    pub context_left: Vec<String>,
    pub context_right: Vec<String>,
    /// (current index, total units)
    pub progress: (usize, usize),
    pub speed: Speed,
    pub source: Option<String>,
    pub message: Option<String>,
    pub input: String,
}

impl RenderState {
    /// Create an empty render state for when no document is loaded
    pub fn empty(mode: AppMode, speed: Speed) -> Self {
        Self {
            mode,
            status: PlaybackStatus::Stopped,
            current_unit: None,
            context_left: vec![],
            context_right: vec![],
            progress: (0, 0),
            speed,
            source: None,
            message: None,
            input: String::new(),
        }
    }

    /// Neighbouring units around `current_index`, at most `window` per side.
    pub fn with_context(mut self, units: &[String], current_index: usize, window: usize) -> Self {
        if units.is_empty() || current_index >= units.len() {
            return self;
        }

        let start = current_index.saturating_sub(window);
        self.context_left = units[start..current_index].to_vec();

        let end = std::cmp::min(current_index + window + 1, units.len());
        self.context_right = units[current_index + 1..end].to_vec();

        self
    }
}
