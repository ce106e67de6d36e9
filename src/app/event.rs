/// Application events produced by the command deck
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    LoadText(String),
    SetSpeed(String),
    Stop,
    Quit,
    Help,
    InvalidCommand(String),
}

/// Keys understood while reading
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReaderKey {
    TogglePause,
    SeekBack,
    SeekForward,
    Faster,
    Slower,
    Stop,
    /// Stop and return to the command deck
    Leave,
    Quit,
}
