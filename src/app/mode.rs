#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Command deck: load text, change settings.
    Command,
    /// A document is loaded; playback keys are live.
    Reading,
    Quit,
}
