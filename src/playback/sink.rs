/// Receives "show this now" events from the scheduler.
///
/// An empty string clears the display.
pub trait DisplaySink {
    fn show(&mut self, text: &str);

    fn clear(&mut self) {
        self.show("");
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn show(&mut self, text: &str) {
        (**self).show(text);
    }
}

/// Holds whatever is on screen right now. The terminal view reads from it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    current: String,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while the display is cleared.
    pub fn current(&self) -> Option<&str> {
        if self.current.is_empty() {
            None
        } else {
            Some(&self.current)
        }
    }
}

impl DisplaySink for DisplayBuffer {
    fn show(&mut self, text: &str) {
        self.current.clear();
        self.current.push_str(text);
    }
}

/// Keeps every event in order, clears included.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Events minus clears.
    pub fn shown(&self) -> Vec<&str> {
        self.events
            .iter()
            .map(String::as_str)
            .filter(|e| !e.is_empty())
            .collect()
    }

    pub fn last(&self) -> Option<&str> {
        self.events.last().map(String::as_str)
    }
}

impl DisplaySink for RecordingSink {
    fn show(&mut self, text: &str) {
        self.events.push(text.to_string());
    }
}
