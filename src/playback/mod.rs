//! Playback: a single-threaded scheduler that flashes display units one
//! at a time, driven by an injected timer and writing to an injected sink.

pub mod command;
pub mod scheduler;
pub mod sink;
pub mod speed;
pub mod state;
pub mod timer;

pub use command::PlaybackCommand;
pub use scheduler::Scheduler;
pub use sink::{DisplayBuffer, DisplaySink, RecordingSink};
pub use speed::Speed;
pub use state::{PlaybackState, PlaybackStatus, Transition};
pub use timer::{DeadlineTimer, ManualTimer, Timer, TimerId};
