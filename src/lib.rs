pub mod app;
pub mod chunking;
pub mod engine;
pub mod input;
pub mod playback;
pub mod ui;
