pub mod app;
pub mod event;
pub mod mode;
pub mod render_state;

pub use app::App;
pub use event::{AppEvent, ReaderKey};
pub use mode::AppMode;
pub use render_state::RenderState;
