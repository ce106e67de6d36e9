use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode plus the alternate screen, undone on drop or panic.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        if let Err(e) = io::stdout().execute(terminal::EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        set_panic_hook();
        log::debug!("terminal switched to raw mode");

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
        log::debug!("terminal restored");
    }
}

fn restore() {
    let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            previous(panic_info);
        }));
    });
}
