use speedread::app::{App, AppEvent};
use speedread::engine::{Config, SpeedReadError};
use speedread::ui::{Theme, TuiManager};

fn main() -> Result<(), SpeedReadError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = Config::from_env();
    let theme = Theme::from_config(&config.theme);
    let mut app = App::new(config);

    // A path argument is loaded like `@path`; failures land on the command deck
    if let Some(path) = std::env::args().nth(1) {
        app.handle_event(AppEvent::LoadFile(path));
    }

    let mut tui = TuiManager::new(theme)?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
