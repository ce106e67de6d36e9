use crate::app::{App, AppEvent, AppMode, RenderState};
use crate::chunking::Tokenizer;
use crate::ui::keys::reader_key;
use crate::ui::reader::view::{
    render_command_deck, render_context, render_placeholder, render_progress_bar,
    render_status_line, render_unit,
};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Longest wait for input while no tick is due.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            _guard: guard,
        })
    }

    /// Draws, waits for a key or the next playback tick, and repeats until
    /// the app quits.
    pub fn run_event_loop<K: Tokenizer>(&mut self, app: &mut App<K>) -> io::Result<()> {
        while app.mode() != AppMode::Quit {
            self.render_frame(app)?;

            let timeout = app
                .time_until_tick()
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        handle_key(app, key);
                    }
                }
            }

            while app.poll_timer() {}
        }
        Ok(())
    }

    pub fn render_frame<K: Tokenizer>(&mut self, app: &App<K>) -> io::Result<()> {
        let state = app.get_render_state();
        let theme = self.theme;
        self.terminal.draw(|frame| draw(frame, &state, &theme))?;
        Ok(())
    }
}

fn handle_key<K: Tokenizer>(app: &mut App<K>, key: KeyEvent) {
    match app.mode() {
        AppMode::Reading => {
            if let Some(action) = reader_key(key) {
                app.handle_key(action);
            }
        }
        AppMode::Command => match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.handle_event(AppEvent::Quit);
            }
            KeyCode::Char(c) => app.push_input(c),
            KeyCode::Backspace => app.pop_input(),
            KeyCode::Enter => app.submit_input(),
            KeyCode::Esc => app.clear_input(),
            _ => {}
        },
        AppMode::Quit => {}
    }
}

fn draw(frame: &mut Frame, state: &RenderState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    match &state.current_unit {
        Some(unit) => draw_unit(frame, rows[0], unit, state, theme),
        None if state.mode == AppMode::Command && state.progress.1 == 0 => {
            frame.render_widget(render_placeholder(theme), centered_row(rows[0], 4));
        }
        None => {}
    }

    frame.render_widget(render_progress_bar(state.progress, theme), rows[1]);
    frame.render_widget(render_status_line(state, theme), rows[2]);
    if state.mode == AppMode::Command {
        frame.render_widget(render_command_deck(state, theme), rows[3]);
    }
}

fn draw_unit(frame: &mut Frame, area: Rect, unit: &str, state: &RenderState, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(centered_row(area, 1));

    frame.render_widget(
        render_context(&state.context_left, Alignment::Right, theme),
        columns[0],
    );
    frame.render_widget(render_unit(unit, theme), columns[1]);
    frame.render_widget(
        render_context(&state.context_right, Alignment::Left, theme),
        columns[2],
    );
}

fn centered_row(area: Rect, height: u16) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}
