use super::event::{AppEvent, ReaderKey};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::chunking::{Chunker, JiebaTokenizer, Tokenizer};
use crate::engine::config::Config;
use crate::input::{self, LoadError, LoadedDocument};
use crate::playback::{DeadlineTimer, DisplayBuffer, PlaybackCommand, Scheduler, Timer};
use crate::ui::command::{command_to_app_event, parse_command};
use std::time::Duration;

const CONTEXT_WINDOW: usize = 1;

const HELP: &str = "@file load · @@ clipboard · text reads it · :wpm N · :stop · :q quit";

pub struct App<K, C = DeadlineTimer> {
    mode: AppMode,
    config: Config,
    chunker: Chunker<K>,
    scheduler: Scheduler<DisplayBuffer, C>,
    source: Option<String>,
    message: Option<String>,
    input: String,
}

impl App<JiebaTokenizer> {
    pub fn new(config: Config) -> Self {
        Self::with_parts(Chunker::default(), DeadlineTimer::new(), config)
    }
}

impl<K: Tokenizer, C: Timer> App<K, C> {
    pub fn with_parts(chunker: Chunker<K>, timer: C, config: Config) -> Self {
        let scheduler = Scheduler::new(
            Default::default(),
            &config.playback,
            DisplayBuffer::new(),
            timer,
        );
        Self {
            mode: AppMode::Command,
            config,
            chunker,
            scheduler,
            source: None,
            message: None,
            input: String::new(),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler<DisplayBuffer, C> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler<DisplayBuffer, C> {
        &mut self.scheduler
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => {
                let result = input::text::load(&path);
                self.open_result(result);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.open_result(result);
            }
            AppEvent::LoadText(text) => {
                let result = LoadedDocument::inline(&text);
                self.open_result(result);
            }
            AppEvent::SetSpeed(value) => {
                self.scheduler.set_speed_input(&value);
                self.message = Some(format!("Speed: {}", self.scheduler.speed()));
            }
            AppEvent::Stop => {
                self.scheduler.stop();
                self.message = None;
            }
            AppEvent::Quit => {
                self.scheduler.stop();
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => {
                self.message = Some(HELP.to_string());
            }
            AppEvent::InvalidCommand(input) => {
                self.message = Some(format!("Unknown command: {input}"));
            }
        }
    }

    /// Chunks the document and starts playing it from the top.
    pub fn open(&mut self, doc: LoadedDocument) {
        let units = self.chunker.chunk(&doc.text);
        if units.is_empty() {
            self.message = Some(format!("Nothing to read in {}", doc.source));
            return;
        }

        log::info!("opened {} ({} units)", doc.source, units.len());
        self.scheduler.load(units);
        self.source = Some(doc.source);
        self.message = None;
        self.mode = AppMode::Reading;
        self.scheduler.toggle();
    }

    fn open_result(&mut self, result: Result<LoadedDocument, LoadError>) {
        match result {
            Ok(doc) => self.open(doc),
            Err(e) => {
                log::warn!("load failed: {e}");
                self.message = Some(e.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: ReaderKey) {
        if self.mode != AppMode::Reading {
            return;
        }

        let playback = &self.config.playback;
        let command = match key {
            ReaderKey::TogglePause => PlaybackCommand::Toggle,
            ReaderKey::SeekBack => PlaybackCommand::seek_back(playback),
            ReaderKey::SeekForward => PlaybackCommand::seek_forward(playback),
            ReaderKey::Faster => PlaybackCommand::faster(playback),
            ReaderKey::Slower => PlaybackCommand::slower(playback),
            ReaderKey::Stop => PlaybackCommand::Stop,
            ReaderKey::Leave => {
                self.scheduler.stop();
                self.mode = AppMode::Command;
                return;
            }
            ReaderKey::Quit => {
                self.handle_event(AppEvent::Quit);
                return;
            }
        };
        self.scheduler.apply(command);
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Parses and runs the command deck line.
    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        let event = command_to_app_event(parse_command(&line));
        self.handle_event(event);
    }

    /// Runs a due playback tick. Returns whether one ran.
    pub fn poll_timer(&mut self) -> bool {
        self.scheduler.poll()
    }

    pub fn time_until_tick(&self) -> Option<Duration> {
        self.scheduler.timer().time_until_due()
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::empty(self.mode, self.scheduler.speed());
        state.status = self.scheduler.status();
        state.message = self.message.clone();
        state.input = self.input.clone();
        state.source = self.source.clone();

        let units = self.scheduler.units();
        if units.is_empty() {
            return state;
        }

        let index = self.scheduler.current_index();
        state.progress = (index + 1, units.len());
        state.current_unit = self.scheduler.sink().current().map(str::to_string);
        if state.current_unit.is_some() {
            state = state.with_context(units.as_slice(), index, CONTEXT_WINDOW);
        }
        state
    }
}
