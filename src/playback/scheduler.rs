use super::command::PlaybackCommand;
use super::sink::DisplaySink;
use super::speed::Speed;
use super::state::{PlaybackState, PlaybackStatus, Transition};
use super::timer::{Timer, TimerId};
use crate::chunking::UnitSequence;
use crate::engine::config::PlaybackConfig;
use std::time::Duration;

/// Timer-driven playback over a fixed unit sequence.
///
/// At most one tick is pending at any time. Every command that changes
/// control flow cancels it before deciding whether to schedule another,
/// and ticks carrying any other id are dropped.
pub struct Scheduler<S, T> {
    units: UnitSequence,
    state: PlaybackState,
    /// Index the next tick will display.
    cursor: usize,
    pending: Option<TimerId>,
    sink: S,
    timer: T,
    wpm_floor: u32,
    fallback_delay: Duration,
}

impl<S: DisplaySink, T: Timer> Scheduler<S, T> {
    pub fn new(units: UnitSequence, config: &PlaybackConfig, sink: S, timer: T) -> Self {
        Self {
            units,
            state: PlaybackState::new(config.speed),
            cursor: 0,
            pending: None,
            sink,
            timer,
            wpm_floor: config.wpm_floor,
            fallback_delay: Duration::from_millis(config.fallback_delay_ms),
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn speed(&self) -> Speed {
        self.state.speed
    }

    /// Delay the next tick will be scheduled with.
    pub fn delay(&self) -> Duration {
        self.state.speed.delay(self.fallback_delay)
    }

    pub fn units(&self) -> &UnitSequence {
        &self.units
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn has_pending_tick(&self) -> bool {
        self.pending.is_some()
    }

    /// Swaps in a freshly chunked text. Playback stops and the position
    /// returns to the start; the speed is kept.
    pub fn load(&mut self, units: UnitSequence) {
        self.stop();
        log::debug!("loaded {} units", units.len());
        self.units = units;
    }

    pub fn apply(&mut self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::Toggle => self.toggle(),
            PlaybackCommand::Stop => self.stop(),
            PlaybackCommand::Seek(delta) => self.seek(delta),
            PlaybackCommand::AdjustSpeed(delta) => self.adjust_speed(delta),
        }
    }

    pub fn toggle(&mut self) {
        match self.state.status {
            PlaybackStatus::Stopped => {
                if self.units.is_empty() {
                    log::debug!("toggle ignored: nothing to read");
                    return;
                }
                self.cancel_pending();
                self.state.current_index = 0;
                self.cursor = 0;
                self.transition(Transition::Toggle);
                self.advance();
            }
            PlaybackStatus::Running => {
                self.cancel_pending();
                self.transition(Transition::Toggle);
            }
            PlaybackStatus::Paused => {
                self.transition(Transition::Toggle);
                self.advance();
            }
        }
    }

    /// Back to the start with a blank display.
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.transition(Transition::Stop);
        self.state.current_index = 0;
        self.cursor = 0;
        self.sink.clear();
    }

    /// Runs the pending tick if the timer says it is due.
    pub fn poll(&mut self) -> bool {
        match self.timer.take_expired() {
            Some(id) => {
                self.tick(id);
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self, id: TimerId) {
        if self.pending != Some(id) {
            log::trace!("dropping stale tick {id:?}");
            return;
        }
        self.pending = None;
        self.advance();
    }

    /// Moves by `delta` units, clamped to the sequence, and shows the
    /// target right away. While running, the next tick shows the unit
    /// after the target.
    pub fn seek(&mut self, delta: isize) {
        let Some(last) = self.units.last_index() else {
            return;
        };
        let target = self
            .state
            .current_index
            .saturating_add_signed(delta)
            .min(last);

        self.state.current_index = target;
        self.cursor = target + 1;
        self.sink.show(&self.units[target]);

        if self.state.status == PlaybackStatus::Running {
            self.reschedule();
        }
    }

    /// Sets the speed, never below the floor. Applies from the next tick.
    pub fn set_speed(&mut self, wpm: i64) {
        let wpm = wpm.clamp(self.wpm_floor as i64, u32::MAX as i64) as u32;
        self.state.speed = Speed::Wpm(wpm);
        log::debug!("speed set to {}", self.state.speed);

        if self.state.status == PlaybackStatus::Running {
            self.reschedule();
        }
    }

    /// Relative speed change. Ignored while the speed is invalid.
    pub fn adjust_speed(&mut self, delta: i64) {
        match self.state.speed.wpm() {
            Some(wpm) => self.set_speed(wpm as i64 + delta),
            None => log::debug!("speed change ignored: current speed is invalid"),
        }
    }

    /// Speed from free-form input; unparsable or non-positive input is
    /// ignored.
    pub fn set_speed_input(&mut self, input: &str) {
        match Speed::parse(input).wpm() {
            Some(wpm) => self.set_speed(wpm as i64),
            None => log::warn!("ignoring speed input {input:?}"),
        }
    }

    fn advance(&mut self) {
        if self.state.status != PlaybackStatus::Running {
            return;
        }

        if self.cursor >= self.units.len() {
            self.transition(Transition::Exhausted);
            self.sink.clear();
            return;
        }

        let index = self.cursor;
        self.sink.show(&self.units[index]);
        self.state.current_index = index;
        self.cursor += 1;
        self.reschedule();
    }

    fn reschedule(&mut self) {
        self.cancel_pending();
        let delay = self.delay();
        self.pending = Some(self.timer.schedule(delay));
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.timer.cancel(id);
        }
    }

    fn transition(&mut self, transition: Transition) {
        let from = self.state.status;
        self.state.status = from.next(transition);
        if from != self.state.status {
            log::info!(
                "playback {from} -> {} at unit {}/{}",
                self.state.status,
                self.state.current_index,
                self.units.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::sink::RecordingSink;
    use crate::playback::timer::ManualTimer;

    fn scheduler(units: &[&str]) -> Scheduler<RecordingSink, ManualTimer> {
        Scheduler::new(
            units.iter().copied().collect(),
            &PlaybackConfig::default(),
            RecordingSink::new(),
            ManualTimer::new(),
        )
    }

    fn fire(scheduler: &mut Scheduler<RecordingSink, ManualTimer>) -> bool {
        scheduler.timer_mut().advance_to_next() && scheduler.poll()
    }

    #[test]
    fn test_toggle_shows_first_unit_immediately() {
        let mut s = scheduler(&["美丽的", "花"]);
        s.toggle();
        assert_eq!(s.status(), PlaybackStatus::Running);
        assert_eq!(s.sink().shown(), vec!["美丽的"]);
        assert_eq!(s.timer().last_delay(), Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_toggle_on_empty_sequence_is_noop() {
        let mut s = scheduler(&[]);
        s.toggle();
        assert_eq!(s.status(), PlaybackStatus::Stopped);
        assert!(s.sink().events().is_empty());
        assert_eq!(s.timer().pending(), 0);
    }

    #[test]
    fn test_runs_to_exhaustion() {
        let mut s = scheduler(&["a", "b", "c"]);
        s.toggle();
        while fire(&mut s) {}
        assert_eq!(s.sink().events(), ["a", "b", "c", ""]);
        assert_eq!(s.status(), PlaybackStatus::Stopped);
        assert_eq!(s.current_index(), 2);
        assert!(!s.has_pending_tick());
    }

    #[test]
    fn test_pause_keeps_display_and_cancels_tick() {
        let mut s = scheduler(&["a", "b", "c"]);
        s.toggle();
        assert!(fire(&mut s));
        s.toggle();
        assert_eq!(s.status(), PlaybackStatus::Paused);
        assert_eq!(s.sink().last(), Some("b"));
        assert_eq!(s.timer().pending(), 0);
        assert!(!fire(&mut s));
    }

    #[test]
    fn test_resume_continues_after_last_shown() {
        let mut s = scheduler(&["a", "b", "c", "d"]);
        s.toggle();
        fire(&mut s);
        s.toggle();
        s.toggle();
        assert_eq!(s.status(), PlaybackStatus::Running);
        while fire(&mut s) {}
        assert_eq!(s.sink().shown(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_stop_resets_and_clears() {
        let mut s = scheduler(&["a", "b", "c"]);
        s.toggle();
        fire(&mut s);
        s.stop();
        assert_eq!(s.status(), PlaybackStatus::Stopped);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.sink().last(), Some(""));
        assert_eq!(s.timer().pending(), 0);
    }

    #[test]
    fn test_toggle_after_stop_restarts_from_zero() {
        let mut s = scheduler(&["a", "b", "c"]);
        s.toggle();
        fire(&mut s);
        s.stop();
        s.toggle();
        assert_eq!(s.sink().last(), Some("a"));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_seek_clamps_low() {
        let units: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let mut s = scheduler(&units.iter().map(String::as_str).collect::<Vec<_>>());
        s.seek(5);
        assert_eq!(s.current_index(), 5);
        s.seek(-1000);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.sink().last(), Some("0"));
    }

    #[test]
    fn test_seek_clamps_high() {
        let units: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let mut s = scheduler(&units.iter().map(String::as_str).collect::<Vec<_>>());
        s.seek(1000);
        assert_eq!(s.current_index(), 49);
        assert_eq!(s.sink().last(), Some("49"));
    }

    #[test]
    fn test_seek_on_empty_sequence_is_noop() {
        let mut s = scheduler(&[]);
        s.seek(20);
        assert_eq!(s.current_index(), 0);
        assert!(s.sink().events().is_empty());
    }

    #[test]
    fn test_seek_while_running_replaces_pending_tick() {
        let mut s = scheduler(&["a", "b", "c", "d", "e"]);
        s.toggle();
        s.seek(2);
        assert_eq!(s.sink().last(), Some("c"));
        assert_eq!(s.timer().pending(), 1);
        assert!(fire(&mut s));
        assert_eq!(s.sink().last(), Some("d"));
    }

    #[test]
    fn test_seek_while_paused_does_not_schedule() {
        let mut s = scheduler(&["a", "b", "c", "d"]);
        s.toggle();
        s.toggle();
        s.seek(2);
        assert_eq!(s.sink().last(), Some("c"));
        assert_eq!(s.timer().pending(), 0);
        s.toggle();
        assert_eq!(s.sink().last(), Some("d"));
    }

    #[test]
    fn test_stale_tick_is_dropped() {
        let mut s = scheduler(&["a", "b", "c"]);
        s.toggle();
        let stale = s.pending.expect("tick scheduled");
        s.seek(0);
        s.tick(stale);
        assert_eq!(s.sink().shown(), vec!["a", "a"]);
    }

    #[test]
    fn test_set_speed_floor() {
        let mut s = scheduler(&["a"]);
        s.set_speed(-50);
        assert_eq!(s.speed(), Speed::Wpm(100));
        s.set_speed(0);
        assert_eq!(s.speed(), Speed::Wpm(100));
        assert_eq!(s.delay(), Duration::from_millis(600));
    }

    #[test]
    fn test_set_speed_while_running_reschedules() {
        let mut s = scheduler(&["a", "b"]);
        s.toggle();
        s.set_speed(600);
        assert_eq!(s.timer().pending(), 1);
        assert_eq!(s.timer().last_delay(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_adjust_speed() {
        let mut s = scheduler(&["a"]);
        s.adjust_speed(100);
        assert_eq!(s.speed(), Speed::Wpm(400));
        s.adjust_speed(-1000);
        assert_eq!(s.speed(), Speed::Wpm(100));
    }

    #[test]
    fn test_invalid_speed_uses_fallback_and_ignores_adjustments() {
        let config = PlaybackConfig {
            speed: Speed::parse("fast"),
            ..PlaybackConfig::default()
        };
        let mut s = Scheduler::new(
            ["a", "b"].into_iter().collect(),
            &config,
            RecordingSink::new(),
            ManualTimer::new(),
        );
        s.toggle();
        assert_eq!(s.timer().last_delay(), Some(Duration::from_millis(200)));
        s.adjust_speed(100);
        assert_eq!(s.speed(), Speed::Invalid);
    }

    #[test]
    fn test_set_speed_input_ignores_garbage() {
        let mut s = scheduler(&["a"]);
        s.set_speed_input("abc");
        assert_eq!(s.speed(), Speed::Wpm(300));
        s.set_speed_input("-5");
        assert_eq!(s.speed(), Speed::Wpm(300));
        s.set_speed_input(" 450 ");
        assert_eq!(s.speed(), Speed::Wpm(450));
    }

    #[test]
    fn test_load_replaces_units_and_stops() {
        let mut s = scheduler(&["a", "b"]);
        s.toggle();
        s.load(["x", "y", "z"].into_iter().collect());
        assert_eq!(s.status(), PlaybackStatus::Stopped);
        assert_eq!(s.units().len(), 3);
        s.toggle();
        assert_eq!(s.sink().last(), Some("x"));
    }

    #[test]
    fn test_apply_maps_commands() {
        let mut s = scheduler(&["a", "b", "c"]);
        s.apply(PlaybackCommand::Toggle);
        s.apply(PlaybackCommand::Seek(1));
        s.apply(PlaybackCommand::AdjustSpeed(-100));
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.speed(), Speed::Wpm(200));
        s.apply(PlaybackCommand::Stop);
        assert_eq!(s.status(), PlaybackStatus::Stopped);
    }
}
