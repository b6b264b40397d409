//! Cursor state machine over a recorded trace

use std::time::Instant;

use super::speed::Speed;
use crate::errors::{Result, VisualizerError};
use crate::model::{Element, Trace};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No trace loaded
    Idle,
    Paused,
    Running,
}

/// What a renderer should show right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState<'a> {
    pub array: &'a [Element],
    pub comparing: &'a [usize],
    pub swapping: &'a [usize],
    pub sorted: &'a [usize],
    pub cursor: usize,
    pub total: usize,
}

/// Drives a cursor over a [`Trace`].
///
/// The cursor ranges over `0..=trace.len()`. Cursor `n > 0` shows step `n - 1`;
/// cursor 0 shows the unsorted input with no highlights.
///
/// Scheduling is cooperative: while running, the player holds a single pending
/// tick deadline, and the owner calls [`Player::poll`] from its event loop to fire
/// it. Every transition out of `Running` drops the pending tick.
#[derive(Debug)]
pub struct Player {
    trace: Option<Trace>,
    cursor: usize,
    state: PlaybackState,
    speed: Speed,
    next_tick: Option<Instant>,
}

impl Player {
    pub fn new(speed: Speed) -> Self {
        Player {
            trace: None,
            cursor: 0,
            state: PlaybackState::Idle,
            speed,
            next_tick: None,
        }
    }

    /// Take ownership of `trace` and park at cursor 0.
    ///
    /// Refused while running so the live trace is never swapped out from under a
    /// pending tick.
    pub fn load_trace(&mut self, trace: Trace) -> Result<()> {
        if self.state == PlaybackState::Running {
            tracing::warn!("trace load rejected while running");
            return Err(VisualizerError::PlaybackRunning);
        }
        tracing::debug!(steps = trace.len(), "trace loaded");
        self.trace = Some(trace);
        self.cursor = 0;
        self.state = PlaybackState::Paused;
        self.next_tick = None;
        Ok(())
    }

    /// Start playback from the current cursor. Returns false when there is
    /// nothing left to play (no trace, or cursor already at the end).
    pub fn play(&mut self) -> bool {
        self.play_at(Instant::now())
    }

    /// [`Player::play`] with an explicit clock reading
    pub fn play_at(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Paused || self.cursor >= self.total() {
            return false;
        }
        self.state = PlaybackState::Running;
        self.next_tick = Some(now + self.speed.step_delay());
        tracing::debug!(cursor = self.cursor, "playback started");
        true
    }

    /// Stop at the current cursor, cancelling any pending tick
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
            self.next_tick = None;
            tracing::debug!(cursor = self.cursor, "playback paused");
        }
    }

    /// Fire the pending tick if it is due. Returns true when the cursor advanced.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(deadline) if self.state == PlaybackState::Running && now >= deadline => {}
            _ => return false,
        }

        self.cursor += 1;
        if self.cursor >= self.total() {
            self.state = PlaybackState::Paused;
            self.next_tick = None;
            tracing::debug!(cursor = self.cursor, "playback reached end of trace");
        } else {
            // Schedule from the deadline so a late poll does not drift the cadence
            self.next_tick = Some(deadline_after(now, self.next_tick, self.speed));
        }
        true
    }

    /// Move the cursor to `index`, clamped to `0..=total`. Pauses first if running.
    pub fn seek(&mut self, index: usize) {
        if self.state == PlaybackState::Idle {
            return;
        }
        self.pause();
        self.cursor = index.min(self.total());
        tracing::trace!(cursor = self.cursor, "seek");
    }

    pub fn step_forward(&mut self) {
        self.seek(self.cursor.saturating_add(1));
    }

    pub fn step_back(&mut self) {
        self.seek(self.cursor.saturating_sub(1));
    }

    /// Rewind to cursor 0, keeping the loaded trace. Idle stays Idle.
    pub fn reset(&mut self) {
        self.next_tick = None;
        self.cursor = 0;
        if self.trace.is_some() {
            self.state = PlaybackState::Paused;
        }
        tracing::debug!("playback reset");
    }

    /// Discard the trace and return to Idle
    pub fn unload(&mut self) -> Option<Trace> {
        self.next_tick = None;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        self.trace.take()
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of steps in the loaded trace (0 when idle)
    pub fn total(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn is_at_end(&self) -> bool {
        self.trace.is_some() && self.cursor >= self.total()
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Deadline of the pending tick, if one is scheduled
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Current display state, or `None` when no trace is loaded
    pub fn display(&self) -> Option<DisplayState<'_>> {
        let trace = self.trace.as_ref()?;
        let total = trace.len();

        let state = match self.cursor.checked_sub(1).and_then(|idx| trace.get(idx)) {
            Some(step) => DisplayState {
                array: &step.array,
                comparing: &step.comparing,
                swapping: &step.swapping,
                sorted: &step.sorted,
                cursor: self.cursor,
                total,
            },
            None => DisplayState {
                array: trace.initial(),
                comparing: &[],
                swapping: &[],
                sorted: &[],
                cursor: self.cursor,
                total,
            },
        };
        Some(state)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Speed::default())
    }
}

fn deadline_after(now: Instant, previous: Option<Instant>, speed: Speed) -> Instant {
    let delay = speed.step_delay();
    match previous {
        Some(prev) if prev + delay > now => prev + delay,
        _ => now + delay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::elements_from_values;
    use crate::trace::{generate, Algorithm};
    use std::time::Duration;

    fn loaded(values: &[u32]) -> Player {
        let mut player = Player::new(Speed::new(100).unwrap());
        let trace = generate(Algorithm::Bubble, &elements_from_values(values));
        player.load_trace(trace).unwrap();
        player
    }

    #[test]
    fn test_idle_until_loaded() {
        let mut player = Player::default();
        assert_eq!(player.state(), PlaybackState::Idle);
        assert!(!player.play());
        assert!(player.display().is_none());
    }

    #[test]
    fn test_load_parks_at_start() {
        let player = loaded(&[3, 1, 2]);
        let display = player.display().unwrap();

        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(display.cursor, 0);
        assert_eq!(display.array[0].value(), 3);
        assert!(display.sorted.is_empty());
    }

    #[test]
    fn test_pause_before_tick_keeps_cursor() {
        let mut player = loaded(&[3, 1, 2]);
        let start = Instant::now();

        assert!(player.play_at(start));
        player.pause();

        assert_eq!(player.cursor(), 0);
        assert!(player.next_tick().is_none());
        // A stale deadline must not advance anything
        assert!(!player.poll(start + Duration::from_secs(5)));
        assert_eq!(player.cursor(), 0);
    }

    #[test]
    fn test_ticks_advance_and_stop_at_end() {
        let mut player = loaded(&[2, 1]);
        let total = player.total();
        let mut now = Instant::now();
        player.play_at(now);

        let mut ticks = 0;
        while player.is_running() {
            now = player.next_tick().unwrap();
            assert!(player.poll(now));
            ticks += 1;
        }

        assert_eq!(ticks, total);
        assert_eq!(player.cursor(), total);
        assert_eq!(player.state(), PlaybackState::Paused);
        assert!(!player.play_at(now));
    }

    #[test]
    fn test_poll_before_deadline_does_nothing() {
        let mut player = loaded(&[2, 1]);
        let start = Instant::now();
        player.play_at(start);

        assert!(!player.poll(start));
        assert_eq!(player.cursor(), 0);
    }

    #[test]
    fn test_load_rejected_while_running() {
        let mut player = loaded(&[2, 1]);
        player.play_at(Instant::now());

        let other = generate(Algorithm::Merge, &elements_from_values(&[9, 8, 7]));
        assert_eq!(player.load_trace(other), Err(VisualizerError::PlaybackRunning));
        assert_eq!(player.trace().unwrap().initial()[0].value(), 2);
        assert!(player.is_running());
    }

    #[test]
    fn test_seek_clamps_and_pauses() {
        let mut player = loaded(&[3, 2, 1]);
        player.play_at(Instant::now());

        player.seek(10_000);
        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.cursor(), player.total());
        assert!(player.next_tick().is_none());

        player.step_forward();
        assert_eq!(player.cursor(), player.total());
        player.seek(0);
        player.step_back();
        assert_eq!(player.cursor(), 0);
    }

    #[test]
    fn test_reset_keeps_trace() {
        let mut player = loaded(&[3, 2, 1]);
        player.seek(4);
        player.reset();

        assert_eq!(player.cursor(), 0);
        assert_eq!(player.state(), PlaybackState::Paused);
        assert!(player.trace().is_some());

        assert!(player.unload().is_some());
        assert_eq!(player.state(), PlaybackState::Idle);
        player.reset();
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_reset_while_running_cancels_tick() {
        let mut player = loaded(&[3, 2, 1]);
        let start = Instant::now();

        assert!(player.play_at(start));
        let first = player.next_tick().unwrap();
        assert!(player.poll(first));
        assert_eq!(player.cursor(), 1);

        player.reset();
        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.cursor(), 0);
        assert!(player.next_tick().is_none());

        assert!(!player.poll(start + Duration::from_secs(5)));
        assert_eq!(player.cursor(), 0);
    }

    #[test]
    fn test_display_tracks_cursor() {
        let mut player = loaded(&[5, 3, 8, 1]);
        player.step_forward();

        let display = player.display().unwrap();
        assert_eq!(display.cursor, 1);
        assert_eq!(display.comparing, &[0, 1]);
        assert_eq!(display.total, player.total());
    }
}
