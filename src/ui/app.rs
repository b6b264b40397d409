//! Main TUI application state and logic

use crate::config::Config;
use crate::errors::Result;
use crate::factory::{ArrayFactory, MAX_SIZE, MIN_SIZE};
use crate::model::{Element, TraceStats};
use crate::playback::Player;
use crate::trace::{generate, Algorithm};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const SIZE_STEP: usize = 5;
const SPEED_STEP: u32 = 5;

/// The main application state
pub struct App {
    /// Source of fresh arrays
    factory: ArrayFactory,

    /// The unsorted input currently on screen
    array: Vec<Element>,

    /// Requested array size for the next "new array"
    size: usize,

    /// Selected sorting algorithm
    pub algorithm: Algorithm,

    /// Playback over the trace of `algorithm` on `array`
    pub player: Player,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create the app and record the first trace
    pub fn new(config: &Config) -> Result<Self> {
        let mut factory = match config.seed {
            Some(seed) => ArrayFactory::with_seed(seed),
            None => ArrayFactory::new(),
        };
        let array = factory.create(config.size)?;

        let mut app = App {
            factory,
            array,
            size: config.size,
            algorithm: config.algorithm,
            player: Player::new(config.speed),
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        app.regenerate()?;
        Ok(app)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.player.poll(Instant::now()) && !self.player.is_running() {
                self.status_message = "Playback complete".to_string();
            }

            // Short poll timeout keeps the tick cadence responsive
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Trace statistics of the loaded trace
    pub fn stats(&self) -> TraceStats {
        self.player
            .trace()
            .map(|trace| trace.stats())
            .unwrap_or_default()
    }

    /// Record a trace for the current array and algorithm and hand it to the player
    fn regenerate(&mut self) -> Result<()> {
        let trace = generate(self.algorithm, &self.array);
        self.player.load_trace(trace)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let header = Line::from(vec![
            Span::styled(
                " sortscope ",
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(DEFAULT_THEME.bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {}  {}  ·  size {}  ·  speed {} ({} ms/step)",
                    self.algorithm.name(),
                    self.algorithm.complexity(),
                    self.size,
                    self.player.speed().value(),
                    self.player.speed().step_delay().as_millis()
                ),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        let display = self.player.display();
        super::panes::render_bars_pane(frame, chunks[1], display.as_ref(), self.algorithm.name());

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                cursor: self.player.cursor(),
                total: self.player.total(),
                stats: self.stats(),
                is_playing: self.player.is_running(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                let before = self.player.cursor();
                self.player.seek(before + n);
                self.status_message = format!(
                    "Stepped forward {} step(s)",
                    self.player.cursor() - before
                );
            }
            KeyCode::Left => {
                self.player.step_back();
                self.status_message = "Stepped backward".to_string();
            }
            KeyCode::Right => {
                self.player.step_forward();
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Char(' ') => self.toggle_play(),
            KeyCode::Enter => {
                self.player.seek(self.player.total());
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.player.reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('a') => self.select_algorithm(self.algorithm.next()),
            KeyCode::Char('A') => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Char('n') => self.new_array(self.size),
            KeyCode::Char(']') => {
                self.new_array((self.size + SIZE_STEP).min(MAX_SIZE));
            }
            KeyCode::Char('[') => {
                self.new_array(self.size.saturating_sub(SIZE_STEP).max(MIN_SIZE));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.player.speed().faster(SPEED_STEP);
                self.player.set_speed(speed);
                self.status_message = format!("Speed {}", speed.value());
            }
            KeyCode::Char('-') => {
                let speed = self.player.speed().slower(SPEED_STEP);
                self.player.set_speed(speed);
                self.status_message = format!("Speed {}", speed.value());
            }
            _ => {}
        }
    }

    /// Play/pause; playing from the end starts over
    fn toggle_play(&mut self) {
        if self.player.is_running() {
            self.player.pause();
            self.status_message = "Paused".to_string();
            return;
        }
        if self.player.is_at_end() {
            self.player.reset();
        }
        self.status_message = if self.player.play() {
            "Playing...".to_string()
        } else {
            "Nothing to play".to_string()
        };
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        if self.player.is_running() {
            self.status_message = "Pause before changing algorithm".to_string();
            return;
        }
        self.algorithm = algorithm;
        self.status_message = match self.regenerate() {
            Ok(()) => format!("Selected {}", algorithm.name()),
            Err(e) => format!("Error: {}", e),
        };
    }

    fn new_array(&mut self, size: usize) {
        if self.player.is_running() {
            self.status_message = "Pause before changing the array".to_string();
            return;
        }
        let result = self.factory.create(size).and_then(|array| {
            self.array = array;
            self.size = size;
            self.regenerate()
        });
        self.status_message = match result {
            Ok(()) => format!("New array of {} elements", size),
            Err(e) => format!("Error: {}", e),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        let config = Config {
            seed: Some(3),
            size: 8,
            ..Config::default()
        };
        App::new(&config).unwrap()
    }

    #[test]
    fn test_changes_ignored_while_playing() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.player.is_running());

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.algorithm, Algorithm::Bubble);
        press(&mut app, KeyCode::Char('n'));
        assert!(app.player.is_running());
    }

    #[test]
    fn test_algorithm_change_reloads_trace() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.player.cursor(), 1);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.algorithm, Algorithm::Quick);
        assert_eq!(app.player.cursor(), 0);
    }

    #[test]
    fn test_play_from_end_restarts() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.player.is_at_end());

        press(&mut app, KeyCode::Char(' '));
        assert!(app.player.is_running());
        assert_eq!(app.player.cursor(), 0);
    }

    #[test]
    fn test_size_keys_stay_in_range() {
        let mut app = app();
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.size, MIN_SIZE);
        assert_eq!(app.array.len(), MIN_SIZE);
    }
}
