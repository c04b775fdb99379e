//! Main TUI application state and logic

use crate::command::{parse_command, Command};
use crate::session::Visualizer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Operations bound to the number keys, in key order
pub const DEMO_OPERATIONS: [&str; 5] =
    ["push 60", "pop", "find 30", "slice 1 4", "splice 2 99"];

/// Whether keys navigate playback or edit the operation line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command(String),
}

/// The main application state
pub struct App {
    /// Current array and playback
    pub visualizer: Visualizer,

    /// Keyboard routing
    pub input_mode: InputMode,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a visualizer session
    pub fn new(visualizer: Visualizer) -> Self {
        App {
            visualizer,
            input_mode: InputMode::Normal,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Fire any autoplay ticks that are due
            let playback = self.visualizer.playback_mut();
            if playback.poll(Instant::now()) > 0 {
                let message = if playback.is_playing() {
                    "Playing..."
                } else {
                    "Playback complete"
                };
                self.set_status(message);
            }

            // Use poll with timeout so autoplay keeps running between keys
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Array (top), narration, operation line, status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(9),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let playback = self.visualizer.playback();
        let active = playback.active_snapshot();

        super::panes::render_array_pane(frame, rows[0], active);
        super::panes::render_narration_pane(frame, rows[1], active);

        let input = match &self.input_mode {
            InputMode::Command(text) => Some(text.as_str()),
            InputMode::Normal => None,
        };
        super::panes::render_command_pane(frame, rows[2], input, self.visualizer.array());

        super::panes::render_status_bar(
            frame,
            rows[3],
            &self.status_message,
            self.status_is_error,
            playback,
        );
    }

    /// Route a key press by input mode
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Command(_) => self.handle_command_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(':') => {
                self.input_mode = InputMode::Command(String::new());
                self.set_status("Type an operation");
            }
            // Number keys run the demo operations
            KeyCode::Char(c @ '1'..='5') => {
                let slot = c as usize - '1' as usize;
                self.run_command_line(DEMO_OPERATIONS[slot]);
            }
            KeyCode::Left => {
                self.visualizer.playback_mut().pause();
                if self.visualizer.playback_mut().step_backward() {
                    self.set_status("Stepped backward");
                } else {
                    self.set_status("Already at the first step");
                }
            }
            KeyCode::Right => {
                self.visualizer.playback_mut().pause();
                if self.visualizer.playback_mut().step_forward() {
                    self.set_status("Stepped forward");
                } else {
                    self.set_status("Already at the last step");
                }
            }
            KeyCode::Char(' ') => {
                // Toggle autoplay (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    let playback = self.visualizer.playback_mut();
                    playback.toggle_play();
                    let message = if playback.is_playing() {
                        "Playing..."
                    } else if playback.is_at_end() {
                        "Nothing left to play"
                    } else {
                        "Paused"
                    };
                    self.set_status(message);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.visualizer.playback_mut().speed_up();
                self.report_speed();
            }
            KeyCode::Char('-') => {
                self.visualizer.playback_mut().speed_down();
                self.report_speed();
            }
            KeyCode::Backspace => {
                self.visualizer.playback_mut().reset();
                self.set_status("Jumped to start");
            }
            KeyCode::Enter => {
                self.visualizer.playback_mut().jump_to_end();
                self.set_status("Jumped to end");
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        let InputMode::Command(text) = &mut self.input_mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.set_status("Cancelled");
            }
            KeyCode::Enter => {
                let line = std::mem::take(text);
                self.input_mode = InputMode::Normal;
                self.run_command_line(&line);
            }
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => {
                text.push(c);
            }
            _ => {}
        }
    }

    /// Parse and execute one operation line, reporting the outcome
    pub fn run_command_line(&mut self, line: &str) {
        match parse_command(line) {
            Ok(command) => self.execute(&command),
            Err(e) => {
                tracing::warn!(input = line, error = %e, "rejected operation");
                self.status_message = format!("Error: {}", e);
                self.status_is_error = true;
            }
        }
    }

    fn execute(&mut self, command: &Command) {
        let execution = self.visualizer.execute(command);
        if execution.steps == 0 {
            self.status_message = format!("{}: missing operand", command.kind);
            self.status_is_error = true;
        } else {
            self.set_status(&format!("{} ({} steps)", command, execution.steps));
        }
    }

    fn report_speed(&mut self) {
        let ms = self.visualizer.playback().interval().as_millis();
        self.set_status(&format!("Interval {}ms", ms));
    }

    fn set_status(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.status_is_error = false;
    }
}
