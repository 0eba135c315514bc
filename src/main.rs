pub mod clipboard;
pub mod numeric;
pub mod runtime;
pub mod session;
pub mod ui;

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker};
use crate::session::{Axis, Field, Session};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;
const STEP: f64 = 0.1;

/// single-screen centering calculator tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A single-screen centering calculator for hanging artwork: enter the current position and the measured offsets on both sides, press enter, and the recentered coordinate lands on your clipboard."
)]
pub struct Cli {
    /// axis to center on at startup (switchable in the ui)
    #[clap(short = 'a', long, value_enum, default_value_t = AxisArg::Horizontal)]
    pub axis: AxisArg,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum AxisArg {
    Horizontal,
    Vertical,
}

impl AxisArg {
    fn as_axis(&self) -> Axis {
        match self {
            AxisArg::Horizontal => Axis::Horizontal,
            AxisArg::Vertical => Axis::Vertical,
        }
    }
}

/// Which form row receives keystrokes. Presentation state only; the
/// session never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    PreviousPosition,
    OffsetStart,
    OffsetEnd,
    Axis,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::PreviousPosition => Focus::OffsetStart,
            Focus::OffsetStart => Focus::OffsetEnd,
            Focus::OffsetEnd => Focus::Axis,
            Focus::Axis => Focus::PreviousPosition,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::PreviousPosition => Focus::Axis,
            Focus::OffsetStart => Focus::PreviousPosition,
            Focus::OffsetEnd => Focus::OffsetStart,
            Focus::Axis => Focus::OffsetEnd,
        }
    }

    /// The numeric field under focus, if the focused row is one.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::PreviousPosition => Some(Field::PreviousPosition),
            Focus::OffsetStart => Some(Field::OffsetStart),
            Focus::OffsetEnd => Some(Field::OffsetEnd),
            Focus::Axis => None,
        }
    }
}

pub struct App {
    pub session: Session,
    pub focus: Focus,
    pub copied: bool,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        Self::with_clipboard(cli, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(cli: &Cli, clipboard: Box<dyn ClipboardSink>) -> Self {
        let mut session = Session::default();
        session.set_axis(cli.axis.as_axis());

        Self {
            session,
            focus: Focus::PreviousPosition,
            copied: false,
            clipboard,
        }
    }

    /// Handle one key press. Returns true when the app should exit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => true,
                KeyCode::Char('r') => {
                    self.reset();
                    false
                }
                _ => false,
            };
        }

        if self.session.finished {
            self.on_result_key(key.code)
        } else {
            self.on_edit_key(key.code)
        }
    }

    /// Append pasted text to the focused field; the extractor decides
    /// what survives. Inert while the result overlay is up, same as typing.
    pub fn paste(&mut self, text: &str) {
        if self.session.finished {
            return;
        }
        if let Some(field) = self.focus.field() {
            let candidate = format!("{}{}", self.session.field(field), text);
            self.session.set_field(field, &candidate);
        }
    }

    fn on_edit_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => return true,
            KeyCode::Enter => self.calculate(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up => self.step_focused(STEP),
            KeyCode::Down => self.step_focused(-STEP),
            KeyCode::Left | KeyCode::Right if self.focus == Focus::Axis => self.toggle_axis(),
            KeyCode::Char(' ') if self.focus == Focus::Axis => self.toggle_axis(),
            KeyCode::Char(c) => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        false
    }

    fn on_result_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                self.session.set_finished(false);
            }
            _ => {}
        }
        false
    }

    fn calculate(&mut self) {
        let result = self.session.calculate().to_string();
        self.copied = self.clipboard.copy(&result);
    }

    fn type_char(&mut self, c: char) {
        if let Some(field) = self.focus.field() {
            let mut candidate = self.session.field(field).to_string();
            candidate.push(c);
            self.session.set_field(field, &candidate);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.focus.field() {
            let mut candidate = self.session.field(field).to_string();
            candidate.pop();
            self.session.set_field(field, &candidate);
        }
    }

    fn step_focused(&mut self, delta: f64) {
        match self.focus.field() {
            Some(field) => self.session.increment(field, delta),
            None => self.toggle_axis(),
        }
    }

    fn toggle_axis(&mut self) {
        self.session.set_axis(self.session.axis.toggled());
    }

    fn reset(&mut self) {
        self.session.reset();
        self.focus = Focus::PreviousPosition;
        self.copied = false;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&cli);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let res = run_app(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        // block until something worth repainting; idle ticks don't redraw
        loop {
            match runner.step() {
                AppEvent::Tick => continue,
                AppEvent::Resize => break,
                AppEvent::Paste(text) => {
                    app.paste(&text);
                    break;
                }
                AppEvent::Key(key) => {
                    if app.on_key(key) {
                        return Ok(());
                    }
                    break;
                }
            }
        }
    }
}
