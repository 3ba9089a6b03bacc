//! Terminal collaborator for the session loop.
//!
//! All screen and key I/O goes through the `Console` trait so session flows
//! can run against a scripted double in tests. The real console stays in
//! cooked mode; raw mode is held only for the duration of a single key read,
//! which keeps line reads echoed and edited by the terminal itself.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, queue};

use super::theme::Theme;

/// Style role of one rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Selected,
    Notice,
    Error,
}

/// One line of a rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub style: LineStyle,
}

impl StyledLine {
    pub fn plain(text: impl Into<String>) -> Self {
        StyledLine {
            text: text.into(),
            style: LineStyle::Plain,
        }
    }

    pub fn selected(text: impl Into<String>) -> Self {
        StyledLine {
            text: text.into(),
            style: LineStyle::Selected,
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        StyledLine {
            text: text.into(),
            style: LineStyle::Notice,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StyledLine {
            text: text.into(),
            style: LineStyle::Error,
        }
    }
}

/// A full screen repaint: cleared screen, then these lines top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<StyledLine>,
}

impl Frame {
    pub fn push(&mut self, line: StyledLine) {
        self.lines.push(line);
    }
}

/// Screen and key I/O needed by the session loop.
pub trait Console {
    /// Repaint the whole screen with `frame`.
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
    /// Append a line below the current frame (prompts, notices).
    fn print(&mut self, line: &str) -> io::Result<()>;
    /// Block until one key press; the key is not echoed.
    fn read_key(&mut self) -> io::Result<KeyEvent>;
    /// Read one line of input, echoed as the user types.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Console on the real terminal via crossterm.
pub struct TermConsole {
    theme: Theme,
    out: io::Stdout,
}

impl TermConsole {
    pub fn new(theme: Theme) -> Self {
        TermConsole {
            theme,
            out: io::stdout(),
        }
    }

    fn line_colors(&self, style: LineStyle) -> (Option<Color>, Option<Color>) {
        match style {
            LineStyle::Plain => (None, None),
            LineStyle::Selected => (Some(self.theme.selection_fg), Some(self.theme.selection_bg)),
            LineStyle::Notice => (Some(self.theme.notice), None),
            LineStyle::Error => (Some(self.theme.error), None),
        }
    }
}

impl Console for TermConsole {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for line in &frame.lines {
            let (fg, bg) = self.line_colors(line.style);
            if let Some(fg) = fg {
                queue!(self.out, SetForegroundColor(fg))?;
            }
            if let Some(bg) = bg {
                queue!(self.out, SetBackgroundColor(bg))?;
            }
            queue!(self.out, Print(&line.text), ResetColor, Print("\n"))?;
        }
        self.out.flush()
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        enable_raw_mode()?;
        let result = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(key),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        disable_raw_mode()?;
        result
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
