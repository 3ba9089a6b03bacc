use std::io;
use std::path::{Path, PathBuf};

use crate::io::config_io::read_config;
use crate::io::store;
use crate::model::{Config, Record};
use crate::opener::{Opener, SystemOpener};

use super::console::{Console, TermConsole};
use super::input;
use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    /// All records, in file order. Mutated in place, saved as a whole.
    pub records: Vec<Record>,
    /// Selected record index; stays in `[0, len-1]` while non-empty.
    pub cursor: usize,
    /// The file every save rewrites.
    pub csv_path: PathBuf,
    /// Rows shown on each side of the cursor.
    pub radius: usize,
    /// Rows moved by PageUp/PageDown.
    pub page: usize,
    pub should_quit: bool,
    /// Transient line under the table, cleared on the next key.
    pub status: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(records: Vec<Record>, csv_path: PathBuf, config: &Config) -> Self {
        App {
            records,
            cursor: 0,
            csv_path,
            radius: config.ui.radius,
            page: config.ui.page,
            should_quit: false,
            status: None,
            status_is_error: false,
        }
    }

    // Navigation. Every movement is a no-op on an empty sequence and
    // clamps to the ends otherwise.

    pub fn move_down(&mut self) {
        if !self.records.is_empty() {
            self.cursor = (self.cursor + 1).min(self.records.len() - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_first(&mut self) {
        self.cursor = 0;
    }

    pub fn move_last(&mut self) {
        if !self.records.is_empty() {
            self.cursor = self.records.len() - 1;
        }
    }

    pub fn page_down(&mut self) {
        if !self.records.is_empty() {
            self.cursor = (self.cursor + self.page).min(self.records.len() - 1);
        }
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page);
    }

    /// Jump to a 1-based row number. Callers validate the range.
    pub fn jump_to_row(&mut self, row: usize) {
        if row >= 1 && row <= self.records.len() {
            self.cursor = row - 1;
        }
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.status_is_error = false;
    }

    /// Write all records back to the file. A failed save keeps the
    /// in-memory state and surfaces the error on the status line instead
    /// of ending the session.
    pub fn save(&mut self) {
        if let Err(e) = store::save(&self.csv_path, &self.records) {
            self.status = Some(format!("save failed: {}", e));
            self.status_is_error = true;
        }
    }
}

/// Run the interactive session on the given label file
pub fn run(csv_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(csv_path)?;
    let records = store::load(csv_path)?;
    let theme = Theme::from_config(&config.ui);
    let mut app = App::new(records, csv_path.to_path_buf(), &config);

    // Restore the terminal if a panic lands while raw mode is on
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        original_hook(panic_info);
    }));

    let mut console = TermConsole::new(theme);
    let mut opener = SystemOpener;
    run_loop(&mut app, &mut console, &mut opener)?;
    Ok(())
}

/// Draw, block for one key, dispatch; repeat until quit. Generic over the
/// console and opener so tests can drive whole sessions with scripted input.
pub fn run_loop<C: Console, O: Opener>(
    app: &mut App,
    console: &mut C,
    opener: &mut O,
) -> io::Result<()> {
    while !app.should_quit {
        let frame = render::build_frame(app);
        console.draw(&frame)?;
        let key = console.read_key()?;
        input::handle_key(app, key, console, opener)?;
    }
    Ok(())
}
