//! Key handling for the browsing loop and its sub-interactions.

use std::io;

use crossterm::event::{KeyCode, KeyEvent};

use crate::opener::Opener;

use super::app::App;
use super::console::Console;
use super::render;

/// Handle one key from browsing. The jump, edit and help sub-interactions
/// run inline on the console and return before the next frame is drawn.
pub fn handle_key<C: Console, O: Opener>(
    app: &mut App,
    key: KeyEvent,
    console: &mut C,
    opener: &mut O,
) -> io::Result<()> {
    app.clear_status();

    // Letter keys are case-insensitive
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Home => app.move_first(),
        KeyCode::End => app.move_last(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Char('g') => jump_to_row(app, console)?,
        KeyCode::Char('e') => edit_record(app, console, opener)?,
        KeyCode::Char('h') => show_help(app, console)?,
        KeyCode::Char(' ') => toggle_checked(app),
        _ => {}
    }
    Ok(())
}

/// Prompt for a 1-based row number. `c` cancels silently; anything else
/// that is not a row number gets one notice and an any-key wait. No retry.
fn jump_to_row<C: Console>(app: &mut App, console: &mut C) -> io::Result<()> {
    if app.records.is_empty() {
        return Ok(());
    }

    console.print("")?;
    console.print("Enter the row number you wish to jump to (or 'c' to cancel):")?;
    let input = console.read_line()?;
    let input = input.trim();

    if let Ok(row) = input.parse::<usize>()
        && row >= 1
        && row <= app.records.len()
    {
        app.jump_to_row(row);
    } else if !input.eq_ignore_ascii_case("c") {
        console.print("Invalid row number. Press any key to continue...")?;
        console.read_key()?;
    }
    Ok(())
}

/// Walk the record under the cursor through the three edit prompts:
/// open the file, replace the comment, flip the checked flag. Saves
/// unconditionally at the end, even when nothing changed.
fn edit_record<C: Console, O: Opener>(
    app: &mut App,
    console: &mut C,
    opener: &mut O,
) -> io::Result<()> {
    if app.records.is_empty() {
        return Ok(());
    }

    let path = app.records[app.cursor].path.clone();
    console.print(&format!("Do you want to open the file '{}'? (y/n)", path))?;
    if read_yes(console)? {
        opener.open(&path);
    }

    console.print("Enter new comment (leave blank to keep current):")?;
    let comment = console.read_line()?;
    if !comment.is_empty() {
        app.records[app.cursor].comment = comment;
    }

    let current = app.records[app.cursor].checked;
    console.print(&format!(
        "Toggle checked? (current value: {}) (y/n)",
        current
    ))?;
    if read_yes(console)? {
        app.records[app.cursor].checked = !current;
    }

    app.save();
    Ok(())
}

fn show_help<C: Console>(app: &App, console: &mut C) -> io::Result<()> {
    console.draw(&render::help_frame(app.page))?;
    console.read_key()?;
    Ok(())
}

fn toggle_checked(app: &mut App) {
    if app.records.is_empty() {
        return;
    }
    let i = app.cursor;
    app.records[i].checked = !app.records[i].checked;
    app.save();
}

fn read_yes<C: Console>(console: &mut C) -> io::Result<bool> {
    let key = console.read_key()?;
    Ok(matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')))
}
