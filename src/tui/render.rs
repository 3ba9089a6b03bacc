//! Frame construction for the record table and the help screen.
//!
//! Everything here is pure: state in, `Frame` out. The console decides how
//! a frame reaches the screen.

use crate::model::Record;
use crate::model::record::checked_text;
use crate::util::unicode::{display_width, pad_to_width};

use super::app::App;
use super::console::{Frame, StyledLine};

const NUMBER_HEADER: &str = "#";
const PATH_HEADER: &str = "Label Path";
const COMMENT_HEADER: &str = "Comment";
const CHECKED_HEADER: &str = "Checked";

const HINT_LINE: &str =
    "Type 'j' or 'k' to navigate, 'g' to jump to a row, 'e' to edit, or 'q' to quit:";

/// Column widths for the record table, in display cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub number: usize,
    pub path: usize,
    pub comment: usize,
    pub checked: usize,
}

impl ColumnWidths {
    pub fn total(&self) -> usize {
        self.number + self.path + self.comment + self.checked
    }
}

/// Widths follow the longest value currently in each column, so an edit
/// that lengthens a comment widens the table on the next frame.
pub fn column_widths(records: &[Record]) -> ColumnWidths {
    let longest_path = records
        .iter()
        .map(|r| display_width(&r.path))
        .max()
        .unwrap_or(0);
    let longest_comment = records
        .iter()
        .map(|r| display_width(&r.comment))
        .max()
        .unwrap_or(0);

    ColumnWidths {
        number: records.len().to_string().len() + 3,
        path: longest_path.max(display_width(PATH_HEADER)) + 2,
        comment: longest_comment.max(display_width(COMMENT_HEADER)) + 2,
        checked: display_width(CHECKED_HEADER) + 2,
    }
}

fn header_line(widths: &ColumnWidths) -> String {
    format!(
        "{}{}{}{}",
        pad_to_width(NUMBER_HEADER, widths.number),
        pad_to_width(PATH_HEADER, widths.path),
        pad_to_width(COMMENT_HEADER, widths.comment),
        pad_to_width(CHECKED_HEADER, widths.checked),
    )
}

fn record_line(record: &Record, row: usize, widths: &ColumnWidths) -> String {
    format!(
        "{}{}{}{}",
        pad_to_width(&row.to_string(), widths.number),
        pad_to_width(&record.path, widths.path),
        pad_to_width(&record.comment, widths.comment),
        pad_to_width(checked_text(record.checked), widths.checked),
    )
}

/// Build the browsing frame: header, a window of `radius` rows around the
/// cursor with overflow notices on either side, the key hint line, and the
/// transient status line if one is set.
pub fn build_frame(app: &App) -> Frame {
    let widths = column_widths(&app.records);
    let mut frame = Frame::default();
    frame.push(StyledLine::plain(header_line(&widths)));
    frame.push(StyledLine::plain("-".repeat(widths.total())));

    if app.records.is_empty() {
        frame.push(StyledLine::notice("(no records)"));
    } else {
        let start = app.cursor.saturating_sub(app.radius);
        let end = (app.cursor + app.radius).min(app.records.len() - 1);

        if start > 0 {
            frame.push(StyledLine::notice(format!(
                "... ({} records above) ...",
                start
            )));
        }
        for i in start..=end {
            let line = record_line(&app.records[i], i + 1, &widths);
            if i == app.cursor {
                frame.push(StyledLine::selected(line));
            } else {
                frame.push(StyledLine::plain(line));
            }
        }
        let below = app.records.len() - 1 - end;
        if below > 0 {
            frame.push(StyledLine::notice(format!(
                "... ({} records below) ...",
                below
            )));
        }
    }

    frame.push(StyledLine::plain(HINT_LINE));

    if let Some(status) = &app.status {
        if app.status_is_error {
            frame.push(StyledLine::error(status.clone()));
        } else {
            frame.push(StyledLine::notice(status.clone()));
        }
    }

    frame
}

/// Build the help screen. `page` is the configured page-jump distance.
pub fn help_frame(page: usize) -> Frame {
    let rule = format!("  {}", "-".repeat(53));
    let mut frame = Frame::default();
    frame.push(StyledLine::plain("  Help Menu:"));
    frame.push(StyledLine::plain(rule.clone()));
    frame.push(StyledLine::plain(
        "  j or Down Arrow: Move selection down by one record.",
    ));
    frame.push(StyledLine::plain(
        "  k or Up Arrow: Move selection up by one record.",
    ));
    frame.push(StyledLine::plain(format!(
        "  Page Down: Move selection down by {} records.",
        page
    )));
    frame.push(StyledLine::plain(format!(
        "  Page Up: Move selection up by {} records.",
        page
    )));
    frame.push(StyledLine::plain("  Home: Jump to the first record."));
    frame.push(StyledLine::plain("  End: Jump to the last record."));
    frame.push(StyledLine::plain("  g: Jump to a specific row number."));
    frame.push(StyledLine::plain("  e: Edit the current record."));
    frame.push(StyledLine::plain("  q: Quit the application."));
    frame.push(StyledLine::plain("  <space>: toggle checked"));
    frame.push(StyledLine::plain("  h: Display this help menu."));
    frame.push(StyledLine::plain(rule));
    frame.push(StyledLine::plain(
        "  Press any key to return to the application...",
    ));
    frame
}
