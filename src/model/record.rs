use std::fmt;

/// One row of the label file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Path of the labeled file this row refers to.
    pub path: String,
    /// Reviewer comment, empty when none has been written yet.
    pub comment: String,
    /// Whether the row has been reviewed and checked off.
    pub checked: bool,
}

impl Record {
    pub fn new(path: impl Into<String>) -> Self {
        Record {
            path: path.into(),
            comment: String::new(),
            checked: false,
        }
    }
}

/// Error produced when a checked-column value is neither blank nor a
/// boolean literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadChecked;

impl fmt::Display for BadChecked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected \"true\", \"false\" or blank")
    }
}

/// Parse the text of a checked column. Blank or whitespace-only text means
/// an unreviewed row and maps to `false`; otherwise the text must be a
/// case-insensitive boolean literal.
pub fn parse_checked(text: &str) -> Result<bool, BadChecked> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(false);
    }
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(BadChecked)
    }
}

/// The text written for a checked flag on save.
pub fn checked_text(checked: bool) -> &'static str {
    if checked { "true" } else { "false" }
}
