//! Launching a record's file with the platform handler.

/// Opens a path with whatever the operating system associates with it.
/// Failures are silently ignored; a label path that no longer resolves
/// must not end the review session.
pub trait Opener {
    fn open(&mut self, path: &str);
}

/// Opener backed by the `open` crate.
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&mut self, path: &str) {
        let _ = open::that(path);
    }
}
