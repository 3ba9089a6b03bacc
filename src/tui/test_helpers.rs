use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Config, Record};
use crate::opener::Opener;

use super::app::App;
use super::console::{Console, Frame};

/// Console double: records every frame and printed line, replays scripted
/// keys and input lines. Running out of script is a test failure.
pub struct TestConsole {
    pub frames: Vec<Frame>,
    pub printed: Vec<String>,
    pub keys: VecDeque<KeyEvent>,
    pub lines: VecDeque<String>,
}

impl TestConsole {
    pub fn new() -> Self {
        TestConsole {
            frames: Vec::new(),
            printed: Vec::new(),
            keys: VecDeque::new(),
            lines: VecDeque::new(),
        }
    }

    pub fn push_key(&mut self, code: KeyCode) {
        self.keys.push_back(key(code));
    }

    pub fn push_line(&mut self, line: &str) {
        self.lines.push_back(line.to_string());
    }
}

impl Console for TestConsole {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        self.printed.push(line.to_string());
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::other("test console ran out of scripted keys"))
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::other("test console ran out of scripted lines"))
    }
}

/// Opener double recording every requested path.
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl Opener for RecordingOpener {
    fn open(&mut self, path: &str) {
        self.opened.push(path.to_string());
    }
}

/// A plain key press with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Three records with a mix of comments and checked flags.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record {
            path: "img/one.png".into(),
            comment: "first".into(),
            checked: false,
        },
        Record {
            path: "img/two.png".into(),
            comment: "".into(),
            checked: true,
        },
        Record {
            path: "img/three.png".into(),
            comment: "needs a look".into(),
            checked: false,
        },
    ]
}

/// App over the given records with default config and a throwaway path.
/// Tests that save point `csv_path` somewhere real first.
pub fn app_with_records(records: Vec<Record>) -> App {
    App::new(records, PathBuf::from("labels.csv"), &Config::default())
}

/// Plain text of a frame: styles dropped, line ends trimmed.
pub fn frame_to_string(frame: &Frame) -> String {
    frame
        .lines
        .iter()
        .map(|l| l.text.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
