use std::path::PathBuf;

use clap::Parser;

/// The label file opened when no argument is given.
pub const DEFAULT_FILE: &str = "ff.csv";

#[derive(Parser)]
#[command(
    name = "lm",
    about = concat!("[x] labelmark v", env!("CARGO_PKG_VERSION"), " - check off label files from the terminal"),
    version
)]
pub struct Cli {
    /// Label CSV file to review
    #[arg(default_value = DEFAULT_FILE)]
    pub file: PathBuf,
}
