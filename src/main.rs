use clap::Parser;
use labelmark::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = labelmark::tui::run(&cli.file) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
