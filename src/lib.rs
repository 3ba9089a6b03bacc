pub mod cli;
pub mod io;
pub mod model;
pub mod opener;
pub mod tui;
pub mod util;
