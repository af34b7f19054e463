//! Terminal front end for beautybot
//!
//! Drives the same chat session as the browser widget, with a line editor for
//! input and the terminal as the render surface.

pub mod cli;
pub mod config;
pub mod repl;
pub mod terminal;

pub use cli::Cli;
pub use config::{load_config, read_config_file};
pub use repl::{run_repl_mode, ReplCommand};
pub use terminal::{format_view, TerminalSurface};
