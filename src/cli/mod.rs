pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
pub mod shell;
pub mod ui;

pub use shell::run_cli;
