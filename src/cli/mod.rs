pub mod commands;
pub mod errors;
mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod table;
pub mod views;

pub use errors::{CliError, CommandError};
pub use shell::{run_cli, SCRIPT_ENV};
pub use shell_context::{CliMode, ShellContext, TODAY_ENV};
pub use views::View;
