//! Command line surfaces: process arguments and the interactive grammar

pub mod args;
pub mod lexer;
pub mod op;
pub mod ops;

pub use args::Args;
pub use lexer::{split, LexError};
pub use op::{Op, OpContext, OpFailure};
pub use ops::{Command, OpError, OpOutput};

use clap::{CommandFactory, Parser};

/// One line typed at the prompt; the first word selects the command
#[derive(Parser, Debug)]
#[command(
    name = "gvfsh",
    multicall = true,
    subcommand_required = true,
    subcommand_value_name = "COMMAND",
    subcommand_help_heading = "Commands",
    help_template = "{all-args}"
)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

impl Line {
    /// Whether `verb` names a command (including aliases and `help`)
    pub fn is_known(verb: &str) -> bool {
        verb == "help" || Line::command().find_subcommand(verb).is_some()
    }
}
