//! The interactive read-dispatch loop

use std::io::{self, BufRead, Write};

use clap::Parser;

use common::mount::{MountError, MountView};

use crate::cli::{self, Line, Op, OpContext, OpError, OpFailure};

pub const BANNER: &str =
    "Welcome to gvfsh: Google Drive by name, not by ID. Type 'help' for commands.";

/// Whether the loop keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Errors that end the session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{verb}: {source}")]
    Command {
        verb: String,
        #[source]
        source: OpError,
    },
    #[error("prompt: {0}")]
    Prompt(#[source] MountError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// One user session over a mount. Owns the location state for its lifetime.
#[derive(Debug)]
pub struct Session {
    mount: MountView,
}

impl Session {
    pub fn new(mount: MountView) -> Self {
        Self { mount }
    }

    pub fn mount(&self) -> &MountView {
        &self.mount
    }

    /// `[gvfsh] <human path> > `
    pub fn prompt(&self) -> Result<String, SessionError> {
        let path = self.mount.human_path().map_err(SessionError::Prompt)?;
        Ok(format!("[gvfsh] {} > ", path))
    }

    /// Run one command line, writing its output or error to `out`
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow, SessionError> {
        let words = match cli::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "gvfsh: {}", e)?;
                return Ok(Flow::Continue);
            }
        };
        let Some(verb) = words.first() else {
            return Ok(Flow::Continue);
        };

        if !Line::is_known(verb) {
            writeln!(out, "{}: command not found", verb)?;
            return Ok(Flow::Continue);
        }

        let parsed = match Line::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                // help output and usage errors alike
                write!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        tracing::debug!("running {:?}", parsed.command);
        let mut ctx = OpContext::new(&mut self.mount);
        match parsed.command.execute(&mut ctx) {
            Ok(output) => {
                let text = output.to_string();
                if !text.is_empty() {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) if e.is_fatal() => {
                return Err(SessionError::Command {
                    verb: verb.clone(),
                    source: e,
                });
            }
            Err(e) => {
                tracing::debug!("{} failed: {:?}", verb, e);
                writeln!(out, "{}: {}", verb, e)?;
            }
        }

        Ok(if ctx.exit_requested() {
            Flow::Exit
        } else {
            Flow::Continue
        })
    }

    /// Prompt, read and dispatch until `exit` or end of input
    pub fn run(&mut self, mut input: impl BufRead, mut out: impl Write) -> Result<(), SessionError> {
        let mut line = String::new();
        loop {
            write!(out, "{}", self.prompt()?)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            let trimmed = line.trim_end_matches(['\n', '\r']);
            if self.handle_line(trimmed, &mut out)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }
}
