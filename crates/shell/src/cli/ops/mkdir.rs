use std::fmt;
use std::path::PathBuf;

use clap::Args;
use owo_colors::OwoColorize;

use common::mount::MountError;

use crate::cli::op::{Op, OpContext, OpFailure};

#[derive(Args, Debug, Clone)]
pub struct Mkdir {
    /// Name of the new directory
    #[arg(allow_hyphen_values = true)]
    pub name: String,
}

#[derive(Debug)]
pub struct MkdirOutput {
    pub name: String,
    pub path: PathBuf,
}

impl fmt::Display for MkdirOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "Created".green().bold(), self.name.bold())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MkdirError {
    #[error(transparent)]
    Mount(#[from] MountError),
}

impl OpFailure for MkdirError {
    fn is_fatal(&self) -> bool {
        match self {
            MkdirError::Mount(e) => e.is_fatal(),
        }
    }
}

impl Op for Mkdir {
    type Error = MkdirError;
    type Output = MkdirOutput;

    fn execute(&self, ctx: &mut OpContext<'_>) -> Result<Self::Output, Self::Error> {
        let path = ctx.mount.make_dir(&self.name)?;
        Ok(MkdirOutput {
            name: self.name.clone(),
            path,
        })
    }
}
