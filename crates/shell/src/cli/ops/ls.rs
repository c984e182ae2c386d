use std::fmt;

use clap::Args;

use common::mount::MountError;

use crate::cli::op::{Op, OpContext, OpFailure};

#[derive(Args, Debug, Clone)]
pub struct Ls {}

#[derive(Debug)]
pub struct LsOutput {
    pub names: Vec<String>,
}

impl fmt::Display for LsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join("\n"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LsError {
    #[error(transparent)]
    Mount(#[from] MountError),
}

impl OpFailure for LsError {
    fn is_fatal(&self) -> bool {
        match self {
            LsError::Mount(e) => e.is_fatal(),
        }
    }
}

impl Op for Ls {
    type Error = LsError;
    type Output = LsOutput;

    fn execute(&self, ctx: &mut OpContext<'_>) -> Result<Self::Output, Self::Error> {
        let mapping = ctx.mount.mapping()?;
        Ok(LsOutput {
            names: mapping.names().map(str::to_string).collect(),
        })
    }
}
