use std::fmt;

use clap::Args;
use owo_colors::OwoColorize;

use common::copy::CopyPlan;
use common::mount::MountError;

use crate::cli::op::{Op, OpContext, OpFailure};

#[derive(Args, Debug, Clone)]
pub struct Cp {
    /// Absolute local path, or display name in the current location
    #[arg(allow_hyphen_values = true)]
    pub source: String,

    /// Display name or new name in the current location, or an absolute local path
    #[arg(allow_hyphen_values = true)]
    pub destination: String,
}

#[derive(Debug)]
pub struct CpOutput {
    pub plan: CopyPlan,
}

impl fmt::Display for CpOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "Copied".green().bold(), self.plan)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CpError {
    #[error(transparent)]
    Mount(#[from] MountError),
}

impl OpFailure for CpError {
    fn is_fatal(&self) -> bool {
        match self {
            CpError::Mount(e) => e.is_fatal(),
        }
    }
}

impl Op for Cp {
    type Error = CpError;
    type Output = CpOutput;

    fn execute(&self, ctx: &mut OpContext<'_>) -> Result<Self::Output, Self::Error> {
        let plan = ctx.mount.copy(&self.source, &self.destination)?;
        Ok(CpOutput { plan })
    }
}
