use clap::Args;

use common::mount::MountError;

use crate::cli::op::{Op, OpContext, OpFailure};

#[derive(Args, Debug, Clone)]
pub struct Cd {
    /// Display name of a directory in the current location, or `..`
    #[arg(allow_hyphen_values = true)]
    pub target: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CdError {
    #[error(transparent)]
    Mount(#[from] MountError),
}

impl OpFailure for CdError {
    fn is_fatal(&self) -> bool {
        match self {
            CdError::Mount(e) => e.is_fatal(),
        }
    }
}

impl Op for Cd {
    type Error = CdError;
    type Output = String;

    fn execute(&self, ctx: &mut OpContext<'_>) -> Result<Self::Output, Self::Error> {
        ctx.mount.change_location(&self.target)?;
        Ok(String::new())
    }
}
