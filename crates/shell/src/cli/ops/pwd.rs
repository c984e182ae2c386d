use clap::Args;

use common::mount::MountError;

use crate::cli::op::{Op, OpContext, OpFailure};

#[derive(Args, Debug, Clone)]
pub struct Pwd {}

#[derive(Debug, thiserror::Error)]
pub enum PwdError {
    #[error(transparent)]
    Mount(#[from] MountError),
}

impl OpFailure for PwdError {
    fn is_fatal(&self) -> bool {
        match self {
            PwdError::Mount(e) => e.is_fatal(),
        }
    }
}

impl Op for Pwd {
    type Error = PwdError;
    type Output = String;

    fn execute(&self, ctx: &mut OpContext<'_>) -> Result<Self::Output, Self::Error> {
        Ok(ctx.mount.human_path()?)
    }
}
