use std::fmt;

use clap::Args;
use comfy_table::Table;

use common::mount::{Metadata, MountError};

use crate::cli::op::{Op, OpContext, OpFailure};

#[derive(Args, Debug, Clone)]
pub struct Info {
    /// Display name of an entry in the current location
    #[arg(allow_hyphen_values = true)]
    pub name: String,
}

#[derive(Debug)]
pub struct InfoOutput {
    pub metadata: Metadata,
}

impl fmt::Display for InfoOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.metadata.is_empty() {
            return write!(f, "No metadata available");
        }

        let mut table = Table::new();
        table.set_header(vec!["ATTRIBUTE", "VALUE"]);
        for (key, value) in self.metadata.iter() {
            table.add_row(vec![key, value]);
        }
        write!(f, "{table}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error(transparent)]
    Mount(#[from] MountError),
}

impl OpFailure for InfoError {
    fn is_fatal(&self) -> bool {
        match self {
            InfoError::Mount(e) => e.is_fatal(),
        }
    }
}

impl Op for Info {
    type Error = InfoError;
    type Output = InfoOutput;

    fn execute(&self, ctx: &mut OpContext<'_>) -> Result<Self::Output, Self::Error> {
        let metadata = ctx.mount.metadata(&self.name)?;
        Ok(InfoOutput { metadata })
    }
}
