//! Shared plumbing for shell commands
//!
//! Each verb is a clap [`Args`](clap::Args) struct implementing [`Op`]. The
//! [`command_enum!`](crate::command_enum) macro stitches them into a single
//! subcommand enum whose output and error types wrap every verb's own.

use std::fmt;

use common::mount::MountView;

/// Failures that end the session rather than just the command
pub trait OpFailure {
    fn is_fatal(&self) -> bool {
        false
    }
}

impl OpFailure for std::convert::Infallible {}

/// A single shell command
pub trait Op {
    type Error: std::error::Error + OpFailure + 'static;
    type Output: fmt::Display + fmt::Debug;

    fn execute(&self, ctx: &mut OpContext<'_>) -> Result<Self::Output, Self::Error>;
}

/// What a command gets to work with
#[derive(Debug)]
pub struct OpContext<'a> {
    pub mount: &'a mut MountView,
    exit_requested: bool,
}

impl<'a> OpContext<'a> {
    pub fn new(mount: &'a mut MountView) -> Self {
        Self {
            mount,
            exit_requested: false,
        }
    }

    /// Ask the session to stop after this command
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// Generate `Command`, `OpOutput` and `OpError` for a list of `(Variant, Type)`
/// pairs, plus an [`Op`] impl dispatching to each type.
#[macro_export]
macro_rules! command_enum {
    ($( $(#[$meta:meta])* ($variant:ident, $type:ty) ),* $(,)?) => {
        #[derive(clap::Subcommand, Debug, Clone)]
        pub enum Command {
            $(
                $(#[$meta])*
                $variant($type),
            )*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $( $variant(<$type as $crate::cli::op::Op>::Output), )*
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( OpOutput::$variant(output) => write!(f, "{}", output), )*
                }
            }
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        impl $crate::cli::op::OpFailure for OpError {
            fn is_fatal(&self) -> bool {
                match self {
                    $( OpError::$variant(err) => $crate::cli::op::OpFailure::is_fatal(err), )*
                }
            }
        }

        impl $crate::cli::op::Op for Command {
            type Error = OpError;
            type Output = OpOutput;

            fn execute(
                &self,
                ctx: &mut $crate::cli::op::OpContext<'_>,
            ) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => op
                            .execute(ctx)
                            .map(OpOutput::$variant)
                            .map_err(OpError::$variant),
                    )*
                }
            }
        }
    };
}
