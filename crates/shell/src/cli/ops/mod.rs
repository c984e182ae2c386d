pub mod cd;
pub mod cp;
pub mod exit;
pub mod info;
pub mod ls;
pub mod mkdir;
pub mod pwd;

use crate::cli::op::Op;

crate::command_enum! {
    /// List entries in the current location
    (Ls, ls::Ls),
    /// Change location by display name, or `..` to go up
    (Cd, cd::Cd),
    /// Create a directory in the current location
    (Mkdir, mkdir::Mkdir),
    /// Copy between the mount and the local filesystem
    (Cp, cp::Cp),
    /// Print the current location
    (Pwd, pwd::Pwd),
    /// Show metadata for an entry in the current location
    (Info, info::Info),
    /// Leave the shell
    #[command(alias = "quit")]
    (Exit, exit::Exit),
}
