use std::path::PathBuf;

use clap::Parser;

use common::mount::CollisionPolicy;

/// Browse a GVFS Google Drive mount by display name
#[derive(Parser, Debug, Clone)]
#[command(name = "gvfsh", version, about)]
pub struct Args {
    /// Config file (defaults to <config dir>/gvfsh/config.toml)
    #[arg(long, env = "GVFSH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mount root to use instead of discovering one under GVFS
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// How to map siblings that share a display name
    #[arg(long)]
    pub collisions: Option<CollisionPolicy>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}
