use std::io;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;

use common::entry::MountEntry;
use common::mount::{discover_root, gvfs_dir, DiscoveryError, MountView};

use gvfsh::cli::Args;
use gvfsh::session::{Session, BANNER};
use gvfsh::state::{AppConfig, AppState};
use gvfsh::{logging, SessionError};

const TOOL_HINT: &str = "Install 'gvfs' and 'glib2'.";

fn main() {
    let args = Args::parse();

    let view = match setup(&args) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    println!("{}", BANNER);
    let mut session = Session::new(view);
    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), io::stdout()) {
        fatal(&e);
        std::process::exit(1);
    }
}

/// Load config, start logging and locate the mount
fn setup(args: &Args) -> anyhow::Result<MountView> {
    let mut state = AppState::load(args.config.clone()).context("failed to load config")?;
    state.apply_args(args);
    logging::init(&state.config.log)?;

    let root = mount_root(&state.config)?;
    tracing::info!("using mount root {}", root);

    Ok(MountView::new(state.config.tools.backend(), root)
        .with_collisions(state.config.collisions.resolver()))
}

fn mount_root(config: &AppConfig) -> anyhow::Result<MountEntry> {
    if let Some(root) = &config.mount.root {
        return Ok(MountEntry::new(root.clone()));
    }

    let dir = match &config.mount.gvfs_dir {
        Some(dir) => dir.clone(),
        None => gvfs_dir()?,
    };
    match discover_root(&dir, &config.mount.prefix) {
        Err(e @ DiscoveryError::NotFound { .. }) => {
            tracing::debug!("nothing matching '{}' in {}", config.mount.prefix, dir.display());
            Err(e.into())
        }
        other => Ok(other?),
    }
}

fn fatal(err: &SessionError) {
    eprintln!("{} {}", "[FATAL]".red().bold(), err);
    if !matches!(err, SessionError::Io(_)) {
        eprintln!("{}", TOOL_HINT.dimmed());
    }
}
