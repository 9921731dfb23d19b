//! `canto` - command-line front end for the Canto integration
//!
//! Runs one presentation command and writes its view as JSON to stdout.

use std::io::Write;

use anyhow::Context;
use canto_api::{commands, utils, AppContext, SettingsRequest};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "canto", about = "Canto asset library integration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// User on whose behalf OAuth state is issued.
    #[arg(long, global = true, env = "CANTO_USER", default_value = "cli")]
    user: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show connection status and the authorize URL; completes the OAuth
    /// flow when `--code` and `--state` are given.
    Settings {
        #[arg(long)]
        redirect_uri: String,
        #[arg(long, default_value = "")]
        code: String,
        #[arg(long, default_value = "")]
        state: String,
    },
    /// Refresh the stored access token.
    Refresh,
    /// Forget the stored tokens.
    Disconnect,
    /// List the album and folder tree.
    Tree,
    /// Show one page of an album.
    Album {
        album_id: String,
        #[arg(long)]
        page: Option<String>,
    },
    /// Search assets by keyword.
    Search {
        query: String,
        #[arg(long)]
        page: Option<String>,
    },
    /// Tree plus an optional album page.
    Library {
        #[arg(long)]
        album: Option<String>,
        #[arg(long)]
        page: Option<String>,
    },
    /// Resolve a binary URL to its public location.
    Binary { url: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    utils::init_tracing(&cli.log_level, cli.json_logs);
    info!(version = env!("CARGO_PKG_VERSION"), "canto starting");

    let ctx = AppContext::new().context("failed to initialise Canto context")?;
    let user = cli.user.as_str();

    match cli.command {
        Commands::Settings { redirect_uri, code, state } => {
            let request = SettingsRequest { code, state, ..SettingsRequest::new(redirect_uri) };
            emit(&commands::settings(&ctx, user, &request)?)
        }
        Commands::Refresh => emit(&commands::refresh_token(&ctx)?),
        Commands::Disconnect => emit(&commands::disconnect(&ctx)?),
        Commands::Tree => emit(&commands::tree(&ctx)?),
        Commands::Album { album_id, page } => {
            emit(&commands::album(&ctx, &album_id, page.as_deref())?)
        }
        Commands::Search { query, page } => emit(&commands::search(&ctx, &query, page.as_deref())?),
        Commands::Library { album, page } => {
            emit(&commands::library(&ctx, album.as_deref(), page.as_deref())?)
        }
        Commands::Binary { url } => emit(&commands::binary(&ctx, &url)?),
    }
}

fn emit<T: Serialize>(view: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, view)?;
    writeln!(stdout)?;
    Ok(())
}
