//! `board` command: print and edit the todo board from a terminal.

use std::io::{self, Write};
use std::sync::Arc;

use board_client::cli::{Cli, execute};
use board_client::{BoardSettings, BoardStore, HttpTodoApi, render_board};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| color_eyre::eyre::eyre!("tracing init failed: {err}"))?;

    let cli = Cli::parse();
    let settings = BoardSettings::load_without_args()?.with_api_url(cli.api_url.clone());
    let base_url = settings.api_url()?;
    let api = HttpTodoApi::new(&base_url, settings.timeout())
        .wrap_err_with(|| format!("failed to build client for {base_url}"))?;

    let mut store = BoardStore::new(Arc::new(api));
    let outcome = execute(&cli.command, &mut store).await;

    if let Err(err) = write!(io::stdout().lock(), "{}", render_board(&store)) {
        drop(err);
    }
    outcome.wrap_err("board command failed")
}
