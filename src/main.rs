mod cli;
mod error;
mod kubernetes;
mod output;
mod rows;
mod theme;
mod types;
mod utils;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use cli::Cli;
use kubernetes::{initialize_client, list_pod_volume_backups};
use rows::build_rows;
use theme::Theme;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let row_filter = cli.row_filter();
    let theme = Theme::detect(cli.color);
    debug!(?row_filter, format = ?cli.output, styled = theme.is_styled(), "Resolved options");

    let client = initialize_client(cli.context.as_deref()).await?;
    let records = list_pod_volume_backups(&client, &cli.velero_namespace).await?;

    let rows = build_rows(&records, &row_filter);
    let rendered = output::render(&rows, cli.output, theme)
        .with_context(|| format!("Failed to render {:?} output", cli.output))?;
    write_output(&mut std::io::stdout().lock(), &rendered)
}

/// Write the rendered report, reporting a closed pipe as an error instead of panicking.
fn write_output<W: Write>(out: &mut W, rendered: &str) -> anyhow::Result<()> {
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write output")
}
