use std::io;
use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shoplist::app::AppContext;
use shoplist::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the TUI and shell output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Tui => {
            shoplist::tui::run(Arc::new(ctx)).await?;
        }
        Commands::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            commands::run_shell(&ctx, stdin, io::stdout()).await?;
        }
        Commands::Geocode { lat, lng } => {
            commands::geocode(&ctx, lat, lng).await?;
        }
    }

    Ok(())
}
