use clap::Parser;
use scribl::CliError;
use scribl::commands::{self, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = dotenv {
        if !err.not_found() {
            tracing::warn!(error = %err, "ignoring unreadable .env");
        }
    }

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    commands::run(cli, &mut stdout).await
}
