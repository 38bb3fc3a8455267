use clap::Parser;
use lone_traveler::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "traveler=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, name }) => {
            lone_traveler::cli::init::run(path, name).await?;
        }
        Some(Commands::Serve { host, port }) => {
            lone_traveler::cli::serve::run(&cli.config, &host, port).await?;
        }
        Some(Commands::Deploy { host, port }) => {
            lone_traveler::cli::deploy::run(&cli.config, &host, port).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
