use anyhow::Context;
use clap::Parser;
use recordwatch::cli::{Cli, Commands};
use recordwatch::types::config::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config)
            .with_context(|| format!("failed to load {}", cli.config.display()))?
    } else {
        Config::default_config()
    };

    // CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("recordwatch={}", log_level)
            .parse()
            .unwrap_or_else(|_| "recordwatch=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            recordwatch::cli::commands::init(path).await?;
        }
        Commands::Watch {
            interval_ms,
            no_clipboard,
        } => {
            recordwatch::cli::commands::watch(interval_ms, no_clipboard, &config).await?;
        }
        Commands::Replay { file, json } => {
            recordwatch::cli::commands::replay(&file, json, &config)
                .await
                .with_context(|| format!("replay of {} failed", file.display()))?;
        }
        Commands::Menu { file, list } => {
            recordwatch::cli::commands::menu(file.as_deref(), list, &config).await?;
        }
        Commands::Config { show } => {
            recordwatch::cli::commands::config_cmd(&cli.config, show, &config).await?;
        }
        Commands::Version => {
            recordwatch::cli::commands::version();
        }
    }

    Ok(())
}
