//! CLI entry point for pulse

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing::{error, info};

use pulse_broker::{connect, open_channel, KeepalivePublisher};
use pulse_core::config::{ConfigLoader, LoggingConfig};
use pulse_core::heartbeat::{PublishLoop, DEFAULT_PUBLISH_INTERVAL_S, KEEPALIVE_TOPOLOGY};
use pulse_core::logging::init_logging;
use pulse_service::{ServiceManager, SystemdManager};

const SERVICE_NAME: &str = "pulse";
const SERVICE_DESCRIPTION: &str = "Publishes keepalive heartbeats to the monitoring broker";

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Liveness announcer for broker-backed monitoring")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding client.json and rabbitmq.json
    #[arg(short, long, global = true)]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the managed service with the host service manager
    Install,
    /// Unregister the managed service
    Remove,
    /// Run the publish loop in the foreground
    Run,
    /// Start the managed service
    Start,
    /// Stop the managed service
    Stop,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let _guard = init_logging(&LoggingConfig::default());

    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::with_dir(dir),
        None => ConfigLoader::new(),
    };

    let outcome = match cli.command {
        Some(Commands::Install) => lifecycle("installed", |m| m.install()),
        Some(Commands::Remove) => lifecycle("removed", |m| m.remove()),
        Some(Commands::Start) => lifecycle("started", |m| m.start()),
        Some(Commands::Stop) => lifecycle("stopped", |m| m.stop()),
        Some(Commands::Run) => run_loop(&loader).await,
        None => {
            info!("Starting managed service");
            run_loop(&loader).await
        }
    };

    // Single terminating handler: every failure below lands here.
    if let Err(e) = outcome {
        error!("{}", e);
        eprintln!("{} {}", style("✗").red().bold(), e);
        std::process::exit(1);
    }
}

/// Run one lifecycle operation and print its success line
fn lifecycle<F>(done: &str, op: F) -> Result<()>
where
    F: FnOnce(&dyn ServiceManager) -> pulse_service::Result<()>,
{
    let manager = SystemdManager::new(SERVICE_NAME, SERVICE_DESCRIPTION)?;
    op(&manager)?;
    println!(
        "{} Service \"{}\" {}.",
        style("✓").green().bold(),
        SERVICE_NAME,
        done
    );
    Ok(())
}

/// Establish the broker session and run the publish loop until a fatal
/// error or a termination signal
async fn run_loop(loader: &ConfigLoader) -> Result<()> {
    let settings = loader.load()?;
    info!(
        "Announcing client {} ({})",
        settings.client.name, settings.client.address
    );

    let connection = connect(&settings.broker).await?;
    let channel = open_channel(&connection, KEEPALIVE_TOPOLOGY).await?;
    let publisher = KeepalivePublisher::new(channel, settings.client);

    let publish_loop = PublishLoop::new(Duration::from_secs(DEFAULT_PUBLISH_INTERVAL_S));
    let cancel = publish_loop.cancel_token();
    tokio::spawn(async move {
        wait_for_shutdown().await;
        info!("Termination signal received, stopping publish loop");
        cancel.cancel();
    });

    publish_loop.run(&publisher).await?;

    // Clean stop: release the channel and connection before exiting.
    if let Err(e) = connection.close(200, "keepalive stopped").await {
        error!("Error closing broker connection: {}", e);
    }
    Ok(())
}

#[cfg(unix)]
async fn wait_for_shutdown() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(_) => {
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
}
