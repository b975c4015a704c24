use clap::{Args, Parser};
use config::{Config, ConfigError, LoggingConfig, MetricsConfig};
use metrics_exporter_statsd::{StatsdBuilder, StatsdError};
use sentry::types::{Dsn, ParseDsnError};
use server::config::ValidationError;
use server::errors::ServerError;
use shared::metrics_defs::describe_all;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod config;

const METRICS_PREFIX: &str = "badged";

#[derive(Parser)]
#[command(name = "badged", version, about = "Serves SVG status badges")]
enum CliCommand {
    /// Run the badge server
    Run(ConfigArgs),
    /// Check a configuration file and exit
    Validate(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "badged.yaml")]
    config: PathBuf,
}

#[derive(thiserror::Error, Debug)]
enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid config: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid sentry DSN: {0}")]
    SentryDsn(#[from] ParseDsnError),
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("could not set up statsd exporter: {0}")]
    Statsd(#[from] StatsdError),
    #[error("a metrics recorder is already installed")]
    RecorderAlreadySet,
    #[error("could not start runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Server(#[from] ServerError),
}

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    let result = match cli {
        CliCommand::Run(args) => run(&args.config),
        CliCommand::Validate(args) => validate(&args.config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "badged failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load(path: &Path) -> Result<Config, InitError> {
    let config = Config::from_file(path)?;
    config.server.validate()?;
    Ok(config)
}

fn validate(path: &Path) -> Result<(), InitError> {
    load(path)?;
    println!("{} is valid", path.display());
    Ok(())
}

fn run(path: &Path) -> Result<(), InitError> {
    let config = load(path)?;

    let _sentry = init_logging(&config.common.logging)?;
    if let Some(metrics) = &config.common.metrics {
        init_metrics(metrics)?;
    }

    tracing::info!(config = %path.display(), "Starting badged");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::run(config.server))?;
    Ok(())
}

/// Installs the global subscriber. The returned guard flushes pending sentry
/// events when dropped and must live until shutdown.
fn init_logging(config: &LoggingConfig) -> Result<Option<sentry::ClientInitGuard>, InitError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let guard = match &config.sentry_dsn {
        Some(dsn) => {
            let dsn: Dsn = dsn.parse()?;
            Some(sentry::init(sentry::ClientOptions {
                dsn: Some(dsn),
                release: sentry::release_name!(),
                ..Default::default()
            }))
        }
        None => None,
    };

    let sentry_layer = guard
        .is_some()
        .then(sentry::integrations::tracing::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_layer)
        .init();

    Ok(guard)
}

fn init_metrics(config: &MetricsConfig) -> Result<(), InitError> {
    let recorder = StatsdBuilder::from(config.statsd_host.as_str(), config.statsd_port)
        .build(Some(METRICS_PREFIX))?;
    metrics::set_global_recorder(recorder).map_err(|_| InitError::RecorderAlreadySet)?;

    describe_all(connectors::metrics_defs::ALL_METRICS);
    describe_all(server::metrics_defs::ALL_METRICS);

    tracing::info!(
        host = %config.statsd_host,
        port = config.statsd_port,
        "Reporting metrics to statsd"
    );
    Ok(())
}
