use form_sheets_forwarder::adapters::config::app_config::{AppConfig, LoggingConfig};
use form_sheets_forwarder::prettyprint::prettyprint::PrettyFormatter;
use std::env;
use std::sync::Arc;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

mod cli_adapter;
mod forwarder_factory;

use cli_adapter::CliAdapter;
use forwarder_factory::ForwarderFactory;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    let logging = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    setup_tracing(&logging)?;
    setup_panic_hook();

    let config = config.map_err(|report| {
        error!("Configuration error: {:?}", report);
        format!("Configuration error: {}", report.current_context())
    })?;

    let args: Vec<String> = env::args().collect();

    info!("Starting form-sheets-forwarder");

    let forwarder = ForwarderFactory::create(&config).await;
    let cli_adapter = Arc::new(CliAdapter::new(forwarder));

    match cli_adapter.run(args).await {
        Ok(_) => {
            info!("CLI execution completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("CLI execution failed: {:?}", e);
            Err(e)
        }
    }
}

fn setup_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(std::io::stderr);

    let log_file_layer = match &logging.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .event_format(PrettyFormatter::new(false))
                .with_writer(std::fs::File::create(path)?)
                .with_ansi(false),
        ),
        None => None,
    };

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("form_sheets_forwarder", logging.level()),
        )
        .with(log_file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
