//! Cross-module interop demonstration
//!
//! Boots the interop core with desktop device facts and replays the
//! "Run All Tests" flow: calculator, device info, storage, logger, then the
//! WebView integrations.
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run -p native-modules --example integration_demo
//!
//! # JSON format
//! cargo run -p native-modules --example integration_demo -- json
//!
//! # With custom filter
//! cargo run -p native-modules --example integration_demo -- compact "native_modules=debug"
//! ```

use anyhow::{Context, Result};
use bridge_traits::{ConsoleLogger, LogLevel};
use core_interop::{bootstrap, install};
use core_runtime::config::{CoreConfig, ModuleFlags};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use native_modules::{
    CalculatorSpec, DeviceInfoSpec, IntegrationsSpec, LoggerSpec, ModuleError, ModuleSet,
    StorageSpec,
};
use std::env;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let format = match args.get(1).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::default(),
    };

    let mut logging = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Debug)
        .with_logger_sink(Arc::new(ConsoleLogger::new(LogLevel::Warn)));
    if let Some(filter) = args.get(2) {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging).context("failed to initialize logging")?;

    let config = CoreConfig::builder()
        .bundle_id("com.newarchspike")
        .build()
        .context("invalid core configuration")?;
    install(bootstrap(&config)?)?;

    let modules = ModuleSet::from_shared()?;
    info!(modules = ?modules.names(), "=== Module Interop Demo ===");

    // Calculator -> Logger
    let sum = modules.calculator.add(10.0, 5.0)?;
    info!(sum, count = modules.logger.get_log_count()?, "Calculator add");

    // Device info
    let model = modules.device_info.get_device_model()?;
    info!(
        model = %model,
        name = %modules.device_info.get_device_name()?,
        version = %modules.device_info.get_system_version()?,
        bundle = %modules.device_info.get_bundle_id()?,
        "Device info"
    );

    // Storage -> Device info
    modules.storage.set_item("test-key", "test-value")?;
    let stored = modules.storage.get_item("test-key")?;
    info!(stored = ?stored, "Storage round trip");

    // Logger
    modules.logger.log_info("Test log message from UI")?;
    info!(count = modules.logger.get_log_count()?, "Logger");

    // WebView integrations
    modules.integrations.log_event("demo_complete")?;
    let calculated = modules.integrations.perform_calculation(2.0, 3.0)?;
    info!(
        calculated,
        count = modules.integrations.get_logger_count()?,
        device = %modules.integrations.describe_device()?,
        "WebView integrations"
    );

    // Division by zero is reported, not raised
    let quotient = modules.calculator.divide(1.0, 0.0)?;
    warn!(quotient, "Divided by zero");

    // A host that ships no packages
    let bare = CoreConfig::builder().modules(ModuleFlags::none()).build()?;
    let bare = ModuleSet::new(bootstrap(&bare)?);
    if let Err(err) = bare.storage.get_all_keys() {
        report(&err);
    }

    info!("=== Demo Complete ===");
    Ok(())
}

fn report(err: &ModuleError) {
    warn!(error = %err, message = err.user_message(), "Module call failed");
}
