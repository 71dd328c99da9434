//! Integration tests for logging system

use bridge_traits::{ConsoleLogger, LogLevel};
use core_runtime::logging::{init_logging, redact_if_sensitive, LogFormat, LoggingConfig};
use std::sync::Arc;

#[test]
fn test_logging_initialization_only_once() {
    // The global subscriber can only be installed once per process
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_logger_sink(Arc::new(ConsoleLogger::default()));

    init_logging(config.clone()).expect("first initialization succeeds");
    assert!(init_logging(config).is_err());

    tracing::info!(target: "core_interop", "logging initialized for integration test");
}

#[test]
fn test_pii_redaction_secrets() {
    assert_eq!(redact_if_sensitive("refresh_token", "value"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("db_password", "hunter2"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("client_secret", "s"), "[REDACTED]");
}

#[test]
fn test_pii_redaction_emails() {
    let redacted = redact_if_sensitive("value", "user@example.com");

    assert!(redacted.starts_with('u'));
    assert!(redacted.contains("[REDACTED]"));
    assert!(!redacted.contains("example.com"));
}

#[test]
fn test_pii_redaction_normal_values() {
    assert_eq!(redact_if_sensitive("key", "test-key"), "test-key");
    assert_eq!(redact_if_sensitive("value", "10 + 5 = 15"), "10 + 5 = 15");
    assert_eq!(redact_if_sensitive("model", "Google Pixel 8"), "Google Pixel 8");
}

#[test]
fn test_format_selection() {
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn)
        .with_pii_redaction(false)
        .with_filter("core_interop=debug");

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(!config.redact_pii);
    assert_eq!(config.filter.as_deref(), Some("core_interop=debug"));
}
