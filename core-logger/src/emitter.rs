//! Default log emitter backed by `tracing`

use bridge_traits::logging::{LogEmitter, Severity, DEFAULT_LOG_CATEGORY, DEFAULT_LOG_SUBSYSTEM};
use tracing::{error, info, warn};

/// Emits log lines as `tracing` events.
///
/// Each event carries the subsystem and category as fields, so the host sink
/// configured in `core_runtime::logging` can route them (os_log subsystem and
/// category, Logcat tag).
#[derive(Debug, Clone)]
pub struct TracingEmitter {
    subsystem: String,
    category: String,
}

impl TracingEmitter {
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Default for TracingEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_SUBSYSTEM, DEFAULT_LOG_CATEGORY)
    }
}

impl LogEmitter for TracingEmitter {
    fn emit(&self, severity: Severity, text: &str) {
        match severity {
            Severity::Info => info!(
                subsystem = %self.subsystem,
                category = %self.category,
                "{}",
                text
            ),
            Severity::Warning => warn!(
                subsystem = %self.subsystem,
                category = %self.category,
                "{}",
                text
            ),
            Severity::Error => error!(
                subsystem = %self.subsystem,
                category = %self.category,
                "{}",
                text
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tags() {
        let emitter = TracingEmitter::default();
        assert_eq!(emitter.subsystem(), DEFAULT_LOG_SUBSYSTEM);
        assert_eq!(emitter.category(), DEFAULT_LOG_CATEGORY);
        assert_eq!(emitter.subsystem(), "com.newarchspike");
        assert_eq!(emitter.category(), "ExpoLogger");
    }

    #[test]
    fn test_emit_without_subscriber_is_silent() {
        let emitter = TracingEmitter::new("com.example", "Tests");
        emitter.emit(Severity::Info, "info");
        emitter.emit(Severity::Warning, "warning");
        emitter.emit(Severity::Error, "error");
    }
}
