use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bridge_traits::logging::{LogEmitter, Severity};
use tracing::debug;

use crate::emitter::TracingEmitter;

/// Process-lifetime log event counter plus the emitter that carries each line
/// to the platform log facility.
///
/// Counting is lock-free; concurrent `log` calls from any thread are each
/// counted exactly once.
pub struct LogStore {
    count: AtomicU64,
    emitter: Arc<dyn LogEmitter>,
}

impl LogStore {
    pub fn new(emitter: Arc<dyn LogEmitter>) -> Self {
        Self {
            count: AtomicU64::new(0),
            emitter,
        }
    }

    /// Store emitting through [`TracingEmitter`] with the default tags.
    pub fn with_tracing() -> Self {
        Self::new(Arc::new(TracingEmitter::default()))
    }

    /// Emits `message` at `severity` and increments the counter by one.
    ///
    /// Empty messages are emitted and counted like any other.
    pub fn log(&self, severity: Severity, message: &str) {
        self.emitter.emit(severity, message);
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn log_info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn log_warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    pub fn log_error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Number of log calls since creation or the last [`reset`](Self::reset).
    pub fn get_count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Sets the counter back to zero. Emits nothing.
    pub fn reset(&self) {
        let previous = self.count.swap(0, Ordering::SeqCst);
        debug!(previous, "Log counter reset");
    }
}

impl Default for LogStore {
    fn default() -> Self {
        Self::with_tracing()
    }
}

impl fmt::Debug for LogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStore")
            .field("count", &self.get_count())
            .finish_non_exhaustive()
    }
}
