//! # Host Bridge Traits
//!
//! Capability traits that the host application implements for the interop
//! core.
//!
//! ## Overview
//!
//! The state holders behind the interop facade never talk to the platform
//! directly. Everything they need from the host (where log lines go, what the
//! device looks like) is expressed as a trait in this crate and injected at
//! construction time. Each host platform ships its own adapters:
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ Available |
//! | iOS      | host glue (Swift)   | 📋 Planned |
//! | Android  | host glue (Kotlin)  | 📋 Planned |
//!
//! ## Traits
//!
//! ### Logging
//! - [`LogEmitter`](logging::LogEmitter) - Fire-and-forget emission of log lines from the logger module
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured tracing events to host logging
//!
//! ### Environment
//! - [`DeviceEnvironment`](device::DeviceEnvironment) - Read-only device and application facts
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so a single adapter can be shared
//! by every module wrapper, whichever thread the host calls from.
//!
//! ## Examples
//!
//! ### Implementing DeviceEnvironment
//!
//! ```
//! use bridge_traits::device::DeviceEnvironment;
//!
//! struct KioskEnvironment;
//!
//! impl DeviceEnvironment for KioskEnvironment {
//!     fn manufacturer(&self) -> Option<String> {
//!         Some("Acme".to_string())
//!     }
//!     fn model(&self) -> Option<String> {
//!         Some("Kiosk 3".to_string())
//!     }
//!     fn device_name(&self) -> Option<String> {
//!         None
//!     }
//!     fn system_version(&self) -> Option<String> {
//!         Some("14".to_string())
//!     }
//!     fn bundle_id(&self) -> Option<String> {
//!         Some("com.acme.kiosk".to_string())
//!     }
//! }
//! ```

pub mod device;
pub mod error;
pub mod logging;

pub use error::BridgeError;

// Re-export commonly used types
pub use device::{DeviceEnvironment, StaticDeviceEnvironment};
pub use logging::{ConsoleLogger, LogEmitter, LogEntry, LogLevel, LoggerSink, Severity};
