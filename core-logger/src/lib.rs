//! # Logger Module Core
//!
//! Owns the log event counter and the log-emission operation.
//!
//! ## Overview
//!
//! [`LogStore`] is the state holder behind the logger module. Every log call,
//! whatever its severity, is emitted through the injected
//! [`LogEmitter`](bridge_traits::LogEmitter) and bumps the counter by exactly
//! one. Message text is never retained.
//!
//! Other modules never touch this crate directly; they reach the store
//! through `core_interop::InteropFacade`.
//!
//! ## Usage
//!
//! ```
//! use core_logger::LogStore;
//!
//! let store = LogStore::with_tracing();
//! store.log_info("TurboCalculator: 10 + 5 = 15");
//! store.log_error("upload failed");
//! assert_eq!(store.get_count(), 2);
//!
//! store.reset();
//! assert_eq!(store.get_count(), 0);
//! ```

mod emitter;
mod store;

pub use emitter::TracingEmitter;
pub use store::LogStore;
