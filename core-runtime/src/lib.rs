//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the module interop core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities every other core crate depends
//! on. It establishes the logging conventions and the configuration contract
//! (which modules the host ships, which bridges it injects) used to bootstrap
//! the interop facade.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
