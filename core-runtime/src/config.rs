//! # Core Configuration Module
//!
//! Provides configuration management for the module interop core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds the host bridges and the set of modules the host ships.
//! It enforces fail-fast validation so a missing bridge is reported when the
//! facade is bootstrapped, not on the first cross-module call.
//!
//! ## Required Dependencies
//!
//! - `DeviceEnvironment` - Required when the device-info module is enabled
//!
//! ## Optional Dependencies (with defaults)
//!
//! - `LogEmitter` - Outbound log lines (default: `tracing` events)
//!
//! When the `desktop-shims` feature is enabled, `DesktopDeviceEnvironment`
//! is injected automatically if no environment is provided.
//!
//! ## Usage
//!
//! ### Configuration with Custom Bridges
//!
//! ```
//! use bridge_traits::StaticDeviceEnvironment;
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let env = StaticDeviceEnvironment::new().with_model("iPhone");
//!
//! let config = CoreConfig::builder()
//!     .device_environment(Arc::new(env))
//!     .bundle_id("com.example.app")
//!     .enable_calculator(false)
//!     .build()
//!     .expect("Failed to build config");
//!
//! assert!(!config.modules.calculator);
//! ```
//!
//! ## Error Handling
//!
//! The builder validates its inputs and provides actionable error messages:
//!
//! ```
//! use core_runtime::config::CoreConfig;
//!
//! let result = CoreConfig::builder().log_subsystem("").build();
//! assert!(result.is_err());
//! ```

use crate::error::{Error, Result};
use bridge_traits::{DeviceEnvironment, LogEmitter};
use std::sync::Arc;

pub use bridge_traits::logging::{DEFAULT_LOG_CATEGORY, DEFAULT_LOG_SUBSYSTEM};

/// Core configuration for the module interop core.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Source of device facts (present whenever the device-info module is enabled)
    pub device_environment: Option<Arc<dyn DeviceEnvironment>>,

    /// Outbound log emitter (the logger module falls back to `tracing`)
    pub log_emitter: Option<Arc<dyn LogEmitter>>,

    /// Which module packages the host ships
    pub modules: ModuleFlags,

    /// Bundle identifier that wins over whatever the environment reports
    pub bundle_id_override: Option<String>,

    /// Subsystem tag for emitted log lines
    pub log_subsystem: String,

    /// Category tag for emitted log lines
    pub log_category: String,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field(
                "device_environment",
                &self
                    .device_environment
                    .as_ref()
                    .map(|_| "DeviceEnvironment { ... }"),
            )
            .field(
                "log_emitter",
                &self.log_emitter.as_ref().map(|_| "LogEmitter { ... }"),
            )
            .field("modules", &self.modules)
            .field("bundle_id_override", &self.bundle_id_override)
            .field("log_subsystem", &self.log_subsystem)
            .field("log_category", &self.log_category)
            .finish()
    }
}

/// Module flags select which packages are installed in the host.
///
/// A disabled module is not constructed; calls that target it through the
/// interop facade report it as unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleFlags {
    /// Logger module (log counter and emission)
    pub logger: bool,

    /// Key-value storage module
    pub storage: bool,

    /// Device info module (requires DeviceEnvironment)
    pub device_info: bool,

    /// Calculator module
    pub calculator: bool,
}

impl Default for ModuleFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl ModuleFlags {
    /// Every module enabled
    pub fn all() -> Self {
        Self {
            logger: true,
            storage: true,
            device_info: true,
            calculator: true,
        }
    }

    /// Every module disabled
    pub fn none() -> Self {
        Self {
            logger: false,
            storage: false,
            device_info: false,
            calculator: false,
        }
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Log subsystem and category are not empty
    /// - A bundle id override, when given, is not empty
    /// - The device-info module has an environment to read from
    pub fn validate(&self) -> Result<()> {
        if self.log_subsystem.trim().is_empty() {
            return Err(Error::Config("Log subsystem cannot be empty".to_string()));
        }

        if self.log_category.trim().is_empty() {
            return Err(Error::Config("Log category cannot be empty".to_string()));
        }

        if let Some(bundle_id) = &self.bundle_id_override {
            if bundle_id.trim().is_empty() {
                return Err(Error::Config(
                    "Bundle id override cannot be empty".to_string(),
                ));
            }
        }

        if self.modules.device_info && self.device_environment.is_none() {
            return Err(device_environment_missing_error());
        }

        Ok(())
    }
}

fn device_environment_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "DeviceEnvironment".to_string(),
        message: "DeviceEnvironment implementation is required by the device info module. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default DesktopDeviceEnvironment. \
                 Mobile: inject an adapter over UIDevice/Build. \
                 Otherwise: disable the device info module."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_device_environment() -> Result<Arc<dyn DeviceEnvironment>> {
    use bridge_desktop::DesktopDeviceEnvironment;

    let env: Arc<dyn DeviceEnvironment> = Arc::new(DesktopDeviceEnvironment::new());
    Ok(env)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_device_environment() -> Result<Arc<dyn DeviceEnvironment>> {
    Err(device_environment_missing_error())
}

/// Builder for constructing [`CoreConfig`] instances.
///
/// Use this builder to incrementally set configuration options and then
/// call [`build()`](CoreConfigBuilder::build) to create the final config.
#[derive(Default)]
pub struct CoreConfigBuilder {
    device_environment: Option<Arc<dyn DeviceEnvironment>>,
    log_emitter: Option<Arc<dyn LogEmitter>>,
    modules: Option<ModuleFlags>,
    bundle_id_override: Option<String>,
    log_subsystem: Option<String>,
    log_category: Option<String>,
}

impl CoreConfigBuilder {
    /// Sets the device environment implementation.
    ///
    /// If not provided, the desktop default is used when the `desktop-shims`
    /// feature is enabled.
    pub fn device_environment(mut self, env: Arc<dyn DeviceEnvironment>) -> Self {
        self.device_environment = Some(env);
        self
    }

    /// Sets the log emitter implementation (optional).
    pub fn log_emitter(mut self, emitter: Arc<dyn LogEmitter>) -> Self {
        self.log_emitter = Some(emitter);
        self
    }

    /// Replaces the whole set of module flags.
    pub fn modules(mut self, modules: ModuleFlags) -> Self {
        self.modules = Some(modules);
        self
    }

    /// Enables or disables the logger module.
    pub fn enable_logger(mut self, enabled: bool) -> Self {
        self.modules.get_or_insert_with(ModuleFlags::all).logger = enabled;
        self
    }

    /// Enables or disables the storage module.
    pub fn enable_storage(mut self, enabled: bool) -> Self {
        self.modules.get_or_insert_with(ModuleFlags::all).storage = enabled;
        self
    }

    /// Enables or disables the device info module.
    pub fn enable_device_info(mut self, enabled: bool) -> Self {
        self.modules.get_or_insert_with(ModuleFlags::all).device_info = enabled;
        self
    }

    /// Enables or disables the calculator module.
    pub fn enable_calculator(mut self, enabled: bool) -> Self {
        self.modules.get_or_insert_with(ModuleFlags::all).calculator = enabled;
        self
    }

    /// Sets the bundle identifier reported by the device info module,
    /// overriding the environment.
    pub fn bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id_override = Some(bundle_id.into());
        self
    }

    /// Sets the subsystem tag for emitted log lines.
    ///
    /// Default: [`DEFAULT_LOG_SUBSYSTEM`]
    pub fn log_subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.log_subsystem = Some(subsystem.into());
        self
    }

    /// Sets the category tag for emitted log lines.
    ///
    /// Default: [`DEFAULT_LOG_CATEGORY`]
    pub fn log_category(mut self, category: impl Into<String>) -> Self {
        self.log_category = Some(category.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The device info module is enabled and no `DeviceEnvironment` is
    ///   available (not provided, no `desktop-shims`)
    /// - Any value fails [`CoreConfig::validate`]
    pub fn build(self) -> Result<CoreConfig> {
        let modules = self.modules.unwrap_or_default();

        let device_environment = match self.device_environment {
            Some(env) => Some(env),
            None if modules.device_info => Some(provide_default_device_environment()?),
            None => None,
        };

        let config = CoreConfig {
            device_environment,
            log_emitter: self.log_emitter,
            modules,
            bundle_id_override: self.bundle_id_override,
            log_subsystem: self
                .log_subsystem
                .unwrap_or_else(|| DEFAULT_LOG_SUBSYSTEM.to_string()),
            log_category: self
                .log_category
                .unwrap_or_else(|| DEFAULT_LOG_CATEGORY.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}
