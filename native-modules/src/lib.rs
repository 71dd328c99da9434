//! # Native Module Wrappers
//!
//! Typed module contracts, one trait per module, plus the wrappers that adapt
//! the interop façade to them. Host glue (TurboModule and Expo registrations,
//! the WebView message handler) calls these wrappers; the wrappers perform
//! the cross-module side effects:
//!
//! - `CalculatorModule::add` logs the calculation through the logger module.
//! - `StorageModule::set_item` tags the stored value with the device model.
//! - `IntegrationsModule` reaches the logger, calculator and device info
//!   modules on behalf of web content.
//!
//! Every wrapper method returns [`Result`]. A call whose target package is
//! missing fails with [`ModuleError::Unavailable`]; wrappers never substitute
//! a default.
//!
//! ```
//! use bridge_traits::StaticDeviceEnvironment;
//! use core_interop::bootstrap;
//! use core_runtime::config::CoreConfig;
//! use native_modules::{CalculatorSpec, LoggerSpec, ModuleSet, StorageSpec};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CoreConfig::builder()
//!     .device_environment(Arc::new(StaticDeviceEnvironment::new().with_model("iPhone")))
//!     .build()?;
//! let modules = ModuleSet::new(bootstrap(&config)?);
//!
//! assert_eq!(modules.calculator.add(10.0, 5.0)?, 15.0);
//! assert_eq!(modules.logger.get_log_count()?, 1);
//!
//! modules.storage.set_item("test-key", "test-value")?;
//! assert_eq!(
//!     modules.storage.get_item("test-key")?.as_deref(),
//!     Some("test-value [Device: iPhone]")
//! );
//! # Ok(())
//! # }
//! ```

pub mod calculator;
pub mod device_info;
pub mod error;
pub mod integrations;
pub mod logger;
pub mod storage;

pub use calculator::{CalculatorModule, CalculatorSpec};
pub use device_info::{DeviceInfoModule, DeviceInfoSpec};
pub use error::{ModuleError, Result, UNAVAILABLE_MESSAGE};
pub use integrations::{IntegrationsModule, IntegrationsSpec};
pub use logger::{LoggerModule, LoggerSpec};
pub use storage::{StorageModule, StorageSpec};

use std::fmt;

use core_interop::InteropFacade;

/// Registration names the host module registries expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleName {
    TurboCalculator,
    TurboDeviceInfo,
    ExpoStorage,
    ExpoLogger,
    WebViewIntegrations,
}

impl ModuleName {
    pub const ALL: [ModuleName; 5] = [
        ModuleName::TurboCalculator,
        ModuleName::TurboDeviceInfo,
        ModuleName::ExpoStorage,
        ModuleName::ExpoLogger,
        ModuleName::WebViewIntegrations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleName::TurboCalculator => "TurboCalculator",
            ModuleName::TurboDeviceInfo => "TurboDeviceInfo",
            ModuleName::ExpoStorage => "ExpoStorage",
            ModuleName::ExpoLogger => "ExpoLogger",
            ModuleName::WebViewIntegrations => "WebViewIntegrations",
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common supertrait of every module contract.
pub trait NativeModule: Send + Sync {
    fn name(&self) -> ModuleName;
}

/// One wrapper per module, all sharing the same façade.
#[derive(Debug, Clone)]
pub struct ModuleSet {
    pub calculator: CalculatorModule,
    pub device_info: DeviceInfoModule,
    pub storage: StorageModule,
    pub logger: LoggerModule,
    pub integrations: IntegrationsModule,
}

impl ModuleSet {
    pub fn new(interop: InteropFacade) -> Self {
        Self {
            calculator: CalculatorModule::new(interop.clone()),
            device_info: DeviceInfoModule::new(interop.clone()),
            storage: StorageModule::new(interop.clone()),
            logger: LoggerModule::new(interop.clone()),
            integrations: IntegrationsModule::new(interop),
        }
    }

    /// Builds the wrappers over the process-wide façade.
    ///
    /// Fails with [`ModuleError::Unavailable`] until
    /// [`core_interop::install`] has been called.
    pub fn from_shared() -> Result<Self> {
        Ok(Self::new(core_interop::shared()?))
    }

    pub fn names(&self) -> [ModuleName; 5] {
        [
            self.calculator.name(),
            self.device_info.name(),
            self.storage.name(),
            self.logger.name(),
            self.integrations.name(),
        ]
    }
}
