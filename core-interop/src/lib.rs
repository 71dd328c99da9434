//! Interop façade and bootstrap helpers.
//!
//! This crate is the single access point through which any module reaches
//! any other module's logic. It holds `Arc` handles to the state holders
//! (`core-logger`, `core-storage`, `core-deviceinfo`, `core-calculator`) and
//! delegates to them without adding logic, caching, or transformation.
//!
//! A host may ship without some of the packages. Every dependency is
//! therefore optional, and an operation whose target is absent returns
//! [`InteropError::Unavailable`].
//!
//! ```
//! use bridge_traits::StaticDeviceEnvironment;
//! use core_interop::bootstrap;
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! # fn main() -> core_interop::Result<()> {
//! let config = CoreConfig::builder()
//!     .device_environment(Arc::new(StaticDeviceEnvironment::new().with_model("iPhone")))
//!     .build()?;
//! let interop = bootstrap(&config)?;
//!
//! interop.set_item("test-key", "value")?;
//! assert_eq!(interop.get_item("test-key")?.as_deref(), Some("value"));
//! assert_eq!(interop.get_device_model()?, "iPhone");
//! # Ok(())
//! # }
//! ```

pub mod error;
mod shared;

pub use error::{InteropError, Result};
pub use shared::{install, is_installed, shared, shared_or_init};

use std::fmt;
use std::sync::Arc;

use bridge_traits::LogEmitter;
use core_calculator::CalculatorService;
use core_deviceinfo::{DeviceDescriptor, DeviceInfoProvider};
use core_logger::{LogStore, TracingEmitter};
use core_runtime::config::CoreConfig;
use core_storage::KeyValueStore;
use tracing::{debug, info, warn};

/// Capability names reported in [`InteropError::Unavailable`].
pub mod capability {
    pub const LOGGER: &str = "LogStore";
    pub const STORAGE: &str = "KeyValueStore";
    pub const DEVICE_INFO: &str = "DeviceInfoProvider";
    pub const CALCULATOR: &str = "CalculatorService";
}

/// Line logged by [`InteropFacade::increment_log_count`].
pub const LOG_TRIGGERED_MESSAGE: &str = "[ModuleInterop] Log triggered";

/// Aggregated handles to the state holders the façade delegates to.
#[derive(Default, Clone)]
pub struct InteropDependencies {
    pub logger: Option<Arc<LogStore>>,
    pub storage: Option<Arc<KeyValueStore>>,
    pub device_info: Option<Arc<DeviceInfoProvider>>,
    pub calculator: Option<Arc<CalculatorService>>,
}

impl InteropDependencies {
    /// Empty bundle; every operation reports its target as unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(mut self, logger: Arc<LogStore>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_storage(mut self, storage: Arc<KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_device_info(mut self, device_info: Arc<DeviceInfoProvider>) -> Self {
        self.device_info = Some(device_info);
        self
    }

    pub fn with_calculator(mut self, calculator: Arc<CalculatorService>) -> Self {
        self.calculator = Some(calculator);
        self
    }
}

impl fmt::Debug for InteropDependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteropDependencies")
            .field("logger", &self.logger.is_some())
            .field("storage", &self.storage.is_some())
            .field("device_info", &self.device_info.is_some())
            .field("calculator", &self.calculator.is_some())
            .finish()
    }
}

/// Primary façade shared by every module wrapper.
///
/// Cloning is cheap; all clones delegate to the same state holders.
#[derive(Clone, Debug)]
pub struct InteropFacade {
    deps: Arc<InteropDependencies>,
}

impl InteropFacade {
    pub fn new(deps: InteropDependencies) -> Self {
        Self {
            deps: Arc::new(deps),
        }
    }

    /// Access the state holders behind the façade.
    pub fn dependencies(&self) -> Arc<InteropDependencies> {
        Arc::clone(&self.deps)
    }

    // Logger

    pub fn log_info(&self, message: &str) -> Result<()> {
        self.logger("log_info")?.log_info(message);
        Ok(())
    }

    pub fn log_warning(&self, message: &str) -> Result<()> {
        self.logger("log_warning")?.log_warning(message);
        Ok(())
    }

    pub fn log_error(&self, message: &str) -> Result<()> {
        self.logger("log_error")?.log_error(message);
        Ok(())
    }

    pub fn get_log_count(&self) -> Result<u64> {
        Ok(self.logger("get_log_count")?.get_count())
    }

    pub fn reset_log_count(&self) -> Result<()> {
        self.logger("reset_log_count")?.reset();
        Ok(())
    }

    /// Logs a fixed info line, bumping the counter by one.
    pub fn increment_log_count(&self) -> Result<()> {
        self.logger("increment_log_count")?
            .log_info(LOG_TRIGGERED_MESSAGE);
        Ok(())
    }

    // Storage

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage("set_item")?.set_item(key, value);
        Ok(())
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage("get_item")?.get_item(key))
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.storage("remove_item")?.remove_item(key);
        Ok(())
    }

    pub fn get_all_keys(&self) -> Result<Vec<String>> {
        Ok(self.storage("get_all_keys")?.get_all_keys())
    }

    pub fn clear_storage(&self) -> Result<()> {
        self.storage("clear_storage")?.clear();
        Ok(())
    }

    // Device info

    pub fn get_device_model(&self) -> Result<String> {
        Ok(self.device_info("get_device_model")?.get_device_model())
    }

    pub fn get_device_name(&self) -> Result<String> {
        Ok(self.device_info("get_device_name")?.get_device_name())
    }

    pub fn get_system_version(&self) -> Result<String> {
        Ok(self.device_info("get_system_version")?.get_system_version())
    }

    pub fn get_bundle_id(&self) -> Result<String> {
        Ok(self.device_info("get_bundle_id")?.get_bundle_id())
    }

    pub fn device_descriptor(&self) -> Result<DeviceDescriptor> {
        Ok(self.device_info("device_descriptor")?.descriptor())
    }

    // Calculator

    pub fn add(&self, a: f64, b: f64) -> Result<f64> {
        Ok(self.calculator("add")?.add(a, b))
    }

    pub fn subtract(&self, a: f64, b: f64) -> Result<f64> {
        Ok(self.calculator("subtract")?.subtract(a, b))
    }

    pub fn multiply(&self, a: f64, b: f64) -> Result<f64> {
        Ok(self.calculator("multiply")?.multiply(a, b))
    }

    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        Ok(self.calculator("divide")?.divide(a, b))
    }

    fn logger(&self, operation: &'static str) -> Result<&LogStore> {
        resolve(self.deps.logger.as_deref(), capability::LOGGER, operation)
    }

    fn storage(&self, operation: &'static str) -> Result<&KeyValueStore> {
        resolve(self.deps.storage.as_deref(), capability::STORAGE, operation)
    }

    fn device_info(&self, operation: &'static str) -> Result<&DeviceInfoProvider> {
        resolve(
            self.deps.device_info.as_deref(),
            capability::DEVICE_INFO,
            operation,
        )
    }

    fn calculator(&self, operation: &'static str) -> Result<&CalculatorService> {
        resolve(
            self.deps.calculator.as_deref(),
            capability::CALCULATOR,
            operation,
        )
    }
}

fn resolve<'a, T>(
    target: Option<&'a T>,
    capability: &'static str,
    operation: &'static str,
) -> Result<&'a T> {
    match target {
        Some(target) => {
            debug!(capability, operation, "Delegating");
            Ok(target)
        }
        None => {
            warn!(capability, operation, "Interop target unavailable");
            Err(InteropError::unavailable(
                capability,
                format!("{operation} requires the {capability} package, which is not installed"),
            ))
        }
    }
}

/// Builds every enabled state holder from `config` and wraps them in a façade.
///
/// The logger uses the configured emitter, or a [`TracingEmitter`] tagged with
/// the configured subsystem and category.
pub fn bootstrap(config: &CoreConfig) -> Result<InteropFacade> {
    config.validate()?;

    let mut deps = InteropDependencies::new();
    let modules = config.modules;

    if modules.logger {
        let emitter: Arc<dyn LogEmitter> = match &config.log_emitter {
            Some(emitter) => Arc::clone(emitter),
            None => Arc::new(TracingEmitter::new(
                config.log_subsystem.as_str(),
                config.log_category.as_str(),
            )),
        };
        deps = deps.with_logger(Arc::new(LogStore::new(emitter)));
    }

    if modules.storage {
        deps = deps.with_storage(Arc::new(KeyValueStore::new()));
    }

    if modules.device_info {
        let environment = config.device_environment.clone().ok_or_else(|| {
            core_runtime::Error::CapabilityMissing {
                capability: "DeviceEnvironment".to_string(),
                message: "The device info module needs a DeviceEnvironment".to_string(),
            }
        })?;

        let mut provider = DeviceInfoProvider::new(environment);
        if let Some(bundle_id) = &config.bundle_id_override {
            provider = provider.with_bundle_id_override(bundle_id.as_str());
        }
        deps = deps.with_device_info(Arc::new(provider));
    }

    if modules.calculator {
        deps = deps.with_calculator(Arc::new(CalculatorService::new()));
    }

    info!(
        logger = modules.logger,
        storage = modules.storage,
        device_info = modules.device_info,
        calculator = modules.calculator,
        "Interop facade bootstrapped"
    );

    Ok(InteropFacade::new(deps))
}

/// Convenience bootstrapper for desktop hosts.
///
/// Every module is enabled and device facts come from
/// `DesktopDeviceEnvironment`.
#[cfg(feature = "desktop-shims")]
pub fn bootstrap_desktop() -> Result<InteropFacade> {
    let config = CoreConfig::builder().build()?;
    bootstrap(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{Severity, StaticDeviceEnvironment};
    use core_runtime::config::ModuleFlags;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Emitter {}

        impl LogEmitter for Emitter {
            fn emit(&self, severity: Severity, text: &str);
        }
    }

    fn pixel() -> Arc<StaticDeviceEnvironment> {
        Arc::new(
            StaticDeviceEnvironment::new()
                .with_manufacturer("Google")
                .with_model("Pixel 8")
                .with_device_name("Pixel 8")
                .with_system_version("14")
                .with_bundle_id("com.newarchspike"),
        )
    }

    fn full_facade() -> InteropFacade {
        InteropFacade::new(
            InteropDependencies::new()
                .with_logger(Arc::new(LogStore::with_tracing()))
                .with_storage(Arc::new(KeyValueStore::new()))
                .with_device_info(Arc::new(DeviceInfoProvider::new(pixel())))
                .with_calculator(Arc::new(CalculatorService::new())),
        )
    }

    #[test]
    fn test_logger_pass_through() {
        let interop = full_facade();
        interop.log_info("a").unwrap();
        interop.log_warning("b").unwrap();
        interop.log_error("c").unwrap();
        assert_eq!(interop.get_log_count().unwrap(), 3);

        interop.reset_log_count().unwrap();
        assert_eq!(interop.get_log_count().unwrap(), 0);
    }

    #[test]
    fn test_increment_log_count_logs_fixed_line() {
        let mut emitter = MockEmitter::new();
        emitter
            .expect_emit()
            .with(eq(Severity::Info), eq(LOG_TRIGGERED_MESSAGE))
            .times(1)
            .return_const(());

        let interop = InteropFacade::new(
            InteropDependencies::new().with_logger(Arc::new(LogStore::new(Arc::new(emitter)))),
        );
        interop.increment_log_count().unwrap();
        assert_eq!(interop.get_log_count().unwrap(), 1);
    }

    #[test]
    fn test_storage_pass_through() {
        let interop = full_facade();
        interop.set_item("k", "v").unwrap();
        assert_eq!(interop.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(interop.get_all_keys().unwrap(), vec!["k".to_string()]);

        interop.remove_item("k").unwrap();
        assert_eq!(interop.get_item("k").unwrap(), None);

        interop.set_item("a", "1").unwrap();
        interop.clear_storage().unwrap();
        assert!(interop.get_all_keys().unwrap().is_empty());
    }

    #[test]
    fn test_device_pass_through() {
        let interop = full_facade();
        assert_eq!(interop.get_device_model().unwrap(), "Google Pixel 8");
        assert_eq!(interop.get_device_name().unwrap(), "Pixel 8");
        assert_eq!(interop.get_system_version().unwrap(), "14");
        assert_eq!(interop.get_bundle_id().unwrap(), "com.newarchspike");
        assert_eq!(interop.device_descriptor().unwrap().os_version, "14");
    }

    #[test]
    fn test_calculator_pass_through() {
        let interop = full_facade();
        assert_eq!(interop.add(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(interop.subtract(10.0, 5.0).unwrap(), 5.0);
        assert_eq!(interop.multiply(10.0, 5.0).unwrap(), 50.0);
        assert_eq!(interop.divide(10.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_calculator_does_not_log() {
        let interop = full_facade();
        interop.add(1.0, 1.0).unwrap();
        assert_eq!(interop.get_log_count().unwrap(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let interop = full_facade();
        let other = interop.clone();
        other.set_item("shared", "yes").unwrap();
        other.log_info("from clone").unwrap();

        assert_eq!(interop.get_item("shared").unwrap().as_deref(), Some("yes"));
        assert_eq!(interop.get_log_count().unwrap(), 1);
    }

    #[test]
    fn test_missing_dependencies_are_unavailable() {
        let interop = InteropFacade::new(InteropDependencies::new());

        match interop.get_log_count() {
            Err(InteropError::Unavailable { capability: name, .. }) => {
                assert_eq!(name, capability::LOGGER)
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
        assert!(interop.set_item("k", "v").unwrap_err().is_unavailable());
        assert!(interop.get_device_model().unwrap_err().is_unavailable());
        assert!(interop.add(1.0, 2.0).unwrap_err().is_unavailable());
        assert!(interop.increment_log_count().unwrap_err().is_unavailable());
    }

    #[test]
    fn test_bootstrap_respects_module_flags() {
        let config = CoreConfig::builder()
            .modules(ModuleFlags {
                storage: false,
                device_info: false,
                ..ModuleFlags::all()
            })
            .build()
            .unwrap();
        let interop = bootstrap(&config).unwrap();

        assert!(interop.log_info("ok").is_ok());
        assert!(interop.add(1.0, 1.0).is_ok());
        assert!(interop.get_item("k").unwrap_err().is_unavailable());
        assert!(interop.get_bundle_id().unwrap_err().is_unavailable());
    }

    #[test]
    fn test_bootstrap_uses_configured_emitter() {
        let mut emitter = MockEmitter::new();
        emitter
            .expect_emit()
            .with(eq(Severity::Error), eq("boom"))
            .times(1)
            .return_const(());

        let config = CoreConfig::builder()
            .device_environment(pixel())
            .log_emitter(Arc::new(emitter))
            .build()
            .unwrap();
        let interop = bootstrap(&config).unwrap();

        interop.log_error("boom").unwrap();
    }

    #[test]
    fn test_bootstrap_applies_bundle_override() {
        let config = CoreConfig::builder()
            .device_environment(pixel())
            .bundle_id("com.example.override")
            .build()
            .unwrap();
        let interop = bootstrap(&config).unwrap();

        assert_eq!(interop.get_bundle_id().unwrap(), "com.example.override");
    }

    #[test]
    fn test_bootstrap_rejects_invalid_config() {
        let mut config = CoreConfig::builder()
            .device_environment(pixel())
            .build()
            .unwrap();
        config.device_environment = None;

        let err = bootstrap(&config).unwrap_err();
        assert!(matches!(
            err,
            InteropError::Runtime(core_runtime::Error::CapabilityMissing { .. })
        ));
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_bootstrap_desktop() {
        let interop = bootstrap_desktop().unwrap();
        assert!(!interop.get_device_model().unwrap().is_empty());
        assert_eq!(interop.get_bundle_id().unwrap(), "");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_log_info_through_facade() {
        let interop = full_facade();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let interop = interop.clone();
                tokio::spawn(async move {
                    for _ in 0..100 {
                        interop.log_info("tick").unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(interop.get_log_count().unwrap(), 1000);
    }
}
