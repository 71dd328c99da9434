//! Device Environment Abstraction
//!
//! Read-only facts about the device and the running application bundle.

/// Device environment trait
///
/// Supplies the raw facts the device-info module derives its strings from:
/// - **iOS**: `UIDevice.current`, `Bundle.main.bundleIdentifier`
/// - **Android**: `Build.MANUFACTURER`, `Build.MODEL`, `Build.VERSION.RELEASE`, `Context.packageName`
/// - **Desktop**: OS constants, hostname, `/etc/os-release`
///
/// Every accessor returns `None` when the platform cannot supply the value.
/// Callers substitute a sentinel rather than failing. Values must not change
/// during the lifetime of the process.
pub trait DeviceEnvironment: Send + Sync {
    /// Hardware manufacturer, if the platform reports one separately
    fn manufacturer(&self) -> Option<String>;

    /// Hardware model identifier
    fn model(&self) -> Option<String>;

    /// User-facing device name
    fn device_name(&self) -> Option<String>;

    /// Operating system version string
    fn system_version(&self) -> Option<String>;

    /// Identifier of the running application bundle/package
    fn bundle_id(&self) -> Option<String>;
}

/// Environment with fixed, host-supplied values.
///
/// Useful for hosts that read the facts once in their own glue code and for
/// deterministic tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDeviceEnvironment {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub device_name: Option<String>,
    pub system_version: Option<String>,
    pub bundle_id: Option<String>,
}

impl StaticDeviceEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    pub fn with_system_version(mut self, version: impl Into<String>) -> Self {
        self.system_version = Some(version.into());
        self
    }

    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id = Some(bundle_id.into());
        self
    }
}

impl DeviceEnvironment for StaticDeviceEnvironment {
    fn manufacturer(&self) -> Option<String> {
        self.manufacturer.clone()
    }

    fn model(&self) -> Option<String> {
        self.model.clone()
    }

    fn device_name(&self) -> Option<String> {
        self.device_name.clone()
    }

    fn system_version(&self) -> Option<String> {
        self.system_version.clone()
    }

    fn bundle_id(&self) -> Option<String> {
        self.bundle_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_environment_builder() {
        let env = StaticDeviceEnvironment::new()
            .with_manufacturer("Google")
            .with_model("Pixel 8")
            .with_system_version("14")
            .with_bundle_id("com.newarchspike");

        assert_eq!(env.manufacturer(), Some("Google".to_string()));
        assert_eq!(env.model(), Some("Pixel 8".to_string()));
        assert_eq!(env.device_name(), None);
        assert_eq!(env.system_version(), Some("14".to_string()));
        assert_eq!(env.bundle_id(), Some("com.newarchspike".to_string()));
    }

    #[test]
    fn test_static_environment_default_is_empty() {
        let env = StaticDeviceEnvironment::default();
        assert!(env.model().is_none());
        assert!(env.bundle_id().is_none());
    }
}
