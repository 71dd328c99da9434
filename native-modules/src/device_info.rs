//! `TurboDeviceInfo` module

use core_interop::InteropFacade;

use crate::error::Result;
use crate::{ModuleName, NativeModule};

pub trait DeviceInfoSpec: NativeModule {
    fn get_device_model(&self) -> Result<String>;
    fn get_device_name(&self) -> Result<String>;
    fn get_system_version(&self) -> Result<String>;
    fn get_bundle_id(&self) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct DeviceInfoModule {
    interop: InteropFacade,
}

impl DeviceInfoModule {
    pub fn new(interop: InteropFacade) -> Self {
        Self { interop }
    }
}

impl NativeModule for DeviceInfoModule {
    fn name(&self) -> ModuleName {
        ModuleName::TurboDeviceInfo
    }
}

impl DeviceInfoSpec for DeviceInfoModule {
    fn get_device_model(&self) -> Result<String> {
        Ok(self.interop.get_device_model()?)
    }

    fn get_device_name(&self) -> Result<String> {
        Ok(self.interop.get_device_name()?)
    }

    fn get_system_version(&self) -> Result<String> {
        Ok(self.interop.get_system_version()?)
    }

    fn get_bundle_id(&self) -> Result<String> {
        Ok(self.interop.get_bundle_id()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::StaticDeviceEnvironment;
    use core_deviceinfo::DeviceInfoProvider;
    use core_interop::InteropDependencies;
    use std::sync::Arc;

    #[test]
    fn test_getters() {
        let env = StaticDeviceEnvironment::new()
            .with_model("iPhone")
            .with_device_name("iPhone 15")
            .with_system_version("17.4")
            .with_bundle_id("com.newarchspike");
        let module = DeviceInfoModule::new(InteropFacade::new(
            InteropDependencies::new()
                .with_device_info(Arc::new(DeviceInfoProvider::new(Arc::new(env)))),
        ));

        assert_eq!(module.get_device_model().unwrap(), "iPhone");
        assert_eq!(module.get_device_name().unwrap(), "iPhone 15");
        assert_eq!(module.get_system_version().unwrap(), "17.4");
        assert_eq!(module.get_bundle_id().unwrap(), "com.newarchspike");
    }

    #[test]
    fn test_missing_provider() {
        let module = DeviceInfoModule::new(InteropFacade::new(InteropDependencies::new()));
        assert!(module.get_device_model().unwrap_err().is_unavailable());
        assert!(module.get_bundle_id().unwrap_err().is_unavailable());
    }
}
