//! `ExpoStorage` module

use core_interop::InteropFacade;
use core_runtime::logging::redact_if_sensitive;
use tracing::debug;

use crate::error::Result;
use crate::{ModuleName, NativeModule};

pub trait StorageSpec: NativeModule {
    /// Stores `value` tagged with the current device model.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn remove_item(&self, key: &str) -> Result<()>;
    fn get_all_keys(&self) -> Result<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct StorageModule {
    interop: InteropFacade,
}

impl StorageModule {
    pub fn new(interop: InteropFacade) -> Self {
        Self { interop }
    }
}

/// `"<value> [Device: <model>]"`
pub fn enrich_with_device(value: &str, model: &str) -> String {
    format!("{value} [Device: {model}]")
}

impl NativeModule for StorageModule {
    fn name(&self) -> ModuleName {
        ModuleName::ExpoStorage
    }
}

impl StorageSpec for StorageModule {
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let model = self.interop.get_device_model()?;
        let enriched = enrich_with_device(value, &model);

        debug!(
            key,
            value = %redact_if_sensitive(key, &enriched),
            "ExpoStorage -> TurboDeviceInfo"
        );
        self.interop.set_item(key, &enriched)?;
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.interop.get_item(key)?)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Ok(self.interop.remove_item(key)?)
    }

    fn get_all_keys(&self) -> Result<Vec<String>> {
        Ok(self.interop.get_all_keys()?)
    }
}
