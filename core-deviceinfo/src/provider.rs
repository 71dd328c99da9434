use std::fmt;
use std::sync::Arc;

use bridge_traits::DeviceEnvironment;
use tracing::trace;

use crate::descriptor::DeviceDescriptor;

/// Returned for model, name and version when the environment has no value.
pub const UNKNOWN: &str = "unknown";

/// Derives device strings from a [`DeviceEnvironment`].
///
/// Holds no mutable state; every getter re-reads the environment.
#[derive(Clone)]
pub struct DeviceInfoProvider {
    environment: Arc<dyn DeviceEnvironment>,
    bundle_id_override: Option<String>,
}

impl DeviceInfoProvider {
    pub fn new(environment: Arc<dyn DeviceEnvironment>) -> Self {
        Self {
            environment,
            bundle_id_override: None,
        }
    }

    /// Reports `bundle_id` regardless of what the environment says.
    pub fn with_bundle_id_override(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id_override = Some(bundle_id.into());
        self
    }

    /// `"<manufacturer> <model>"` when the platform reports a manufacturer,
    /// the bare model otherwise.
    pub fn get_device_model(&self) -> String {
        let model = non_empty(self.environment.model());
        let manufacturer = non_empty(self.environment.manufacturer());

        let value = match (manufacturer, model) {
            (Some(manufacturer), Some(model)) => format!("{manufacturer} {model}"),
            (None, Some(model)) => model,
            (Some(manufacturer), None) => format!("{manufacturer} {UNKNOWN}"),
            (None, None) => UNKNOWN.to_string(),
        };
        trace!(model = %value, "Resolved device model");
        value
    }

    pub fn get_device_name(&self) -> String {
        non_empty(self.environment.device_name()).unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn get_system_version(&self) -> String {
        non_empty(self.environment.system_version()).unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn get_bundle_id(&self) -> String {
        self.bundle_id_override
            .clone()
            .or_else(|| non_empty(self.environment.bundle_id()))
            .unwrap_or_default()
    }

    pub fn descriptor(&self) -> DeviceDescriptor {
        DeviceDescriptor {
            model: self.get_device_model(),
            name: self.get_device_name(),
            os_version: self.get_system_version(),
            bundle_id: self.get_bundle_id(),
        }
    }
}

impl fmt::Debug for DeviceInfoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceInfoProvider")
            .field("bundle_id_override", &self.bundle_id_override)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
