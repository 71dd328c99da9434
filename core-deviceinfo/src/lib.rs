//! # Device Info Module Core
//!
//! Stateless derivation of device and bundle facts from a host-supplied
//! [`DeviceEnvironment`](bridge_traits::DeviceEnvironment).
//!
//! Reads never fail. When the environment cannot supply a value the provider
//! returns a sentinel instead: [`UNKNOWN`] for the model, name and version,
//! and an empty string for the bundle identifier.
//!
//! ```
//! use bridge_traits::StaticDeviceEnvironment;
//! use core_deviceinfo::DeviceInfoProvider;
//! use std::sync::Arc;
//!
//! let env = StaticDeviceEnvironment::new()
//!     .with_manufacturer("Google")
//!     .with_model("Pixel 8");
//! let provider = DeviceInfoProvider::new(Arc::new(env));
//!
//! assert_eq!(provider.get_device_model(), "Google Pixel 8");
//! assert_eq!(provider.get_system_version(), "unknown");
//! assert_eq!(provider.get_bundle_id(), "");
//! ```

mod descriptor;
mod provider;

pub use descriptor::DeviceDescriptor;
pub use provider::{DeviceInfoProvider, UNKNOWN};
