//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `DeviceEnvironment` using OS constants, the hostname and
//!   `/etc/os-release` where available
//!
//! Log emission needs no desktop adapter: the logger module falls back to
//! `tracing` and `core_runtime::logging` decides where the lines end up.
//!
//! ## Usage
//!
//! ```
//! use bridge_desktop::DesktopDeviceEnvironment;
//! use bridge_traits::DeviceEnvironment;
//!
//! let env = DesktopDeviceEnvironment::new().with_bundle_id("com.example.interop");
//! assert!(env.model().is_some());
//! assert_eq!(env.bundle_id().as_deref(), Some("com.example.interop"));
//! ```

mod device;

pub use device::DesktopDeviceEnvironment;
