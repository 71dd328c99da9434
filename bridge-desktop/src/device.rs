//! Device Environment for desktop hosts

use bridge_traits::device::DeviceEnvironment;
use std::env;
use std::fs;
use tracing::debug;

const OS_RELEASE_PATH: &str = "/etc/os-release";
const HOSTNAME_PATH: &str = "/etc/hostname";

/// Desktop device environment
///
/// Probes the machine once at construction. Desktop hosts have no bundle
/// identifier, so one must be supplied with [`with_bundle_id`](Self::with_bundle_id)
/// if callers need it.
#[derive(Debug, Clone)]
pub struct DesktopDeviceEnvironment {
    model: String,
    device_name: Option<String>,
    system_version: Option<String>,
    bundle_id: Option<String>,
}

impl DesktopDeviceEnvironment {
    /// Create an environment by probing the current machine
    pub fn new() -> Self {
        let model = format!("{}-{}", env::consts::OS, env::consts::ARCH);
        let device_name = read_hostname();
        let system_version = read_system_version();

        debug!(
            model = %model,
            device_name = ?device_name,
            system_version = ?system_version,
            "Probed desktop device environment"
        );

        Self {
            model,
            device_name,
            system_version,
            bundle_id: None,
        }
    }

    /// Set the identifier reported as the application bundle id
    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id = Some(bundle_id.into());
        self
    }
}

impl Default for DesktopDeviceEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceEnvironment for DesktopDeviceEnvironment {
    fn manufacturer(&self) -> Option<String> {
        // Not exposed without platform-specific APIs (DMI, IOKit, WMI)
        None
    }

    fn model(&self) -> Option<String> {
        Some(self.model.clone())
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

fn read_hostname() -> Option<String> {
    ["HOSTNAME", "COMPUTERNAME"]
        .iter()
        .find_map(|key| env::var(key).ok())
        .or_else(|| fs::read_to_string(HOSTNAME_PATH).ok())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn read_system_version() -> Option<String> {
    let contents = fs::read_to_string(OS_RELEASE_PATH).ok()?;
    parse_os_release(&contents)
}

/// Extract a version string from `os-release` contents.
///
/// Prefers `PRETTY_NAME`, falls back to `VERSION_ID`.
fn parse_os_release(contents: &str) -> Option<String> {
    let lookup = |wanted: &str| {
        contents.lines().find_map(|line| {
            let (key, value) = line.split_once('=')?;
            (key.trim() == wanted).then(|| value.trim().trim_matches('"').to_string())
        })
    };

    lookup("PRETTY_NAME")
        .or_else(|| lookup("VERSION_ID"))
        .filter(|value| !value.is_empty())
}
