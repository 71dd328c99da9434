use serde::{Deserialize, Serialize};

/// Snapshot of every device fact, computed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescriptor {
    pub model: String,
    pub name: String,
    pub os_version: String,
    pub bundle_id: String,
}
