use serde::{Deserialize, Serialize};

/// How addresses bound to local interfaces are discovered.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Program invoked as `<ifconfig_path> <interface>`.
    #[serde(default = "default_ifconfig_path")]
    pub ifconfig_path: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            ifconfig_path: default_ifconfig_path(),
        }
    }
}

fn default_ifconfig_path() -> String {
    "/sbin/ifconfig".to_string()
}
