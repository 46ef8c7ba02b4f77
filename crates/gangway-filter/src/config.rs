//! Filter policy as supplied by the configuration loader.

use serde::{Deserialize, Serialize};

/// What the operator declared about who may reach the console.
///
/// An entirely empty policy is not "deny all": the construction path falls
/// back to allowing the host's own local networks so the operator is never
/// locked out of a freshly provisioned device. `disable_filter` is the
/// opposite escape hatch: no filter is built at all and the console is
/// reachable from anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPolicy {
    /// Skip origin filtering entirely. For trusted deployments only.
    pub disable_filter: bool,
    /// CIDR blocks to allow, e.g. `"192.168.7.0/24"`, either family.
    pub allow_networks: Vec<String>,
    /// Interface names whose subnets to allow, e.g. `"eth0"`.
    pub allow_interfaces: Vec<String>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            disable_filter: false,
            allow_networks: Vec::new(),
            allow_interfaces: Vec::new(),
        }
    }
}
