//! Host and network configuration as entered by the user.

use serde::{Deserialize, Serialize};

/// One machine's network identity: IP address and subnet mask, as text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct HostConfig {
    pub ip: String,
    pub mask: String,
}

impl HostConfig {
    /// Build a host from raw fields, trimming surrounding whitespace.
    pub fn new(ip: &str, mask: &str) -> HostConfig {
        HostConfig {
            ip: ip.trim().to_string(),
            mask: mask.trim().to_string(),
        }
    }
}

impl std::fmt::Display for HostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} mask {}", self.ip, self.mask)
    }
}

/// Two hosts and the gateway they should reach each other through.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkConfig {
    pub host1: HostConfig,
    pub host2: HostConfig,
    pub gateway: String,
}

impl NetworkConfig {
    pub fn new(host1: HostConfig, host2: HostConfig, gateway: &str) -> NetworkConfig {
        NetworkConfig {
            host1,
            host2,
            gateway: gateway.trim().to_string(),
        }
    }
}
