//! Domain models for the network configuration checker.
//!
//! - [`ipv4`] - dotted-quad parsing and subnet arithmetic
//! - [`HostConfig`] and [`NetworkConfig`] - the values being checked

mod host;
mod ipv4;

// Re-export public types
pub use host::{HostConfig, NetworkConfig};
pub use ipv4::{
    broadcast_address, broadcast_bits, format_address, is_prefix_mask, is_reserved_address,
    is_reserved_bits, is_valid_ipv4_format, is_valid_subnet_mask, network_address, network_bits,
    parse_address,
};
