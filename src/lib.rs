//! IPv4 configuration checker for two hosts and a gateway.
//!
//! The engine is pure: [`validate_configuration`] takes the five fields as
//! text and returns an ordered [`ValidationReport`]. The [`cli`] and
//! [`output`] modules are the front end used by the binary.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{
    broadcast_address, format_address, is_reserved_address, is_valid_ipv4_format,
    is_valid_subnet_mask, network_address, parse_address, HostConfig, NetworkConfig,
};
pub use processing::{
    validate_configuration, validate_configuration_in, Lang, Problem, ProblemKind, Rule, Severity,
    ValidationReport,
};
