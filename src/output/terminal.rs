//! Terminal output.
//!
//! Failed checks are printed as a red block of messages, one per line. A valid
//! configuration gets the success line and a simulated ping in both
//! directions. Nothing is sent on the network.

use crate::models::{
    broadcast_bits, format_address, network_bits, parse_address, HostConfig, NetworkConfig,
};
use crate::processing::{ping_line, success_text, Lang, Severity, ValidationReport};
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a left-aligned field padded to `width`.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.chars().count() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

/// Render a report for the terminal.
pub fn render_terminal(config: &NetworkConfig, report: &ValidationReport, lang: Lang) -> String {
    if !report.ok {
        return report
            .problems
            .iter()
            .map(|p| match p.severity {
                Severity::Error => p.message.red().to_string(),
                Severity::Warning => p.message.yellow().to_string(),
            })
            .join("\n");
    }

    let text = success_text(lang);
    let lines = [
        text.valid.green().bold().to_string(),
        String::new(),
        text.ping_header.to_string(),
        ping_line(lang, &config.host1.ip, &config.host2.ip),
        ping_line(lang, &config.host2.ip, &config.host1.ip),
    ];
    lines.join("\n")
}

/// One line with the network and broadcast address of a host.
///
/// Returns `None` when the host's address or mask does not parse.
pub fn describe_host(label: &str, host: &HostConfig) -> Option<String> {
    let ip = parse_address(&host.ip).ok()?;
    let mask = parse_address(&host.mask).ok()?;
    Some(format!(
        "{label} {ip} {mask} network {network} broadcast {broadcast}",
        label = format_field(label, 10).bold(),
        ip = format_field(&host.ip, 16),
        mask = format_field(&host.mask, 16),
        network = format_field(format_address(network_bits(ip, mask)), 16),
        broadcast = format_address(broadcast_bits(ip, mask)),
    ))
}
