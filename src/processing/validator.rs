//! Two host / one gateway configuration check.
//!
//! Rules run in a fixed order. Format and mask problems stop the check;
//! every later rule is evaluated independently and appends to the same list.

use super::messages::Lang;
use super::problem::{Problem, Rule, ValidationReport};
use crate::models::{
    format_address, is_prefix_mask, is_reserved_bits, network_bits, parse_address, NetworkConfig,
};

/// Check a configuration, with messages in English.
pub fn validate_configuration(
    ip1: &str,
    mask1: &str,
    ip2: &str,
    mask2: &str,
    gateway: &str,
) -> ValidationReport {
    validate_configuration_in(Lang::En, ip1, mask1, ip2, mask2, gateway)
}

/// Check a configuration, with messages in `lang`.
pub fn validate_configuration_in(
    lang: Lang,
    ip1: &str,
    mask1: &str,
    ip2: &str,
    mask2: &str,
    gateway: &str,
) -> ValidationReport {
    let mut problems = Vec::new();

    // Phase 1: format and mask legality, all five checked before stopping
    let ip1_bits = parse_address(ip1).ok();
    let mask1_bits = parse_mask(mask1);
    let ip2_bits = parse_address(ip2).ok();
    let mask2_bits = parse_mask(mask2);
    let gateway_bits = parse_address(gateway).ok();

    if ip1_bits.is_none() {
        fail_rule(&mut problems, Rule::Host1IpFormat, lang);
    }
    if mask1_bits.is_none() {
        fail_rule(&mut problems, Rule::Host1Mask, lang);
    }
    if ip2_bits.is_none() {
        fail_rule(&mut problems, Rule::Host2IpFormat, lang);
    }
    if mask2_bits.is_none() {
        fail_rule(&mut problems, Rule::Host2Mask, lang);
    }
    if gateway_bits.is_none() {
        fail_rule(&mut problems, Rule::GatewayFormat, lang);
    }

    let (Some(ip1_bits), Some(mask1_bits), Some(ip2_bits), Some(mask2_bits), Some(gateway_bits)) =
        (ip1_bits, mask1_bits, ip2_bits, mask2_bits, gateway_bits)
    else {
        log::info!("format check failed, skipping subnet rules");
        return ValidationReport::from_problems(problems);
    };

    // Phase 2: conflicts, compared as entered
    if ip1 == ip2 {
        fail_rule(&mut problems, Rule::HostIpConflict, lang);
    }
    if ip1 == gateway {
        fail_rule(&mut problems, Rule::Host1GatewayConflict, lang);
    }
    if ip2 == gateway {
        fail_rule(&mut problems, Rule::Host2GatewayConflict, lang);
    }
    if mask1 != mask2 {
        fail_rule(&mut problems, Rule::MaskMismatch, lang);
    }

    // Phase 3: subnet membership, the gateway uses machine 1's mask
    let network1 = network_bits(ip1_bits, mask1_bits);
    let network2 = network_bits(ip2_bits, mask2_bits);
    let network_gateway = network_bits(gateway_bits, mask1_bits);
    log::trace!(
        "network1={} network2={} network_gateway={}",
        format_address(network1),
        format_address(network2),
        format_address(network_gateway)
    );

    if network1 != network_gateway {
        fail_rule(&mut problems, Rule::Host1GatewaySubnet, lang);
    }
    if network2 != network_gateway {
        fail_rule(&mut problems, Rule::Host2GatewaySubnet, lang);
    }
    if network1 != network2 {
        fail_rule(&mut problems, Rule::HostsSubnet, lang);
    }

    // Phase 4: network and broadcast addresses are not usable by hosts
    if is_reserved_bits(ip1_bits, mask1_bits) {
        fail_rule(&mut problems, Rule::Host1Reserved, lang);
    }
    if is_reserved_bits(ip2_bits, mask2_bits) {
        fail_rule(&mut problems, Rule::Host2Reserved, lang);
    }
    if is_reserved_bits(gateway_bits, mask1_bits) {
        fail_rule(&mut problems, Rule::GatewayReserved, lang);
    }

    let report = ValidationReport::from_problems(problems);
    log::info!(
        "configuration {}: {} problem(s)",
        if report.ok { "valid" } else { "invalid" },
        report.problems.len()
    );
    report
}

fn fail_rule(problems: &mut Vec<Problem>, rule: Rule, lang: Lang) {
    log::debug!("rule {rule:?} failed");
    problems.push(Problem::new(rule, lang));
}

fn parse_mask(text: &str) -> Option<u32> {
    parse_address(text).ok().filter(|mask| is_prefix_mask(*mask))
}

impl NetworkConfig {
    /// Check this configuration, see [`validate_configuration_in`].
    pub fn validate(&self, lang: Lang) -> ValidationReport {
        validate_configuration_in(
            lang,
            &self.host1.ip,
            &self.host1.mask,
            &self.host2.ip,
            &self.host2.mask,
            &self.gateway,
        )
    }
}
