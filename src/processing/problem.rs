//! Problems found while checking a configuration, and the report holding them.

use super::messages::{message, Lang};
use serde::Serialize;

/// Every check the validator can fail, in evaluation order.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Host1IpFormat,
    Host1Mask,
    Host2IpFormat,
    Host2Mask,
    GatewayFormat,
    HostIpConflict,
    Host1GatewayConflict,
    Host2GatewayConflict,
    MaskMismatch,
    Host1GatewaySubnet,
    Host2GatewaySubnet,
    HostsSubnet,
    Host1Reserved,
    Host2Reserved,
    GatewayReserved,
}

/// Category of a problem.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// Field is not a dotted-quad address.
    Format,
    /// Field is an address but not a prefix mask, or masks disagree.
    Mask,
    /// Two supplied addresses are the same.
    Conflict,
    /// Subnet or gateway mismatch.
    Topology,
    /// Address is the network or broadcast address of its subnet.
    Reserved,
}

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Rule {
    pub fn kind(self) -> ProblemKind {
        match self {
            Rule::Host1IpFormat | Rule::Host2IpFormat | Rule::GatewayFormat => ProblemKind::Format,
            Rule::Host1Mask | Rule::Host2Mask | Rule::MaskMismatch => ProblemKind::Mask,
            Rule::HostIpConflict | Rule::Host1GatewayConflict | Rule::Host2GatewayConflict => {
                ProblemKind::Conflict
            }
            Rule::Host1GatewaySubnet | Rule::Host2GatewaySubnet | Rule::HostsSubnet => {
                ProblemKind::Topology
            }
            Rule::Host1Reserved | Rule::Host2Reserved | Rule::GatewayReserved => {
                ProblemKind::Reserved
            }
        }
    }

    /// Differing masks are reported as a warning but still block success.
    pub fn severity(self) -> Severity {
        match self {
            Rule::MaskMismatch => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// A single entry of a [`ValidationReport`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub rule: Rule,
    pub kind: ProblemKind,
    pub severity: Severity,
    pub message: String,
}

impl Problem {
    pub fn new(rule: Rule, lang: Lang) -> Problem {
        Problem {
            rule,
            kind: rule.kind(),
            severity: rule.severity(),
            message: message(rule, lang).to_string(),
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of one validation call. An empty problem list means success.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub problems: Vec<Problem>,
}

impl ValidationReport {
    pub fn from_problems(problems: Vec<Problem>) -> ValidationReport {
        ValidationReport {
            ok: problems.is_empty(),
            problems,
        }
    }

    /// Messages in the order the rules fired.
    pub fn messages(&self) -> Vec<&str> {
        self.problems.iter().map(|p| p.message.as_str()).collect()
    }

    pub fn rules(&self) -> Vec<Rule> {
        self.problems.iter().map(|p| p.rule).collect()
    }

    pub fn has_rule(&self, rule: Rule) -> bool {
        self.problems.iter().any(|p| p.rule == rule)
    }
}
