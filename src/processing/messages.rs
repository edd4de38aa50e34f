//! Message text for each rule, in English or Portuguese.

use super::problem::Rule;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language used for report messages and the success narrative.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Pt,
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Lang, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "pt" | "pt-br" => Ok(Lang::Pt),
            other => Err(format!("Unsupported language: {other}")),
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Lang::En => write!(f, "en"),
            Lang::Pt => write!(f, "pt"),
        }
    }
}

pub fn message(rule: Rule, lang: Lang) -> &'static str {
    match lang {
        Lang::En => message_en(rule),
        Lang::Pt => message_pt(rule),
    }
}

fn message_en(rule: Rule) -> &'static str {
    match rule {
        Rule::Host1IpFormat => "Machine 1: invalid IP format.",
        Rule::Host1Mask => "Machine 1: invalid subnet mask.",
        Rule::Host2IpFormat => "Machine 2: invalid IP format.",
        Rule::Host2Mask => "Machine 2: invalid subnet mask.",
        Rule::GatewayFormat => "Gateway: invalid IP format.",
        Rule::HostIpConflict => "Conflict: the machines cannot have the same IP.",
        Rule::Host1GatewayConflict => "Conflict: machine 1 IP cannot be the same as the gateway.",
        Rule::Host2GatewayConflict => "Conflict: machine 2 IP cannot be the same as the gateway.",
        Rule::MaskMismatch => {
            "Warning: the subnet masks differ. For direct communication they should usually match."
        }
        Rule::Host1GatewaySubnet => "Machine 1: gateway not in same subnet.",
        Rule::Host2GatewaySubnet => "Machine 2: not in same subnet as gateway.",
        Rule::HostsSubnet => "Machines not in same subnet; cannot communicate directly.",
        Rule::Host1Reserved => "Machine 1: IP is a reserved address (network or broadcast).",
        Rule::Host2Reserved => "Machine 2: IP is a reserved address (network or broadcast).",
        Rule::GatewayReserved => "Gateway: IP is a reserved address (network or broadcast).",
    }
}

fn message_pt(rule: Rule) -> &'static str {
    match rule {
        Rule::Host1IpFormat => "Máquina 1: Formato de IP inválido.",
        Rule::Host1Mask => "Máquina 1: Máscara de sub-rede inválida.",
        Rule::Host2IpFormat => "Máquina 2: Formato de IP inválido.",
        Rule::Host2Mask => "Máquina 2: Máscara de sub-rede inválida.",
        Rule::GatewayFormat => "Gateway: Formato de IP inválido.",
        Rule::HostIpConflict => "Conflito: Os IPs das máquinas não podem ser iguais.",
        Rule::Host1GatewayConflict => {
            "Conflito: O IP da Máquina 1 não pode ser igual ao do Gateway."
        }
        Rule::Host2GatewayConflict => {
            "Conflito: O IP da Máquina 2 não pode ser igual ao do Gateway."
        }
        Rule::MaskMismatch => {
            "Aviso: As máscaras de sub-rede são diferentes. Para comunicação direta, elas geralmente devem ser iguais."
        }
        Rule::Host1GatewaySubnet => "Máquina 1: O Gateway não pertence à mesma sub-rede.",
        Rule::Host2GatewaySubnet => "Máquina 2: Não está na mesma sub-rede que o Gateway.",
        Rule::HostsSubnet => {
            "As máquinas não estão na mesma sub-rede e não poderão se comunicar diretamente."
        }
        Rule::Host1Reserved => "Máquina 1: O IP é um endereço reservado (rede ou broadcast).",
        Rule::Host2Reserved => "Máquina 2: O IP é um endereço reservado (rede ou broadcast).",
        Rule::GatewayReserved => "Gateway: O IP é um endereço reservado (rede ou broadcast).",
    }
}

/// Fixed lines of the success narrative.
pub struct SuccessText {
    pub valid: &'static str,
    pub ping_header: &'static str,
    pub reply: &'static str,
}

pub fn success_text(lang: Lang) -> SuccessText {
    match lang {
        Lang::En => SuccessText {
            valid: "Valid network configuration!",
            ping_header: "--- Ping simulation ---",
            reply: "Reply received.",
        },
        Lang::Pt => SuccessText {
            valid: "Configuração de rede válida!",
            ping_header: "--- Simulação de Ping ---",
            reply: "Resposta recebida.",
        },
    }
}

/// "Pinging <to> from <from>..." in the requested language.
pub fn ping_line(lang: Lang, from: &str, to: &str) -> String {
    let reply = success_text(lang).reply;
    match lang {
        Lang::En => format!("Pinging {to} from {from}... {reply}"),
        Lang::Pt => format!("Pingando {to} a partir de {from}... {reply}"),
    }
}
