//! IPv4 address and subnet mask utilities.
//!
//! Dotted-quad strings are packed into a `u32` (most significant octet first)
//! and all network/broadcast arithmetic is done on that value.

use regex::Regex;
use std::error::Error;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Regex matching exactly four dot separated decimal octets in 0..=255.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(
            r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
        )
        .expect("Invalid Regex")
    })
}

/// Check that `text` is a well formed dotted-quad IPv4 address.
///
/// Leading zeros inside an octet ("01", "001") are accepted as long as the
/// value stays in range.
///
/// # Examples
/// ```
/// use network_config_checker::models::is_valid_ipv4_format;
/// assert!(is_valid_ipv4_format("192.168.1.10"));
/// assert!(!is_valid_ipv4_format("999.1.1.1"));
/// ```
pub fn is_valid_ipv4_format(text: &str) -> bool {
    get_dotted_quad_regex().is_match(text)
}

/// Parse a dotted-quad address into its 32 bit value.
///
/// The format is checked first, so malformed input is an error rather than a
/// silently corrupted value.
pub fn parse_address(text: &str) -> Result<u32, Box<dyn Error>> {
    if !is_valid_ipv4_format(text) {
        return Err(format!("Invalid IPv4 address: {text}").into());
    }
    let mut bits: u32 = 0;
    for octet in text.split('.') {
        let value: u8 = octet
            .parse()
            .map_err(|e| format!("Invalid octet {octet} in {text}: {e}"))?;
        bits = (bits << 8) + u32::from(value);
    }
    Ok(bits)
}

/// Render a 32 bit address back to dotted-quad form.
pub fn format_address(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

/// True when `mask` is a run of 1 bits from the top followed only by 0 bits.
///
/// `!mask + 1` is a power of two (or wraps to zero) exactly for those values.
pub fn is_prefix_mask(mask: u32) -> bool {
    let inverted = !mask;
    inverted.wrapping_add(1) & inverted == 0
}

/// Check that `text` is a dotted-quad address usable as a subnet mask.
pub fn is_valid_subnet_mask(text: &str) -> bool {
    match parse_address(text) {
        Ok(mask) => is_prefix_mask(mask),
        Err(_) => false,
    }
}

/// Network part of an address: all host bits cleared.
pub fn network_bits(ip: u32, mask: u32) -> u32 {
    ip & mask
}

/// Broadcast address: all host bits set.
pub fn broadcast_bits(ip: u32, mask: u32) -> u32 {
    network_bits(ip, mask) | !mask
}

/// Network address for a dotted-quad IP and mask.
pub fn network_address(ip: &str, mask: &str) -> Result<u32, Box<dyn Error>> {
    Ok(network_bits(parse_address(ip)?, parse_address(mask)?))
}

/// Broadcast address for a dotted-quad IP and mask.
pub fn broadcast_address(ip: &str, mask: &str) -> Result<u32, Box<dyn Error>> {
    Ok(broadcast_bits(parse_address(ip)?, parse_address(mask)?))
}

/// True when `ip` is the network or the broadcast address of its subnet.
pub fn is_reserved_bits(ip: u32, mask: u32) -> bool {
    ip == network_bits(ip, mask) || ip == broadcast_bits(ip, mask)
}

/// Dotted-quad form of [`is_reserved_bits`].
pub fn is_reserved_address(ip: &str, mask: &str) -> Result<bool, Box<dyn Error>> {
    Ok(is_reserved_bits(parse_address(ip)?, parse_address(mask)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ipv4_format() {
        assert!(is_valid_ipv4_format("0.0.0.0"));
        assert!(is_valid_ipv4_format("255.255.255.255"));
        assert!(is_valid_ipv4_format("192.168.1.10"));
        assert!(is_valid_ipv4_format("10.01.001.0"));
        assert!(!is_valid_ipv4_format("256.1.1.1"));
        assert!(!is_valid_ipv4_format("999.1.1.1"));
        assert!(!is_valid_ipv4_format("1.1.1"));
        assert!(!is_valid_ipv4_format("1.1.1.1.1"));
        assert!(!is_valid_ipv4_format("1..1.1"));
        assert!(!is_valid_ipv4_format("a.b.c.d"));
        assert!(!is_valid_ipv4_format("+1.1.1.1"));
        assert!(!is_valid_ipv4_format(" 1.1.1.1"));
        assert!(!is_valid_ipv4_format("0001.1.1.1"));
        assert!(!is_valid_ipv4_format(""));
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_address("192.168.1.10").unwrap(), 0xC0A8010A);
        assert_eq!(parse_address("255.255.255.0").unwrap(), 0xFFFFFF00);
        assert_eq!(parse_address("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_address("10.0.0.01").unwrap(), 0x0A000001);
        assert!(parse_address("999.1.1.1").is_err());
        assert!(parse_address("1.2.3").is_err());
    }

    #[test]
    fn test_parse_address_error_message() {
        assert_eq!(
            parse_address("1.2.3").unwrap_err().to_string(),
            "Invalid IPv4 address: 1.2.3"
        );
    }

    #[test]
    fn test_format_address_round_trip() {
        for text in ["0.0.0.0", "10.20.30.40", "172.16.254.1", "255.255.255.255"] {
            assert_eq!(format_address(parse_address(text).unwrap()), text);
        }
        // leading zeros come back in canonical form
        assert_eq!(format_address(parse_address("010.0.0.001").unwrap()), "10.0.0.1");
    }

    #[test]
    fn test_is_valid_subnet_mask() {
        assert!(is_valid_subnet_mask("255.255.255.0"));
        assert!(is_valid_subnet_mask("255.255.255.128"));
        assert!(is_valid_subnet_mask("255.0.0.0"));
        assert!(is_valid_subnet_mask("0.0.0.0"));
        assert!(is_valid_subnet_mask("255.255.255.255"));
        assert!(!is_valid_subnet_mask("255.255.0.255"));
        assert!(!is_valid_subnet_mask("0.255.255.255"));
        assert!(!is_valid_subnet_mask("255.255.255.1"));
        assert!(!is_valid_subnet_mask("255.255.256.0"));
        assert!(!is_valid_subnet_mask("mask"));
    }

    #[test]
    fn test_is_prefix_mask_every_length() {
        for len in 0..=32u32 {
            let mask = if len == 0 { 0 } else { u32::MAX << (32 - len) };
            assert!(is_prefix_mask(mask), "prefix /{len} should be a mask");
        }
        assert!(!is_prefix_mask(0x00FF_FFFF));
        assert!(!is_prefix_mask(0xFFFF_00FF));
    }

    #[test]
    fn test_network_and_broadcast_address() {
        let network = network_address("192.168.1.10", "255.255.255.0").unwrap();
        let broadcast = broadcast_address("192.168.1.10", "255.255.255.0").unwrap();
        assert_eq!(Ipv4Addr::from(network), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(Ipv4Addr::from(broadcast), Ipv4Addr::new(192, 168, 1, 255));

        assert_eq!(
            format_address(broadcast_address("10.1.2.3", "255.0.0.0").unwrap()),
            "10.255.255.255"
        );
        assert_eq!(
            format_address(network_address("10.1.2.3", "255.255.255.255").unwrap()),
            "10.1.2.3"
        );
        assert_eq!(
            format_address(broadcast_address("10.1.2.3", "0.0.0.0").unwrap()),
            "255.255.255.255"
        );
        assert!(network_address("10.1.2", "255.0.0.0").is_err());
    }

    #[test]
    fn test_is_reserved_address() {
        assert!(is_reserved_address("192.168.1.0", "255.255.255.0").unwrap());
        assert!(is_reserved_address("192.168.1.255", "255.255.255.0").unwrap());
        assert!(!is_reserved_address("192.168.1.1", "255.255.255.0").unwrap());
        assert!(!is_reserved_address("192.168.1.254", "255.255.255.0").unwrap());
        // a /32 host is both its own network and broadcast address
        assert!(is_reserved_address("10.0.0.7", "255.255.255.255").unwrap());
        assert!(is_reserved_address("1.2.3", "255.0.0.0").is_err());
    }
}
