//! IPv4 address codec and CIDR notation.
//!
//! Converts between dotted-decimal text, 32-bit integers and 32-character
//! binary strings, and provides the [`Ipv4`] struct for an address with its
//! prefix length.

use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-decimal text into an address.
///
/// Exactly four octets of ASCII digits are required, each in `0..=255`.
/// Leading zeros are tolerated (`"010.0.0.1"` is `10.0.0.1`).
///
/// # Examples
/// ```
/// use subnet_planner::models::parse;
/// assert_eq!(parse("192.168.1.10").unwrap().octets(), [192, 168, 1, 10]);
/// assert!(parse("192.168.1").is_err());
/// ```
pub fn parse(text: &str) -> Result<Ipv4Addr> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(SubnetError::InvalidAddress(format!(
            "expected 4 octets in '{text}', found {}",
            parts.len()
        )));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_octet(part)
            .ok_or_else(|| SubnetError::InvalidAddress(format!("bad octet '{part}' in '{text}'")))?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // digits only, so '+' and '-' signs never reach the integer parser
    part.parse().ok()
}

/// Format an address as canonical dotted-decimal text.
pub fn format(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Address as an unsigned 32-bit integer.
pub fn to_integer(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Address from an unsigned 32-bit integer.
pub fn from_integer(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Render the 32 address bits as a string of `'0'` and `'1'`.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_planner::models::to_binary;
/// assert_eq!(
///     to_binary(Ipv4Addr::new(192, 168, 1, 10)),
///     "11000000101010000000000100001010"
/// );
/// ```
pub fn to_binary(addr: Ipv4Addr) -> String {
    format!("{:032b}", u32::from(addr))
}

/// Parse a 32-character binary string back into an address.
pub fn from_binary(text: &str) -> Result<Ipv4Addr> {
    if text.len() != MAX_LENGTH as usize || !text.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(SubnetError::InvalidAddress(format!(
            "expected 32 binary digits, got '{text}'"
        )));
    }
    let bits = u32::from_str_radix(text, 2)
        .map_err(|e| SubnetError::InvalidAddress(format!("'{text}': {e}")))?;
    Ok(Ipv4Addr::from(bits))
}

/// IPv4 address with CIDR notation support.
///
/// The host bits of `addr` are kept as given; allocators work from the
/// network address derived from it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr.split_once('/').ok_or_else(|| {
            SubnetError::InvalidRequest(format!("expected address/mask, got '{addr_cidr}'"))
        })?;
        let mask: u8 = mask
            .trim()
            .parse()
            .map_err(|_| SubnetError::InvalidRequest(format!("invalid mask '{mask}'")))?;
        Ipv4::from_parts(addr.trim(), mask)
    }

    /// Create a new [`Ipv4`] from separate address text and prefix length.
    pub fn from_parts(addr: &str, mask: u8) -> Result<Ipv4> {
        let addr = parse(addr)?;
        if mask > MAX_LENGTH {
            return Err(SubnetError::InvalidRequest(format!(
                "mask /{mask} is longer than {MAX_LENGTH} bits"
            )));
        }
        Ok(Ipv4 { addr, mask })
    }
}

impl FromStr for Ipv4 {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
