//! Parsing of command line style request text.

use crate::error::{Result, SubnetError};
use crate::models::Ipv4;
use regex::Regex;
use std::sync::OnceLock;

/// Separators accepted between host counts: commas, semicolons, whitespace.
static HOST_LIST_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_host_list_regex() -> &'static Regex {
    HOST_LIST_REGEX.get_or_init(|| Regex::new(r"[,;\s]+").expect("Invalid Regex"))
}

/// Parse `"a.b.c.d/n"` into a base network.
pub fn parse_network(text: &str) -> Result<Ipv4> {
    Ipv4::new(text)
}

/// Parse a host requirement list such as `"60, 30, 10"` or `"60 30 10"`.
///
/// Every entry must be a positive integer.
pub fn parse_host_list(text: &str) -> Result<Vec<u64>> {
    let hosts = get_host_list_regex()
        .split(text.trim())
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u64>() {
            Ok(0) | Err(_) => Err(SubnetError::InvalidRequest(format!(
                "host requirement '{part}' is not a positive integer"
            ))),
            Ok(hosts) => Ok(hosts),
        })
        .collect::<Result<Vec<u64>>>()?;

    if hosts.is_empty() {
        return Err(SubnetError::InvalidRequest(
            "host requirement list is empty".to_string(),
        ));
    }
    log::trace!("parse_host_list({text:?}) = {hosts:?}");
    Ok(hosts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_list() {
        assert_eq!(parse_host_list("60,30,10").unwrap(), vec![60, 30, 10]);
        assert_eq!(parse_host_list(" 60, 30 ,10 ").unwrap(), vec![60, 30, 10]);
        assert_eq!(parse_host_list("500 300;200").unwrap(), vec![500, 300, 200]);
        assert_eq!(parse_host_list("7").unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_host_list_invalid() {
        for bad in ["", " , ", "60,abc", "60,-1", "60,0", "1.5"] {
            assert!(
                matches!(parse_host_list(bad), Err(SubnetError::InvalidRequest(_))),
                "'{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_network() {
        let net = parse_network("192.168.1.0/24").unwrap();
        assert_eq!(net.to_string(), "192.168.1.0/24");
        assert!(parse_network("192.168.1.0").is_err());
    }
}
