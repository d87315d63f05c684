//! Computed subnet records.

use super::Ipv4;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Text used when a subnet has no usable host range (/31 and /32).
pub const NO_USABLE_HOSTS: &str = "No usable hosts";

/// First and last usable host address of a subnet.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HostRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
}

impl std::fmt::Display for HostRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}

/// Immutable description of one subnet.
///
/// This is what the allocators return and what every renderer consumes.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetDetails {
    /// Network address and prefix length, serialized as `"a.b.c.d/n"`.
    pub network: Ipv4,
    /// Usable host range, `None` when the subnet has no usable hosts.
    pub host_range: Option<HostRange>,
    /// Broadcast address.
    pub broadcast: Ipv4Addr,
    /// Number of usable host addresses.
    pub usable_hosts: u64,
}

impl SubnetDetails {
    /// Network in CIDR notation, e.g. `"192.168.1.0/26"`.
    pub fn cidr(&self) -> String {
        self.network.to_string()
    }

    /// Prefix length of the subnet.
    pub fn prefix(&self) -> u8 {
        self.network.mask
    }

    /// Host range as `"first - last"`, or [`NO_USABLE_HOSTS`].
    pub fn host_range_text(&self) -> String {
        self.host_range
            .map(|range| range.to_string())
            .unwrap_or_else(|| NO_USABLE_HOSTS.to_string())
    }
}

/// One VLSM allocation, tied back to the request that produced it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VlsmAssignment {
    /// Position of the request in the caller's original list.
    pub request_index: usize,
    /// Host count that was asked for.
    pub requested_hosts: u64,
    /// The subnet allocated for it.
    pub details: SubnetDetails,
}
