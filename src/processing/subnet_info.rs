//! Network, broadcast and host-range derivation.
//!
//! Pure functions over an address and a prefix length. [`describe`] composes
//! them into the [`SubnetDetails`] record the allocators emit.

use crate::error::{Result, SubnetError};
use crate::models::{HostRange, Ipv4, SubnetDetails, MAX_LENGTH};
use std::net::Ipv4Addr;

fn check_prefix(prefix: u8) -> Result<()> {
    if prefix > MAX_LENGTH {
        Err(SubnetError::InvalidRequest(format!(
            "prefix /{prefix} is longer than {MAX_LENGTH} bits"
        )))
    } else {
        Ok(())
    }
}

/// A base network handed to an allocator needs a mask in `1..=32`.
pub(crate) fn check_base_mask(base: &Ipv4) -> Result<()> {
    if base.mask == 0 || base.mask > MAX_LENGTH {
        Err(SubnetError::InvalidRequest(format!(
            "base mask /{} must be between 1 and {MAX_LENGTH}",
            base.mask
        )))
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_planner::processing::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(prefix: u8) -> Result<u32> {
    check_prefix(prefix)?;
    let right_len = MAX_LENGTH - prefix;
    let all_bits = u32::MAX as u64;
    Ok(((all_bits >> right_len) << right_len) as u32)
}

/// `addr` with the low `32 - prefix` bits cleared.
pub fn network_address(addr: u32, prefix: u8) -> Result<u32> {
    Ok(addr & prefix_mask(prefix)?)
}

/// `addr` with the low `32 - prefix` bits set.
pub fn broadcast_address(addr: u32, prefix: u8) -> Result<u32> {
    let mask = prefix_mask(prefix)?;
    Ok((addr & mask) | !mask)
}

/// Usable hosts lie strictly between the network and broadcast addresses.
///
/// Returns `None` when there is no address in between (/31 and /32).
pub fn host_range(network: u32, broadcast: u32) -> Option<HostRange> {
    if broadcast.saturating_sub(network) > 1 {
        Some(HostRange {
            first: Ipv4Addr::from(network + 1),
            last: Ipv4Addr::from(broadcast - 1),
        })
    } else {
        None
    }
}

/// Total number of addresses in a block, network and broadcast included.
pub fn block_size(prefix: u8) -> u64 {
    1u64 << (MAX_LENGTH - prefix.min(MAX_LENGTH))
}

/// Number of usable host addresses for a prefix length.
///
/// /31 and /32 count as zero usable hosts.
pub fn host_capacity(prefix: u8) -> u64 {
    if prefix >= MAX_LENGTH - 1 {
        0
    } else {
        block_size(prefix) - 2
    }
}

/// Largest `k` with `2^k <= x`; `None` for zero.
pub fn floor_log2(x: u64) -> Option<u32> {
    x.checked_ilog2()
}

/// Smallest `k` with `2^k >= x`.
pub fn ceil_log2(x: u64) -> u32 {
    if x <= 1 {
        0
    } else {
        (x - 1).ilog2() + 1
    }
}

/// Describe the subnet of `addr` at `prefix`.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_planner::processing::describe;
/// let details = describe(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();
/// assert_eq!(details.cidr(), "192.168.1.0/24");
/// assert_eq!(details.usable_hosts, 254);
/// ```
pub fn describe(addr: Ipv4Addr, prefix: u8) -> Result<SubnetDetails> {
    let bits = u32::from(addr);
    let network = network_address(bits, prefix)?;
    let broadcast = broadcast_address(bits, prefix)?;
    let details = SubnetDetails {
        network: Ipv4 {
            addr: Ipv4Addr::from(network),
            mask: prefix,
        },
        host_range: host_range(network, broadcast),
        broadcast: Ipv4Addr::from(broadcast),
        usable_hosts: host_capacity(prefix),
    };
    log::trace!("describe({addr}/{prefix}) = {details:?}");
    Ok(details)
}
