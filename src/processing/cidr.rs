//! Equal-size subnetting.
//!
//! Splits a base network into exactly N contiguous subnets that all share
//! one prefix length.

use super::subnet_info::{block_size, check_base_mask, describe, floor_log2, network_address};
use crate::error::{Result, SubnetError};
use crate::models::{Ipv4, SubnetDetails, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Smallest block a CIDR split may hand out: 4 addresses, 2 usable hosts.
const MIN_HOST_BITS: u32 = 2;

/// Prefix length shared by every subnet when `base` is split `count` ways.
///
/// Each subnet gets the largest power-of-two block such that `count` of them
/// fit in the base block.
pub fn cidr_prefix(base: &Ipv4, count: usize) -> Result<u8> {
    check_base_mask(base)?;
    if count == 0 {
        return Err(SubnetError::InvalidRequest(
            "subnet count must be at least 1".to_string(),
        ));
    }

    let total = block_size(base.mask);
    let per_subnet = total / count as u64;
    match floor_log2(per_subnet) {
        Some(host_bits) if host_bits >= MIN_HOST_BITS => Ok(MAX_LENGTH - host_bits as u8),
        _ => Err(SubnetError::InsufficientAddressSpace(format!(
            "{base} cannot be split into {count} subnets with usable hosts"
        ))),
    }
}

/// Split `base` into exactly `count` equal subnets, in ascending address order.
///
/// The i-th element is the i-th contiguous block from the base network
/// address. When `count` is not a power of two the tail of the base block
/// stays unallocated.
pub fn allocate_cidr(base: &Ipv4, count: usize) -> Result<Vec<SubnetDetails>> {
    let new_prefix = cidr_prefix(base, count)?;
    let subnet_size = block_size(new_prefix);
    let base_network = network_address(u32::from(base.addr), base.mask)? as u64;
    log::debug!(
        "allocate_cidr({base}, {count}) new_prefix=/{new_prefix} subnet_size={subnet_size}"
    );

    (0..count as u64)
        .map(|i| {
            // count * subnet_size <= block size of base, so this stays within u32
            let subnet_base = (base_network + i * subnet_size) as u32;
            describe(Ipv4Addr::from(subnet_base), new_prefix)
        })
        .collect()
}
