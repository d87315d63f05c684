//! Variable-length subnet masking.
//!
//! Requests are served largest first from the start of the base network, each
//! subnet placed directly after the previous one's broadcast address.

use super::subnet_info::{
    block_size, broadcast_address, ceil_log2, check_base_mask, describe, network_address,
};
use crate::error::{Result, SubnetError};
use crate::models::{Ipv4, SubnetDetails, VlsmAssignment, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Prefix length whose block holds `hosts` usable addresses plus the network
/// and broadcast addresses.
pub fn prefix_for_hosts(hosts: u64) -> Result<u8> {
    let needed = hosts.checked_add(2).ok_or_else(|| {
        SubnetError::InsufficientAddressSpace(format!("{hosts} hosts do not fit in IPv4"))
    })?;
    let required_bits = ceil_log2(needed);
    if required_bits > MAX_LENGTH as u32 {
        return Err(SubnetError::InsufficientAddressSpace(format!(
            "{hosts} hosts do not fit in IPv4"
        )));
    }
    Ok(MAX_LENGTH - required_bits as u8)
}

/// Pick the prefix for the next request given the previous allocation.
///
/// A request one bit smaller than the previous one keeps the previous prefix,
/// so neighbouring near-equal blocks stay the same size.
fn next_prefix(previous: Option<u8>, from_requirement: u8) -> u8 {
    match previous {
        Some(prev) if from_requirement == prev || from_requirement == prev + 1 => prev,
        _ => from_requirement,
    }
}

/// Allocate one subnet per host requirement, largest requirement first.
///
/// The result is ordered by allocation (descending host count; equal counts
/// keep their input order). Each [`VlsmAssignment`] carries the index of the
/// request in `hosts`. Nothing is returned unless every request fits.
pub fn allocate_vlsm(base: &Ipv4, hosts: &[u64]) -> Result<Vec<VlsmAssignment>> {
    check_base_mask(base)?;
    if hosts.is_empty() {
        return Err(SubnetError::InvalidRequest(
            "at least one host requirement is needed".to_string(),
        ));
    }
    if let Some(index) = hosts.iter().position(|&h| h == 0) {
        return Err(SubnetError::InvalidRequest(format!(
            "host requirement #{} must be at least 1",
            index + 1
        )));
    }

    let mut requests: Vec<(usize, u64)> = hosts.iter().copied().enumerate().collect();
    requests.sort_by(|a, b| b.1.cmp(&a.1));

    let base_bits = u32::from(base.addr);
    let base_size = block_size(base.mask);
    let base_broadcast = broadcast_address(base_bits, base.mask)? as u64;
    let mut available = network_address(base_bits, base.mask)? as u64;
    let mut previous: Option<u8> = None;
    let mut assignments = Vec::with_capacity(requests.len());

    for (position, (request_index, requested_hosts)) in requests.into_iter().enumerate() {
        let prefix = next_prefix(previous, prefix_for_hosts(requested_hosts)?);
        let size = block_size(prefix);
        if size > base_size || available + size - 1 > base_broadcast {
            log::warn!(
                "allocate_vlsm({base}) request #{} for {requested_hosts} hosts needs /{prefix}, no room left",
                request_index + 1
            );
            return Err(SubnetError::InsufficientAddressSpace(format!(
                "no room in {base} for subnet {} ({requested_hosts} hosts, /{prefix})",
                position + 1
            )));
        }

        let details = describe(Ipv4Addr::from(available as u32), prefix)?;
        log::debug!(
            "allocate_vlsm({base}) {requested_hosts} hosts -> {}",
            details.network
        );
        available = u32::from(details.broadcast) as u64 + 1;
        previous = Some(prefix);
        assignments.push(VlsmAssignment {
            request_index,
            requested_hosts,
            details,
        });
    }

    Ok(assignments)
}

/// [`allocate_vlsm`] without the request bookkeeping.
pub fn allocate_vlsm_subnets(base: &Ipv4, hosts: &[u64]) -> Result<Vec<SubnetDetails>> {
    Ok(allocate_vlsm(base, hosts)?
        .into_iter()
        .map(|assignment| assignment.details)
        .collect())
}
