//! Subnet arithmetic and allocation.
//!
//! - [`subnet_info`] - network/broadcast/host-range derivation
//! - [`cidr`] - equal-size split into N subnets
//! - [`vlsm`] - variable-size split sized to host requirements

mod cidr;
mod subnet_info;
mod vlsm;

// Re-export public functions
pub use cidr::{allocate_cidr, cidr_prefix};
pub use subnet_info::{
    block_size, broadcast_address, ceil_log2, describe, floor_log2, host_capacity, host_range,
    network_address, prefix_mask,
};
pub use vlsm::{allocate_vlsm, allocate_vlsm_subnets, prefix_for_hosts};
