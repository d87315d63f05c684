//! IPv4 subnet planning.
//!
//! Splits a base network either into N equal subnets ([`cidr_split`]) or into
//! subnets sized to host-count requirements, largest first ([`vlsm_split`]).
//!
//! - [`models`] - address codec, [`models::Ipv4`] and the computed records
//! - [`processing`] - subnet arithmetic and the two allocators
//! - [`output`] - table, CSV and JSON rendering
//! - [`cli`] - command line of the `subnet-planner` binary
//! - [`config`] / [`logging`] - environment configuration and log4rs setup
//!
//! ```
//! let subnets = subnet_planner::cidr_split("192.168.1.0", 24, 4).unwrap();
//! assert_eq!(subnets[1].cidr(), "192.168.1.64/26");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, SubnetError};
pub use models::{Ipv4, SubnetDetails, VlsmAssignment};

/// Split `base_address/base_mask` into exactly `subnet_count` equal subnets.
///
/// Subnets come back in ascending address order.
pub fn cidr_split(
    base_address: &str,
    base_mask: u8,
    subnet_count: usize,
) -> Result<Vec<SubnetDetails>> {
    let base = Ipv4::from_parts(base_address, base_mask)?;
    log::info!("#Start cidr_split({base}) into {subnet_count} subnets");
    processing::allocate_cidr(&base, subnet_count)
}

/// Split `base_address/base_mask` into one subnet per host requirement.
///
/// Subnets come back largest requirement first, not in the order of
/// `host_requirements`; use [`processing::allocate_vlsm`] to keep track of
/// which request each subnet serves.
pub fn vlsm_split(
    base_address: &str,
    base_mask: u8,
    host_requirements: &[u64],
) -> Result<Vec<SubnetDetails>> {
    let base = Ipv4::from_parts(base_address, base_mask)?;
    log::info!("#Start vlsm_split({base}) for hosts {host_requirements:?}");
    processing::allocate_vlsm_subnets(&base, host_requirements)
}
