//! Domain models for subnet planning.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the address codec
//! - [`SubnetDetails`] - computed description of one subnet
//! - [`VlsmAssignment`] - a VLSM subnet tied back to its request

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    format, from_binary, from_integer, parse, to_binary, to_integer, Ipv4, MAX_LENGTH,
};
pub use subnet::{HostRange, SubnetDetails, VlsmAssignment, NO_USABLE_HOSTS};
