//! Domain models for CIDR analysis.
//!
//! - [`NetworkAddress`] - IP address with prefix length, parsed from CIDR notation
//! - [`SubnetDescriptor`] - rendered attributes of a parsed CIDR block

mod network;
mod subnet;

// Re-export public types
pub use network::{
    ip_from_bytes, ip_octets, max_length, NetworkAddress, MAX_LENGTH_V4, MAX_LENGTH_V6,
};
pub use subnet::SubnetDescriptor;
