//! Parsed subnet summary.

use serde::{Deserialize, Serialize};

/// Read-only description of a parsed CIDR block.
///
/// All fields are rendered strings, computed once by
/// [`crate::processing::parse_cidr`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetDescriptor {
    /// The CIDR exactly as supplied.
    pub cidr: String,
    /// Canonical network base address.
    pub network: String,
    /// `"<low> - <high>"`.
    pub range: String,
    /// 2^(host bits), as a whole decimal number.
    pub total_hosts: String,
    /// Netmask in dotted (IPv4) or hextet (IPv6) notation.
    pub netmask: String,
    /// Bitwise complement of the netmask.
    pub wildcard_mask: String,
}
