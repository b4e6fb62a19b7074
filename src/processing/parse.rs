//! CIDR parsing into a [`SubnetDescriptor`].

use super::mask::{highest_address, wildcard};
use crate::error::CidrError;
use crate::models::{ip_from_bytes, ip_octets, NetworkAddress, SubnetDescriptor};
use colored::Colorize;

/// 2^128 does not fit in a u128.
const TWO_POW_128: &str = "340282366920938463463374607431768211456";

/// Number of addresses covered by `host_bits` host bits, in decimal.
pub fn total_hosts(host_bits: u8) -> String {
    1u128
        .checked_shl(u32::from(host_bits))
        .map(|n| n.to_string())
        .unwrap_or_else(|| TWO_POW_128.to_string())
}

/// Parse a CIDR string and describe the block it denotes.
///
/// # Examples
/// ```
/// let subnet = genc::processing::parse_cidr("192.168.1.0/24").unwrap();
/// assert_eq!(subnet.range, "192.168.1.0 - 192.168.1.255");
/// assert_eq!(subnet.wildcard_mask, "0.0.0.255");
/// ```
pub fn parse_cidr(cidr: &str) -> Result<SubnetDescriptor, CidrError> {
    log::debug!("parse_cidr({cidr})", cidr = cidr.on_blue());
    let net = NetworkAddress::new(cidr)?;

    let base = ip_octets(net.lo());
    let netmask = net.netmask();
    let wildcard_mask = wildcard(&netmask);
    let last = highest_address(&base, &wildcard_mask);

    let network = net.lo().to_string();
    let subnet = SubnetDescriptor {
        cidr: cidr.to_string(),
        range: format!("{} - {}", network, ip_from_bytes(&last)),
        network,
        total_hosts: total_hosts(net.host_bits()),
        netmask: ip_from_bytes(&netmask).to_string(),
        wildcard_mask: ip_from_bytes(&wildcard_mask).to_string(),
    };
    log::trace!("parsed {:?}", subnet);
    Ok(subnet)
}
