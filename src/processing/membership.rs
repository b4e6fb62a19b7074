//! IP membership test against a CIDR block.

use crate::error::CidrError;
use crate::models::NetworkAddress;
use colored::Colorize;
use std::net::IpAddr;

/// Check whether `ip` lies inside the block described by `cidr`.
///
/// A malformed `ip` is an error rather than "not a member".
pub fn is_member(ip: &str, cidr: &str) -> Result<bool, CidrError> {
    let net = NetworkAddress::new(cidr)?;
    let addr: IpAddr = ip
        .parse()
        .map_err(|_| CidrError::InvalidAddress(ip.to_string()))?;

    let member = net.contains(addr);
    log::debug!(
        "is_member({ip}, {cidr}) = {member}",
        ip = ip.on_blue(),
        cidr = cidr.on_blue()
    );
    Ok(member)
}
