//! IP network address in CIDR notation.
//!
//! Provides [`NetworkAddress`], an IPv4 or IPv6 address together with a
//! prefix length, along with the mask arithmetic needed to derive the
//! network base, the highest address and containment.

use crate::error::{CidrError, ParseFailure};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Prefix length to IPv4 mask bits. `len` must be <= 32.
fn mask_v4(len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH_V4 - len))
        .unwrap_or(0)
}

/// Prefix length to IPv6 mask bits. `len` must be <= 128.
fn mask_v6(len: u8) -> u128 {
    u128::MAX
        .checked_shl(u32::from(MAX_LENGTH_V6 - len))
        .unwrap_or(0)
}

/// Number of prefix bits available for the address family of `addr`.
pub fn max_length(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => MAX_LENGTH_V4,
        IpAddr::V6(_) => MAX_LENGTH_V6,
    }
}

/// Raw bytes of an address: 4 for IPv4, 16 for IPv6.
pub fn ip_octets(addr: IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

/// Build an address back from 4 or 16 raw bytes.
///
/// # Panics
/// * If `bytes` is neither 4 nor 16 bytes long. Callers only pass bytes
///   derived from a parsed [`NetworkAddress`].
pub fn ip_from_bytes(bytes: &[u8]) -> IpAddr {
    if let Ok(v4) = <[u8; 4]>::try_from(bytes) {
        IpAddr::V4(Ipv4Addr::from(v4))
    } else if let Ok(v6) = <[u8; 16]>::try_from(bytes) {
        IpAddr::V6(Ipv6Addr::from(v6))
    } else {
        panic!("address must be 4 or 16 bytes, got {}", bytes.len())
    }
}

/// IP address with a prefix length, parsed from `addr/prefix`.
///
/// The address is kept exactly as supplied (host bits included); use
/// [`NetworkAddress::lo`] or [`NetworkAddress::network`] for the canonical
/// base.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct NetworkAddress {
    addr: IpAddr,
    prefix: u8,
}

impl NetworkAddress {
    /// Parse a CIDR string such as `"10.0.0.0/24"` or `"2001:db8::/32"`.
    pub fn new(cidr: &str) -> Result<NetworkAddress, CidrError> {
        let (addr_part, prefix_part) = cidr
            .split_once('/')
            .ok_or_else(|| CidrError::parse(cidr, ParseFailure::MissingSeparator))?;

        let addr: IpAddr = addr_part
            .parse()
            .map_err(|_| CidrError::parse(cidr, ParseFailure::Address(addr_part.to_string())))?;

        // u32::from_str accepts a leading '+', CIDR notation does not.
        if prefix_part.is_empty() || !prefix_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::parse(cidr, ParseFailure::Prefix(prefix_part.to_string())));
        }
        let prefix: u32 = prefix_part
            .parse()
            .map_err(|_| CidrError::parse(cidr, ParseFailure::Prefix(prefix_part.to_string())))?;

        let max = max_length(&addr);
        if prefix > u32::from(max) {
            return Err(CidrError::parse(cidr, ParseFailure::PrefixTooLong { prefix, max }));
        }

        Ok(NetworkAddress {
            addr,
            prefix: prefix as u8,
        })
    }

    /// The address as supplied.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The prefix length (number of network bits).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Total bits of the address family: 32 or 128.
    pub fn max_length(&self) -> u8 {
        max_length(&self.addr)
    }

    /// Number of host bits.
    pub fn host_bits(&self) -> u8 {
        self.max_length() - self.prefix
    }

    /// The netmask as raw bytes (4 or 16).
    pub fn netmask(&self) -> Vec<u8> {
        match self.addr {
            IpAddr::V4(_) => mask_v4(self.prefix).to_be_bytes().to_vec(),
            IpAddr::V6(_) => mask_v6(self.prefix).to_be_bytes().to_vec(),
        }
    }

    /// Get the lowest (network base) address in the subnet.
    pub fn lo(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(v4) => IpAddr::V4(Ipv4Addr::from(u32::from(v4) & mask_v4(self.prefix))),
            IpAddr::V6(v6) => IpAddr::V6(Ipv6Addr::from(u128::from(v6) & mask_v6(self.prefix))),
        }
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(v4) => {
                let mask = mask_v4(self.prefix);
                IpAddr::V4(Ipv4Addr::from((u32::from(v4) & mask) | !mask))
            }
            IpAddr::V6(v6) => {
                let mask = mask_v6(self.prefix);
                IpAddr::V6(Ipv6Addr::from((u128::from(v6) & mask) | !mask))
            }
        }
    }

    /// Canonical form with the host bits cleared.
    pub fn network(&self) -> NetworkAddress {
        NetworkAddress {
            addr: self.lo(),
            prefix: self.prefix,
        }
    }

    /// Check if an IP address is contained within this subnet.
    ///
    /// Addresses of the other family are never contained. An IPv4-mapped
    /// IPv6 address such as `::ffff:10.0.0.1` counts as IPv6.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.addr, ip) {
            (IpAddr::V4(net), IpAddr::V4(ip)) => {
                let mask = mask_v4(self.prefix);
                u32::from(ip) & mask == u32::from(net) & mask
            }
            (IpAddr::V6(net), IpAddr::V6(ip)) => {
                let mask = mask_v6(self.prefix);
                u128::from(ip) & mask == u128::from(net) & mask
            }
            (IpAddr::V4(_), IpAddr::V6(_)) | (IpAddr::V6(_), IpAddr::V4(_)) => false,
        }
    }

    /// True if either network's base address falls inside the other.
    pub fn overlaps(&self, other: &NetworkAddress) -> bool {
        self.contains(other.lo()) || other.contains(self.lo())
    }
}

impl FromStr for NetworkAddress {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkAddress::new(s)
    }
}

impl std::fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for NetworkAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkAddress {
    fn deserialize<D>(deserializer: D) -> Result<NetworkAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkAddress::new(&s).map_err(de::Error::custom)
    }
}
