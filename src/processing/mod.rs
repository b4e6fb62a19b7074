//! CIDR and IP analysis logic.
//!
//! - [`mask`] - wildcard mask and highest address, byte-wise
//! - [`parse`] - CIDR string to [`crate::models::SubnetDescriptor`]
//! - [`overlap`] - pairwise overlap detection across a list of CIDRs
//! - [`membership`] - IP address inside a CIDR block

mod mask;
mod membership;
mod overlap;
mod parse;

// Re-export public functions
pub use mask::{highest_address, wildcard};
pub use membership::is_member;
pub use overlap::{detect_overlap, find_all_overlaps, parse_cidr_list, OverlapPair};
pub use parse::{parse_cidr, total_hosts};
