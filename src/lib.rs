//! CIDR and IP address analysis.
//!
//! - [`models`] - [`models::NetworkAddress`] and [`models::SubnetDescriptor`]
//! - [`processing`] - CIDR parsing, mask arithmetic, overlap detection, IP membership
//! - [`output`] - text and JSON rendering
//! - [`cli`] / [`commands`] - the `genc` command line

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, ParseFailure};
pub use models::{NetworkAddress, SubnetDescriptor};
pub use processing::{detect_overlap, find_all_overlaps, is_member, parse_cidr};
