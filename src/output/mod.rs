//! Output formatting for analysis results.
//!
//! - [`json`] - JSON reports
//! - [`terminal`] - plain text lines as printed by the CLI

mod json;
mod terminal;

pub use json::{to_json, MembershipReport, OverlapReport, VersionReport};
pub use terminal::{format_field, format_membership, format_overlaps, format_subnet, format_version};

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
