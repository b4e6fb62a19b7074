//! Command handlers.
//!
//! Each handler runs one CLI command and returns the text to print, so the
//! binary only has to dispatch and write to stdout.

use crate::cli::{CidrCommands, Commands, IpCommands};
use crate::output::{
    format_membership, format_overlaps, format_subnet, format_version, to_json,
    MembershipReport, OutputFormat, OverlapReport, VersionReport,
};
use crate::processing::{detect_overlap, find_all_overlaps, is_member, parse_cidr, parse_cidr_list};
use anyhow::Context;

/// Run a parsed command.
pub fn run(command: &Commands, format: OutputFormat) -> anyhow::Result<String> {
    match command {
        Commands::Cidr(CidrCommands::Parse { cidr }) => cidr_parse(cidr, format),
        Commands::Cidr(CidrCommands::Overlap { cidrs, all }) => cidr_overlap(cidrs, *all, format),
        Commands::Ip(IpCommands::InCidr { ip, cidr }) => ip_in_cidr(ip, cidr, format),
        Commands::Version => Ok(version(format)?),
    }
}

pub fn cidr_parse(cidr: &str, format: OutputFormat) -> anyhow::Result<String> {
    let subnet = parse_cidr(cidr).context("error parsing CIDR")?;
    Ok(match format {
        OutputFormat::Text => format_subnet(&subnet),
        OutputFormat::Json => to_json(&subnet)?,
    })
}

/// `cidrs_json` is a JSON array of CIDR strings.
pub fn cidr_overlap(cidrs_json: &str, all: bool, format: OutputFormat) -> anyhow::Result<String> {
    let cidrs = parse_cidr_list(cidrs_json)?;
    let pairs = if all {
        find_all_overlaps(&cidrs)
    } else {
        detect_overlap(&cidrs).map(|found| found.into_iter().collect::<Vec<_>>())
    }
    .context("error determining if CIDRs overlap")?;

    Ok(match format {
        OutputFormat::Text => format_overlaps(&pairs),
        OutputFormat::Json => to_json(&OverlapReport::new(pairs))?,
    })
}

pub fn ip_in_cidr(ip: &str, cidr: &str, format: OutputFormat) -> anyhow::Result<String> {
    let member = is_member(ip, cidr).context("error determining if IP is in CIDR")?;
    Ok(match format {
        OutputFormat::Text => format_membership(ip, cidr, member),
        OutputFormat::Json => to_json(&MembershipReport {
            ip: ip.to_string(),
            cidr: cidr.to_string(),
            member,
        })?,
    })
}

pub fn version(format: OutputFormat) -> Result<String, serde_json::Error> {
    let version = env!("CARGO_PKG_VERSION");
    Ok(match format {
        OutputFormat::Text => format_version(version),
        OutputFormat::Json => to_json(&VersionReport {
            version: version.to_string(),
        })?,
    })
}
