//! Overlapping CIDR detection.
//!
//! Every input is compared against every other one. Two blocks overlap when
//! either one's network base address falls inside the other.

use crate::error::CidrError;
use crate::models::NetworkAddress;
use colored::Colorize;
use itertools::Itertools;

/// Pair of CIDRs as originally supplied.
pub type OverlapPair = (String, String);

/// Read the CIDR list from a JSON array of strings, e.g. `["10.0.0.0/8"]`.
pub fn parse_cidr_list(json: &str) -> Result<Vec<String>, CidrError> {
    serde_json::from_str(json).map_err(|e| CidrError::CidrList(e.to_string()))
}

/// Parse every CIDR up front; the first bad one aborts the whole check.
fn parse_networks<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<NetworkAddress>, CidrError> {
    cidrs
        .iter()
        .map(|cidr| NetworkAddress::new(cidr.as_ref()))
        .collect()
}

fn pair<S: AsRef<str>>(cidrs: &[S], i: usize, j: usize) -> OverlapPair {
    (cidrs[i].as_ref().to_string(), cidrs[j].as_ref().to_string())
}

/// Find the first overlapping pair.
///
/// Pairs are visited with the outer index ascending, then the inner index
/// ascending, skipping `i == j`. The first hit is returned as
/// `(cidrs[i], cidrs[j])`.
///
/// # Returns
/// * `Ok(Some(pair))` - the first overlapping pair
/// * `Ok(None)` - no two blocks overlap
/// * `Err` - one of the inputs is not a valid CIDR
pub fn detect_overlap<S: AsRef<str>>(cidrs: &[S]) -> Result<Option<OverlapPair>, CidrError> {
    let networks = parse_networks(cidrs)?;
    let n = networks.len();

    let found = (0..n)
        .cartesian_product(0..n)
        .filter(|(i, j)| i != j)
        .find(|&(i, j)| networks[i].overlaps(&networks[j]))
        .map(|(i, j)| pair(cidrs, i, j));

    match &found {
        Some((a, b)) => log::info!("CIDRs {} and {} overlap", a.red(), b.red()),
        None => log::debug!("No overlap among {} CIDRs", n),
    }
    Ok(found)
}

/// Find every overlapping pair.
///
/// Each unordered pair is reported once as `(cidrs[i], cidrs[j])` with
/// `i < j`, in ascending `(i, j)` order.
pub fn find_all_overlaps<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<OverlapPair>, CidrError> {
    let networks = parse_networks(cidrs)?;

    let pairs: Vec<OverlapPair> = (0..networks.len())
        .tuple_combinations()
        .filter(|&(i, j)| networks[i].overlaps(&networks[j]))
        .map(|(i, j)| pair(cidrs, i, j))
        .collect();

    log::info!(
        "Found {} overlapping pair(s) among {} CIDRs",
        pairs.len(),
        networks.len()
    );
    Ok(pairs)
}
