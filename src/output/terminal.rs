//! Terminal (plain text) output.

use crate::models::SubnetDescriptor;
use crate::processing::OverlapPair;

/// Width of the label column in the subnet report.
const LABEL_WIDTH: usize = 16;

/// Format a label and value as a left-aligned report line.
///
/// # Arguments
/// * `label` - The label, including its trailing colon
/// * `value` - The value printed after the label column
pub fn format_field<T: ToString>(label: &str, value: T) -> String {
    let value_str = value.to_string();
    format!("{label:<width$}{value_str}", width = LABEL_WIDTH)
}

/// Multi-line report for a parsed CIDR block.
pub fn format_subnet(subnet: &SubnetDescriptor) -> String {
    let lines = [
        String::new(),
        format!("CIDR: {}", subnet.cidr),
        "-".repeat(24),
        format_field("Network:", &subnet.network),
        format_field("IP Range:", &subnet.range),
        format_field("Total Hosts:", &subnet.total_hosts),
        format_field("Netmask:", &subnet.netmask),
        format_field("Wildcard Mask:", &subnet.wildcard_mask),
        String::new(),
    ];
    lines.join("\n")
}

/// One line per overlapping pair, or a single "do not overlap" line.
pub fn format_overlaps(pairs: &[OverlapPair]) -> String {
    if pairs.is_empty() {
        return "CIDRs do not overlap".to_string();
    }
    pairs
        .iter()
        .map(|(a, b)| format!("CIDRs ({a}) and ({b}) overlap"))
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn format_membership(ip: &str, cidr: &str, member: bool) -> String {
    if member {
        format!("IP ({ip}) is in the CIDR range ({cidr})")
    } else {
        format!("IP ({ip}) is not in the CIDR range ({cidr})")
    }
}

pub fn format_version(version: &str) -> String {
    format!("Version: {version}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse_cidr;

    #[test]
    fn test_format_field_pads_label() {
        assert_eq!(format_field("Network:", "10.0.0.0"), "Network:        10.0.0.0");
        assert_eq!(format_field("Wildcard Mask:", 7), "Wildcard Mask:  7");
    }

    #[test]
    fn test_format_field_long_label() {
        assert_eq!(format_field("A very long label:", "x"), "A very long label:x");
    }

    #[test]
    fn test_format_subnet() {
        let subnet = parse_cidr("192.168.1.0/24").unwrap();
        let expected = "
CIDR: 192.168.1.0/24
------------------------
Network:        192.168.1.0
IP Range:       192.168.1.0 - 192.168.1.255
Total Hosts:    256
Netmask:        255.255.255.0
Wildcard Mask:  0.0.0.255
";
        assert_eq!(format_subnet(&subnet), expected);
    }

    #[test]
    fn test_format_overlaps() {
        assert_eq!(format_overlaps(&[]), "CIDRs do not overlap");
        let pairs = vec![
            ("87.243.24.122/32".to_string(), "87.243.24.0/24".to_string()),
            ("10.0.0.0/8".to_string(), "10.1.0.0/16".to_string()),
        ];
        assert_eq!(
            format_overlaps(&pairs),
            "CIDRs (87.243.24.122/32) and (87.243.24.0/24) overlap\n\
             CIDRs (10.0.0.0/8) and (10.1.0.0/16) overlap"
        );
    }

    #[test]
    fn test_format_membership() {
        assert_eq!(
            format_membership("192.168.1.68", "192.168.1.0/24", true),
            "IP (192.168.1.68) is in the CIDR range (192.168.1.0/24)"
        );
        assert_eq!(
            format_membership("192.168.1.68", "192.168.1.30/32", false),
            "IP (192.168.1.68) is not in the CIDR range (192.168.1.30/32)"
        );
    }
}
