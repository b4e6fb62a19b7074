//! JSON output.

use crate::processing::OverlapPair;
use serde::Serialize;

/// Result of an overlap check.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OverlapReport {
    pub overlaps: bool,
    pub pairs: Vec<OverlapPair>,
}

impl OverlapReport {
    pub fn new(pairs: Vec<OverlapPair>) -> Self {
        OverlapReport {
            overlaps: !pairs.is_empty(),
            pairs,
        }
    }
}

/// Result of an IP membership test.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MembershipReport {
    pub ip: String,
    pub cidr: String,
    pub member: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub version: String,
}

/// Serialize any report as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse_cidr;
    use serde_json::{json, Value};

    #[test]
    fn test_subnet_json_field_names() {
        let subnet = parse_cidr("192.168.1.0/24").unwrap();
        let value: Value = serde_json::from_str(&to_json(&subnet).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "cidr": "192.168.1.0/24",
                "network": "192.168.1.0",
                "range": "192.168.1.0 - 192.168.1.255",
                "totalHosts": "256",
                "netmask": "255.255.255.0",
                "wildcardMask": "0.0.0.255"
            })
        );
    }

    #[test]
    fn test_overlap_report_json() {
        let report = OverlapReport::new(vec![(
            "87.243.24.122/32".to_string(),
            "87.243.24.0/24".to_string(),
        )]);
        let value: Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"overlaps": true, "pairs": [["87.243.24.122/32", "87.243.24.0/24"]]})
        );

        let empty = OverlapReport::new(vec![]);
        assert!(!empty.overlaps);
    }

    #[test]
    fn test_membership_report_json() {
        let report = MembershipReport {
            ip: "192.168.1.68".to_string(),
            cidr: "192.168.1.0/24".to_string(),
            member: true,
        };
        let value: Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"ip": "192.168.1.68", "cidr": "192.168.1.0/24", "member": true})
        );
    }
}
