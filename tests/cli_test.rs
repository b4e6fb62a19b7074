//! Tests for the genc binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn genc() -> Command {
    let mut cmd = Command::cargo_bin("genc").expect("genc binary not built");
    cmd.env_remove("GENC_FORMAT").env_remove("GENC_LOG_CONFIG");
    cmd
}

#[test]
fn test_cidr_parse_output() {
    genc()
        .args(["cidr", "parse", "--cidr", "192.168.1.0/24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CIDR: 192.168.1.0/24"))
        .stdout(predicate::str::contains("Network:        192.168.1.0"))
        .stdout(predicate::str::contains(
            "IP Range:       192.168.1.0 - 192.168.1.255",
        ))
        .stdout(predicate::str::contains("Total Hosts:    256"))
        .stdout(predicate::str::contains("Netmask:        255.255.255.0"))
        .stdout(predicate::str::contains("Wildcard Mask:  0.0.0.255"));
}

#[test]
fn test_cidr_parse_invalid() {
    genc()
        .args(["cidr", "parse", "--cidr", "192.168.1.0/33"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error parsing CIDR"))
        .stderr(predicate::str::contains("192.168.1.0/33"));
}

#[test]
fn test_cidr_overlap_output() {
    genc()
        .args([
            "cidr",
            "overlap",
            "--cidrs",
            r#"["87.243.24.122/32", "87.243.24.0/24"]"#,
        ])
        .assert()
        .success()
        .stdout("CIDRs (87.243.24.122/32) and (87.243.24.0/24) overlap\n");

    genc()
        .args([
            "cidr",
            "overlap",
            "--cidrs",
            r#"["87.243.24.122/32", "87.243.25.0/24"]"#,
        ])
        .assert()
        .success()
        .stdout("CIDRs do not overlap\n");
}

#[test]
fn test_cidr_overlap_json() {
    genc()
        .args([
            "--format",
            "json",
            "cidr",
            "overlap",
            "--all",
            "--cidrs",
            r#"["10.0.0.0/8", "10.1.0.0/16", "10.2.0.0/16"]"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overlaps\": true"));
}

#[test]
fn test_ip_in_cidr_output() {
    genc()
        .args([
            "ip",
            "inCIDR",
            "--ip",
            "192.168.1.68",
            "--cidr",
            "192.168.1.0/24",
        ])
        .assert()
        .success()
        .stdout("IP (192.168.1.68) is in the CIDR range (192.168.1.0/24)\n");

    genc()
        .args([
            "ip",
            "in-cidr",
            "--ip",
            "192.168.1.68",
            "--cidr",
            "192.168.1.30/32",
        ])
        .assert()
        .success()
        .stdout("IP (192.168.1.68) is not in the CIDR range (192.168.1.30/32)\n");
}

#[test]
fn test_ip_in_cidr_invalid_ip() {
    genc()
        .args(["ip", "in-cidr", "--ip", "192.168.1", "--cidr", "192.168.1.0/24"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid IP address: 192.168.1"));
}

#[test]
fn test_verbose_flag_wins_over_log_config() {
    genc()
        .args(["-vv", "cidr", "parse", "--cidr", "10.0.0.0/8"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_cidr("));

    genc()
        .args(["cidr", "parse", "--cidr", "10.0.0.0/8"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_cidr(").not());
}

#[test]
fn test_version() {
    genc()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("Version: {}\n", env!("CARGO_PKG_VERSION")));
}
