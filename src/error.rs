//! Error types for CIDR and IP address handling.

use thiserror::Error;

/// Errors returned by the CIDR/IP operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Malformed CIDR string. Carries the input exactly as supplied.
    #[error("invalid CIDR address: {input}: {reason}")]
    Parse { input: String, reason: ParseFailure },

    /// Malformed IP address given for a membership test.
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// The CIDR list could not be read as a JSON array of strings.
    #[error("error parsing cidrs: {0}")]
    CidrList(String),
}

impl CidrError {
    pub(crate) fn parse(input: &str, reason: ParseFailure) -> Self {
        CidrError::Parse {
            input: input.to_string(),
            reason,
        }
    }

    /// The offending input string, if this is a parse error.
    pub fn input(&self) -> Option<&str> {
        match self {
            CidrError::Parse { input, .. } => Some(input),
            CidrError::InvalidAddress(input) => Some(input),
            CidrError::CidrList(_) => None,
        }
    }
}

/// Why a CIDR string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("missing '/' between address and prefix length")]
    MissingSeparator,

    #[error("unparseable address '{0}'")]
    Address(String),

    #[error("prefix length '{0}' is not a decimal number")]
    Prefix(String),

    #[error("prefix length {prefix} exceeds {max} bits")]
    PrefixTooLong { prefix: u32, max: u8 },
}
