//! Command line definition.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "genc",
    version,
    about = "CIDR and IP address analysis",
    long_about = "Parse CIDR blocks, check a list of CIDRs for overlapping ranges \
                  and test whether an IP address lies inside a CIDR block."
)]
pub struct Cli {
    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "GENC_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    /// log4rs configuration file
    #[arg(long, global = true, env = "GENC_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,

    /// Log to stderr instead of the config file (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// CIDR related commands
    #[command(subcommand)]
    Cidr(CidrCommands),

    /// IP related commands
    #[command(subcommand)]
    Ip(IpCommands),

    /// Print the version of the CLI
    Version,
}

#[derive(Subcommand, Debug)]
pub enum CidrCommands {
    /// Parse the CIDR and output relevant information
    Parse {
        /// The CIDR to parse, e.g. 192.168.1.0/24
        #[arg(long)]
        cidr: String,
    },

    /// Determine if CIDR blocks overlap with each other
    Overlap {
        /// JSON array of CIDRs, e.g. '["87.243.24.122/32", "87.243.24.0/24"]'
        #[arg(long)]
        cidrs: String,

        /// Report every overlapping pair, not only the first one
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum IpCommands {
    /// Determine if an IP is within the range of a CIDR
    #[command(name = "in-cidr", alias = "inCIDR")]
    InCidr {
        /// The IP address
        #[arg(long)]
        ip: String,

        /// The CIDR block
        #[arg(long)]
        cidr: String,
    },
}
