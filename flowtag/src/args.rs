use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::protocol::UnknownProtocolPolicy;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// The path to the flow log file
    pub flow_log: Option<PathBuf>,

    /// The path to the lookup table (CSV with a dstport,protocol,tag header)
    pub lookup: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[clap(short, long)]
    pub config_file: Option<PathBuf>,

    /// File path for the report (default: output.txt)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// How to name protocol numbers other than 6, 17 and 1
    #[clap(long, value_enum)]
    pub unknown_protocol: Option<UnknownProtocolPolicy>,

    /// How tags from the lookup table are stored
    #[clap(long, value_enum)]
    pub tag_case: Option<TagCase>,

    /// Row order within each section of the report
    #[clap(long, value_enum)]
    pub order: Option<RowOrder>,
}

#[derive(
    clap::ValueEnum,
    Serialize,
    Deserialize,
    Display,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TagCase {
    /// Tags are kept as written in the lookup table
    #[default]
    Preserve,

    /// Tags are lowercased
    Lower,
}

impl TagCase {
    pub fn apply(self, tag: &str) -> String {
        match self {
            TagCase::Preserve => tag.to_string(),
            TagCase::Lower => tag.to_lowercase(),
        }
    }
}

#[derive(
    clap::ValueEnum,
    Serialize,
    Deserialize,
    Display,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RowOrder {
    /// Tags alphabetically, combinations by port then protocol
    #[default]
    Name,

    /// Highest count first, ties broken by name
    Count,
}

/// Settings that can be kept in a configuration file, loaded with confy.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub flow_log: Option<PathBuf>,
    pub lookup: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub unknown_protocol: UnknownProtocolPolicy,
    pub tag_case: TagCase,
    pub order: RowOrder,
}
