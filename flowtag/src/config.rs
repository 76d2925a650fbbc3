use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::args::{Cli, ConfigFile, RowOrder, TagCase};
use crate::error::TaggerError;
use crate::protocol::UnknownProtocolPolicy;

/// Report file written when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub flow_log: PathBuf,
    pub lookup: PathBuf,
    pub output: PathBuf,
    pub unknown_protocol: UnknownProtocolPolicy,
    pub tag_case: TagCase,
    pub order: RowOrder,
}

impl Config {
    /// Settings for the interactive mode: only the two inputs are asked for.
    pub fn interactive(flow_log: PathBuf, lookup: PathBuf) -> Self {
        Config {
            flow_log,
            lookup,
            output: PathBuf::from(DEFAULT_OUTPUT),
            unknown_protocol: UnknownProtocolPolicy::default(),
            tag_case: TagCase::default(),
            order: RowOrder::default(),
        }
    }

    pub fn from_cli(cli: Cli) -> Result<Self, TaggerError> {
        let file = match &cli.config_file {
            Some(path) => load_config_file(path)?,
            None => ConfigFile::default(),
        };
        Config::merge(cli, file)
    }

    /// Command line values take precedence over the configuration file.
    pub fn merge(cli: Cli, file: ConfigFile) -> Result<Self, TaggerError> {
        let flow_log = cli
            .flow_log
            .or(file.flow_log)
            .ok_or(TaggerError::MissingInput("flow log path"))?;
        let lookup = cli
            .lookup
            .or(file.lookup)
            .ok_or(TaggerError::MissingInput("lookup table path"))?;

        Ok(Config {
            flow_log,
            lookup,
            output: cli
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            unknown_protocol: cli.unknown_protocol.unwrap_or(file.unknown_protocol),
            tag_case: cli.tag_case.unwrap_or(file.tag_case),
            order: cli.order.unwrap_or(file.order),
        })
    }
}

/// Loads a configuration file, which must already exist.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, TaggerError> {
    debug!("Loading configuration from {:?}", path);
    if !path.is_file() {
        return Err(TaggerError::io(
            path,
            io::Error::new(io::ErrorKind::NotFound, "configuration file not found"),
        ));
    }
    confy::load_path::<ConfigFile>(path).map_err(|source| TaggerError::Config {
        path: path.to_path_buf(),
        source,
    })
}
