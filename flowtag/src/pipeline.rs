use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{
    config::Config,
    error::TaggerError,
    output::write_report_file,
    parsers::{
        flow_parser::parse_flow_file, lookup_parser::parse_lookup_file,
        report_parser::parse_report,
    },
    tagger::{assign_tags, TagReport},
};

/// Outcome of a run, for the console summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub total: u64,
    pub tagged: u64,
    pub untagged: u64,
    pub skipped: usize,
}

/// Parses both inputs and joins them, without writing anything.
pub fn build_report(config: &Config) -> Result<(TagReport, usize), TaggerError> {
    let lookup = parse_lookup_file(&config.lookup, config.tag_case)?;
    let flow_log = parse_flow_file(&config.flow_log, config.unknown_protocol)?;
    Ok((assign_tags(&flow_log.entries, &lookup), flow_log.skipped))
}

/// Reads the written report back and checks that it holds `report`.
///
/// Failing to reopen the file is an error. A report that reads back with
/// different counts is only logged: fields holding commas cannot be split
/// back apart unambiguously.
pub fn verify_report_file(path: &Path, report: &TagReport) -> Result<bool, TaggerError> {
    let file = File::open(path).map_err(|e| TaggerError::io(path, e))?;
    let matches = match parse_report(BufReader::new(file)) {
        Ok(written) => written == *report,
        Err(TaggerError::ReportRead { source, .. }) => return Err(TaggerError::io(path, source)),
        Err(e) => {
            warn!("Cannot read back {:?}: {}", path, e);
            false
        }
    };
    if !matches {
        warn!("Report {:?} does not read back to the computed counts", path);
    }
    Ok(matches)
}

/// Runs the whole pipeline: lookup table, flow log, join, report file.
pub fn run(config: &Config) -> Result<RunSummary, TaggerError> {
    debug!("Running with {:?}", config);
    let (report, skipped) = build_report(config)?;
    write_report_file(&config.output, &report, config.order)?;
    verify_report_file(&config.output, &report)?;

    Ok(RunSummary {
        output: config.output.clone(),
        total: report.total(),
        tagged: report.tagged(),
        untagged: report.untagged(),
        skipped,
    })
}
