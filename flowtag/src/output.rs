use std::{
    ffi::{OsStr, OsString},
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{args::RowOrder, error::TaggerError, records::PortProtocol, tagger::TagReport};

pub const TAG_SECTION: &str = "Tag Counts:";
pub const TAG_HEADER: &str = "Tag,Count";
pub const PAIR_SECTION: &str = "Port/Protocol Combination Counts:";
pub const PAIR_HEADER: &str = "Port,Protocol,Count";

pub struct ReportWriter<W: Write> {
    order: RowOrder,
    writer: BufWriter<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, order: RowOrder) -> Self {
        ReportWriter {
            order,
            writer: BufWriter::new(writer),
        }
    }

    /// Writes both sections of the report, separated by a blank line.
    pub fn write_report(&mut self, report: &TagReport) -> io::Result<()> {
        debug!("Writing tag counts to output");
        writeln!(self.writer, "{}", TAG_SECTION)?;
        writeln!(self.writer, "{}", TAG_HEADER)?;
        for (tag, count) in sorted_tags(report, self.order) {
            writeln!(self.writer, "{},{}", tag, count)?;
        }

        writeln!(self.writer)?;

        debug!("Writing port/protocol counts to output");
        writeln!(self.writer, "{}", PAIR_SECTION)?;
        writeln!(self.writer, "{}", PAIR_HEADER)?;
        for (pair, count) in sorted_pairs(report, self.order) {
            writeln!(self.writer, "{},{},{}", pair.port, pair.protocol, count)?;
        }
        Ok(())
    }

    /// Flushes the buffer and hands back the underlying writer.
    pub fn flush_and_close(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

fn sorted_tags(report: &TagReport, order: RowOrder) -> Vec<(&str, u64)> {
    let mut rows: Vec<(&str, u64)> = report
        .tag_counts
        .iter()
        .map(|(tag, &count)| (tag.as_str(), count))
        .collect();
    match order {
        RowOrder::Name => rows.sort_by(|a, b| a.0.cmp(b.0)),
        RowOrder::Count => rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))),
    }
    rows
}

fn sorted_pairs(report: &TagReport, order: RowOrder) -> Vec<(&PortProtocol, u64)> {
    let mut rows: Vec<(&PortProtocol, u64)> = report
        .pair_counts
        .iter()
        .map(|(pair, &count)| (pair, count))
        .collect();
    match order {
        RowOrder::Name => rows.sort_by(|a, b| a.0.cmp(b.0)),
        RowOrder::Count => rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))),
    }
    rows
}

/// Sibling file the report is staged in before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("report")));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_staged(staging: &Path, report: &TagReport, order: RowOrder) -> io::Result<()> {
    let file = File::create(staging)?;
    let mut writer = ReportWriter::new(file, order);
    writer.write_report(report)?;
    let file = writer.flush_and_close()?;
    file.sync_all()
}

/// Writes the report to `path`.
///
/// The report is written to a staging file next to `path` and renamed into
/// place once fully flushed, so `path` is never left half-written. On failure
/// the staging file is removed.
pub fn write_report_file(path: &Path, report: &TagReport, order: RowOrder) -> Result<(), TaggerError> {
    let staging = staging_path(path);
    debug!("Staging report in {:?} (order: {})", staging, order);

    if let Err(e) = write_staged(&staging, report, order).and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(TaggerError::io(path, e));
    }
    Ok(())
}
