use std::io::BufRead;

use crate::error::TaggerError;
use crate::output::{PAIR_HEADER, PAIR_SECTION, TAG_HEADER, TAG_SECTION};
use crate::records::PortProtocol;
use crate::tagger::TagReport;

#[derive(Clone, Copy)]
enum Section {
    Start,
    TagHeader,
    Tags,
    PairSection,
    PairHeader,
    Pairs,
}

fn malformed(line: usize, detail: impl Into<String>) -> TaggerError {
    TaggerError::Report {
        line,
        detail: detail.into(),
    }
}

fn parse_count(line: usize, count: &str) -> Result<u64, TaggerError> {
    count
        .trim()
        .parse()
        .map_err(|_| malformed(line, format!("invalid count {:?}", count)))
}

/// Reads a report produced by `ReportWriter` back into a `TagReport`.
///
/// Row order is not significant.
pub fn parse_report<R: BufRead>(reader: R) -> Result<TagReport, TaggerError> {
    let mut report = TagReport::new();
    let mut section = Section::Start;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| TaggerError::ReportRead {
            line: line_no,
            source,
        })?;
        let text = line.trim();

        section = match section {
            Section::Start if text == TAG_SECTION => Section::TagHeader,
            Section::TagHeader if text == TAG_HEADER => Section::Tags,
            Section::Tags if text.is_empty() => Section::PairSection,
            Section::Tags => {
                let (tag, count) = text
                    .rsplit_once(',')
                    .ok_or_else(|| malformed(line_no, "expected tag,count"))?;
                *report.tag_counts.entry(tag.to_string()).or_insert(0) +=
                    parse_count(line_no, count)?;
                Section::Tags
            }
            Section::PairSection if text == PAIR_SECTION => Section::PairHeader,
            Section::PairHeader if text == PAIR_HEADER => Section::Pairs,
            Section::Pairs if text.is_empty() => Section::Pairs,
            Section::Pairs => {
                let fields: Vec<&str> = text.splitn(3, ',').collect();
                if fields.len() != 3 {
                    return Err(malformed(line_no, "expected port,protocol,count"));
                }
                let pair = PortProtocol::new(fields[0], fields[1]);
                *report.pair_counts.entry(pair).or_insert(0) += parse_count(line_no, fields[2])?;
                Section::Pairs
            }
            _ => return Err(malformed(line_no, format!("unexpected line {:?}", text))),
        };
    }

    match section {
        Section::Pairs => Ok(report),
        _ => Err(malformed(0, "report ended before the port/protocol section")),
    }
}
