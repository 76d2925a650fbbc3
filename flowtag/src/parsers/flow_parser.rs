use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::TaggerError;
use crate::protocol::{protocol_name, UnknownProtocolPolicy};
use crate::records::{FlowEntry, PortProtocol};

/// Fields in a default-format (version 2) VPC flow log record.
pub const FLOW_RECORD_FIELDS: usize = 14;

/// Position of `dstport` in a version 2 record:
/// version account-id interface-id srcaddr dstaddr srcport dstport protocol ...
pub const DSTPORT_INDEX: usize = 6;

/// Position of `protocol` in a version 2 record.
pub const PROTOCOL_INDEX: usize = 7;

/// The flow entries read from one flow log, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowLog {
    pub entries: Vec<FlowEntry>,
    /// Non-blank lines dropped for having too few fields.
    pub skipped: usize,
}

/// Extracts the (dstport, protocol) pair from one flow log line.
///
/// Returns `None` for lines with fewer than `FLOW_RECORD_FIELDS` fields.
pub fn parse_flow_line(line: &str, policy: UnknownProtocolPolicy) -> Option<FlowEntry> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < FLOW_RECORD_FIELDS {
        return None;
    }

    let protocol = protocol_name(fields[PROTOCOL_INDEX], policy);
    Some(PortProtocol::new(fields[DSTPORT_INDEX], &protocol))
}

/// Reads a whitespace-delimited flow log.
///
/// Lines are decoded lossily, so a record holding invalid UTF-8 is still read
/// and only dropped if it is short.
pub fn parse_flow_file(path: &Path, policy: UnknownProtocolPolicy) -> Result<FlowLog, TaggerError> {
    debug!("Opening the flow log: {:?} (unknown protocols: {}) ...", path, policy);
    let file = File::open(path).map_err(|e| TaggerError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut flow_log = FlowLog::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| TaggerError::io(path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match parse_flow_line(&line, policy) {
            Some(entry) => flow_log.entries.push(entry),
            None => {
                debug!("Skipping short record at {:?}:{}", path, line_no);
                flow_log.skipped += 1;
            }
        }
    }

    debug!(
        "Read {} flow entries from {:?} ({} skipped)",
        flow_log.entries.len(),
        path,
        flow_log.skipped
    );
    Ok(flow_log)
}
