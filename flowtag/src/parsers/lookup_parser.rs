use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};
use log::{debug, warn};

use crate::args::TagCase;
use crate::error::TaggerError;
use crate::records::{LookupTable, PortProtocol};

/// Minimum number of fields for a lookup row: dstport, protocol, tag.
const LOOKUP_FIELDS: usize = 3;

/// Number of fields left once trailing empty fields are dropped, so that
/// `22,tcp,` counts as two fields.
fn significant_fields(record: &ByteRecord) -> usize {
    record
        .iter()
        .enumerate()
        .filter(|(_, bytes)| !bytes.is_empty())
        .last()
        .map_or(0, |(index, _)| index + 1)
}

/// Decodes a field, replacing invalid UTF-8 instead of rejecting the row.
fn field(record: &ByteRecord, index: usize) -> Cow<'_, str> {
    String::from_utf8_lossy(&record[index])
}

/// Reads a lookup table CSV into a `LookupTable`.
///
/// The first line is a header and is always skipped, whatever it holds. Rows
/// with fewer than three fields are ignored. Port and protocol are trimmed and
/// lowercased; the tag is trimmed and then stored according to `tag_case`. A
/// later row for the same port and protocol replaces an earlier one. Bytes that
/// are not valid UTF-8 are replaced rather than failing the row.
pub fn parse_lookup_file(path: &Path, tag_case: TagCase) -> Result<LookupTable, TaggerError> {
    debug!("Opening the lookup file: {:?} (tag case: {}) ...", path, tag_case);
    let file = File::open(path).map_err(|e| TaggerError::io(path, e))?;
    let mut reader = BufReader::new(file);

    // The csv reader skips blank lines, so the header is dropped here instead.
    let mut header = Vec::new();
    reader
        .read_until(b'\n', &mut header)
        .map_err(|e| TaggerError::io(path, e))?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut table = LookupTable::new();
    let mut skipped = 0usize;

    for result in rdr.byte_records() {
        let record = result.map_err(|source| TaggerError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        if significant_fields(&record) < LOOKUP_FIELDS {
            skipped += 1;
            continue;
        }

        let key = PortProtocol::new(&field(&record, 0), &field(&record, 1));
        let tag = tag_case.apply(field(&record, 2).trim());
        if let Some(previous) = table.insert(key.clone(), tag) {
            debug!("Lookup entry {} redefined, dropping tag {:?}", key, previous);
        }
    }

    debug!(
        "Loaded {} lookup entries from {:?} ({} short rows skipped)",
        table.len(),
        path,
        skipped
    );
    if table.is_empty() {
        warn!("Lookup table {:?} has no entries, every flow will be untagged", path);
    }
    Ok(table)
}
