use std::collections::HashMap;

use log::debug;

use crate::records::{FlowEntry, LookupTable, PortProtocol};

/// Tag assigned to flow entries with no lookup table match.
pub const UNTAGGED: &str = "Untagged";

/// Frequency tables produced by joining flow entries against a lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagReport {
    pub tag_counts: HashMap<String, u64>,
    pub pair_counts: HashMap<PortProtocol, u64>,
}

impl TagReport {
    pub fn new() -> Self {
        TagReport {
            tag_counts: HashMap::new(),
            pair_counts: HashMap::new(),
        }
    }

    /// Adds one count per entry to both tables, on top of whatever the report
    /// already holds.
    pub fn accumulate(&mut self, entries: &[FlowEntry], lookup: &LookupTable) {
        for entry in entries {
            let tag = lookup.get(entry).unwrap_or(UNTAGGED);

            *self.tag_counts.entry(tag.to_string()).or_insert(0) += 1;
            *self.pair_counts.entry(entry.clone()).or_insert(0) += 1;
        }
    }

    /// Number of flow entries counted.
    pub fn total(&self) -> u64 {
        self.pair_counts.values().sum()
    }

    pub fn untagged(&self) -> u64 {
        self.tag_counts.get(UNTAGGED).copied().unwrap_or(0)
    }

    pub fn tagged(&self) -> u64 {
        self.tag_counts.values().sum::<u64>() - self.untagged()
    }
}

/// Joins `entries` against `lookup`, counting tags and port/protocol pairs.
pub fn assign_tags(entries: &[FlowEntry], lookup: &LookupTable) -> TagReport {
    let mut report = TagReport::new();
    report.accumulate(entries, lookup);

    debug!(
        "Tagged {} entries into {} tags and {} port/protocol combinations",
        entries.len(),
        report.tag_counts.len(),
        report.pair_counts.len()
    );
    report
}
