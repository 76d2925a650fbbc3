use std::collections::HashMap;

use super::port_protocol::PortProtocol;

/// Mapping from (destination port, protocol) to tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    tags: HashMap<PortProtocol, String>,
}

impl LookupTable {
    pub fn new() -> Self {
        LookupTable {
            tags: HashMap::new(),
        }
    }

    /// Inserts a tag, replacing and returning any tag already held for the key.
    pub fn insert(&mut self, key: PortProtocol, tag: impl Into<String>) -> Option<String> {
        self.tags.insert(key, tag.into())
    }

    pub fn get(&self, key: &PortProtocol) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<(PortProtocol, String)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (PortProtocol, String)>>(iter: I) -> Self {
        let mut table = LookupTable::new();
        for (key, tag) in iter {
            table.insert(key, tag);
        }
        table
    }
}
