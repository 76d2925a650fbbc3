use std::cmp::Ordering;
use std::fmt;

/// A destination port and protocol name pair, the join key between a flow log
/// and a lookup table.
///
/// Both parts are stored lowercased so that matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortProtocol {
    pub port: String,
    pub protocol: String,
}

/// One parsed flow log record. Only the join key is kept.
pub type FlowEntry = PortProtocol;

impl PortProtocol {
    pub fn new(port: &str, protocol: &str) -> Self {
        PortProtocol {
            port: port.trim().to_lowercase(),
            protocol: protocol.trim().to_lowercase(),
        }
    }

    fn numeric_port(&self) -> Option<u32> {
        self.port.parse().ok()
    }
}

impl fmt::Display for PortProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.port, self.protocol)
    }
}

// Numeric ports sort numerically and ahead of anything that is not a number.
impl Ord for PortProtocol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric_port(), other.numeric_port()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.port.cmp(&other.port))
        .then_with(|| self.protocol.cmp(&other.protocol))
    }
}

impl PartialOrd for PortProtocol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
