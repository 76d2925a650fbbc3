use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Name reported for protocol numbers outside the well-known table.
pub const UNKNOWN_PROTOCOL: &str = "unknown";

/// Policy applied to protocol numbers that have no known name.
pub const DEFAULT_UNKNOWN_PROTOCOL_POLICY: UnknownProtocolPolicy = UnknownProtocolPolicy::Unknown;

#[derive(clap::ValueEnum, Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum UnknownProtocolPolicy {
    /// Unmapped protocol numbers are reported as "unknown"
    Unknown,

    /// Unmapped protocol numbers are reported as the raw number
    PassThrough,
}

impl Default for UnknownProtocolPolicy {
    fn default() -> Self {
        DEFAULT_UNKNOWN_PROTOCOL_POLICY
    }
}

/// Resolves an IANA protocol number, as found in a flow log record, to its
/// lowercase name.
///
/// ### Arguments
///
/// * `number` - The protocol number field of the record.
/// * `policy` - What to report when the number is not 6, 17 or 1.
///
/// ### Returns
///
/// `"tcp"`, `"udp"`, `"icmp"`, or the fallback chosen by `policy`.
pub fn protocol_name(number: &str, policy: UnknownProtocolPolicy) -> String {
    let number = number.trim();
    match number {
        "6" => "tcp".to_string(),
        "17" => "udp".to_string(),
        "1" => "icmp".to_string(),
        _ => match policy {
            UnknownProtocolPolicy::Unknown => UNKNOWN_PROTOCOL.to_string(),
            UnknownProtocolPolicy::PassThrough => number.to_lowercase(),
        },
    }
}
