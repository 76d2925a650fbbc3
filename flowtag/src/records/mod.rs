pub mod lookup_table;
pub mod port_protocol;

pub use lookup_table::LookupTable;
pub use port_protocol::{FlowEntry, PortProtocol};
