pub mod flow_parser;
pub mod lookup_parser;
pub mod report_parser;
