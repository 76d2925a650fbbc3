#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::{
        error::TaggerError,
        parsers::flow_parser::{parse_flow_file, parse_flow_line, FLOW_RECORD_FIELDS},
        protocol::UnknownProtocolPolicy,
        records::PortProtocol,
    };

    const FLOW_LOG: &str = "\
2 123456789 eni-12345 192.168.1.10 10.0.0.1 34567 22 6 10 5000 1632914310 1632914372 ACCEPT OK
2 123456789 eni-12345 192.168.1.11 10.0.0.2 34568 80 6 8 4000 1632914320 1632914382 ACCEPT OK
2 123456789 eni-12345 192.168.1.12 10.0.0.3 34569 53 17 5 2500 1632914360 1632914422 ACCEPT OK
";

    #[test]
    fn test_parse_flow_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flowlog.txt");
        fs::write(&path, FLOW_LOG).unwrap();

        let flow_log = parse_flow_file(&path, UnknownProtocolPolicy::Unknown).unwrap();

        assert_eq!(
            flow_log.entries,
            vec![
                PortProtocol::new("22", "tcp"),
                PortProtocol::new("80", "tcp"),
                PortProtocol::new("53", "udp"),
            ]
        );
        assert_eq!(flow_log.skipped, 0);
    }

    #[test]
    fn test_parse_flow_line_field_count() {
        let fields: Vec<String> = (0..FLOW_RECORD_FIELDS).map(|i| i.to_string()).collect();

        let short = fields[..FLOW_RECORD_FIELDS - 1].join(" ");
        assert_eq!(parse_flow_line(&short, UnknownProtocolPolicy::Unknown), None);

        // dstport is field 6, protocol field 7 ("7" is not a known protocol)
        let full = fields.join(" ");
        assert_eq!(
            parse_flow_line(&full, UnknownProtocolPolicy::Unknown),
            Some(PortProtocol::new("6", "unknown"))
        );

        let long = format!("{} extra fields", full);
        assert!(parse_flow_line(&long, UnknownProtocolPolicy::Unknown).is_some());
    }

    #[test]
    fn test_parse_flow_line_mixed_whitespace() {
        let line = "  2\t123456789 eni-1   10.0.0.1 10.0.0.2 443 8080\t6 1 40 1 2 ACCEPT OK  ";
        assert_eq!(
            parse_flow_line(line, UnknownProtocolPolicy::Unknown),
            Some(PortProtocol::new("8080", "tcp"))
        );
    }

    #[test]
    fn test_parse_flow_line_unknown_protocol() {
        let line = "2 123 eni-1 10.0.0.1 10.0.0.2 1000 5000 99 1 40 1 2 ACCEPT OK";
        assert_eq!(
            parse_flow_line(line, UnknownProtocolPolicy::Unknown),
            Some(PortProtocol::new("5000", "unknown"))
        );
        assert_eq!(
            parse_flow_line(line, UnknownProtocolPolicy::PassThrough),
            Some(PortProtocol::new("5000", "99"))
        );
    }

    #[test]
    fn test_short_lines_are_skipped_and_counted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flowlog.txt");
        let contents = format!(
            "{}\n2 123456789 eni-12345 truncated record\n\n   \n{}",
            "2 123 eni-1 10.0.0.1 10.0.0.2 1000 443 6 1 40 1 2 ACCEPT OK",
            "2 123 eni-1 10.0.0.1 10.0.0.2 1000 68 1 1 40 1 2 ACCEPT OK",
        );
        fs::write(&path, contents).unwrap();

        let flow_log = parse_flow_file(&path, UnknownProtocolPolicy::Unknown).unwrap();

        assert_eq!(
            flow_log.entries,
            vec![PortProtocol::new("443", "tcp"), PortProtocol::new("68", "icmp")]
        );
        // Blank lines are not records and are not counted as skipped.
        assert_eq!(flow_log.skipped, 1);
    }

    #[test]
    fn test_invalid_utf8_does_not_abort() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flowlog.txt");
        let mut contents = b"2 123 eni-1 10.0.0.1 10.0.0.2 1000 443 6 1 40 1 2 ACCEPT OK\n".to_vec();
        contents.extend_from_slice(b"2 123 eni-\xff broken\n");
        contents.extend_from_slice(b"2 123 eni-1 10.0.0.1 10.0.0.2 1000 53 17 1 40 1 2 ACC\xffEPT OK\n");
        fs::write(&path, contents).unwrap();

        let flow_log = parse_flow_file(&path, UnknownProtocolPolicy::Unknown).unwrap();

        assert_eq!(
            flow_log.entries,
            vec![PortProtocol::new("443", "tcp"), PortProtocol::new("53", "udp")]
        );
        assert_eq!(flow_log.skipped, 1);
    }

    #[test]
    fn test_parse_flow_file_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        match parse_flow_file(&path, UnknownProtocolPolicy::Unknown) {
            Err(TaggerError::Io { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }
}
