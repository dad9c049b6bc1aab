//! Address pair read from one blocklist line.

use super::ipv4::{parse_ip, Cidr, ParseIpError};
use std::net::Ipv4Addr;

/// A `start`-`end` pair together with the line it came from.
///
/// Lives only while its line is processed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IpRange {
    /// 1-based line number in the input file.
    pub line: usize,
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl IpRange {
    /// Parse both address fields, failing on the first one that does not
    /// hold four octets.
    pub fn parse(line: usize, start: &str, end: &str) -> Result<IpRange, ParseIpError> {
        let start = parse_ip(start)?;
        let end = parse_ip(end)?;
        Ok(IpRange { line, start, end })
    }

    pub fn to_cidr(&self) -> Cidr {
        Cidr::from_range(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let range = IpRange::parse(3, "1.2.3.0", "1.2.3.255\n").unwrap();
        assert_eq!(range.line, 3);
        assert_eq!(range.start, Ipv4Addr::new(1, 2, 3, 0));
        assert_eq!(range.end, Ipv4Addr::new(1, 2, 3, 255));
        assert_eq!(range.to_cidr().to_string(), "1.2.3.0/24");
    }

    #[test]
    fn test_parse_range_bad_end() {
        let err = IpRange::parse(1, "1.2.3.0", "1.2\n").unwrap_err();
        assert_eq!(err.input, "1.2");
        assert_eq!(err.octets_read, 2);
    }

    #[test]
    fn test_parse_range_bad_start_reported_first() {
        let err = IpRange::parse(1, "x", "nope").unwrap_err();
        assert_eq!(err.input, "x");
    }
}
