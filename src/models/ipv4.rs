//! IPv4 parsing and CIDR prefix utilities.
//!
//! Provides [`parse_ip`] for reading dotted-quad addresses out of blocklist
//! fields, [`prefix_length`] for reducing an address pair to a prefix, and
//! the [`Cidr`] record that ends up in the output file.

use regex::Regex;
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Regex for up to four dotted decimal octets at the start of a field.
///
/// Every octet may be preceded by ASCII whitespace and a sign, the dots must
/// follow the digits directly. Anything after the last matched octet is ignored.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(
            r"^[[:space:]]*([+-]?[0-9]+)(?:\.[[:space:]]*([+-]?[0-9]+)(?:\.[[:space:]]*([+-]?[0-9]+)(?:\.[[:space:]]*([+-]?[0-9]+))?)?)?",
        )
        .expect("Invalid Regex")
    })
}

/// Error returned by [`parse_ip`] when fewer than four octets could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIpError {
    /// The field that was being parsed, without surrounding whitespace.
    pub input: String,
    /// How many octets were read before parsing stopped.
    pub octets_read: usize,
}

impl fmt::Display for ParseIpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Could not read all four octets correctly from {:?} (got {})",
            self.input, self.octets_read
        )
    }
}

impl Error for ParseIpError {}

/// Narrow a signed run of decimal digits into a single octet, modulo 256.
fn narrow_octet(field: &str) -> u8 {
    if let Some(digits) = field.strip_prefix('-') {
        return narrow_octet(digits).wrapping_neg();
    }
    field
        .trim_start_matches('+')
        .bytes()
        .fold(0u8, |acc, b| acc.wrapping_mul(10).wrapping_add(b - b'0'))
}

/// Parse a dotted-quad address from the start of `input`.
///
/// Values above 255 wrap instead of failing, so `256.1.1.1` reads as
/// `0.1.1.1`. A leading `+` is accepted and a leading `-` negates modulo
/// 256, so `-1` reads as `255`.
///
/// # Examples
/// ```
/// use pg2cidr::models::parse_ip;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse_ip("1.2.3.255\n").unwrap(), Ipv4Addr::new(1, 2, 3, 255));
/// assert!(parse_ip("1.2.3").is_err());
/// ```
pub fn parse_ip(input: &str) -> Result<Ipv4Addr, ParseIpError> {
    let mut octets = [0u8; 4];
    let mut octets_read = 0;

    if let Some(caps) = get_dotted_quad_regex().captures(input) {
        for (octet, group) in octets.iter_mut().zip(caps.iter().skip(1)) {
            let Some(group) = group else {
                break;
            };
            *octet = narrow_octet(group.as_str());
            octets_read += 1;
        }
    }

    if octets_read != octets.len() {
        return Err(ParseIpError {
            input: input.trim().to_string(),
            octets_read,
        });
    }
    Ok(Ipv4Addr::from(octets))
}

/// Number of leading bits shared by `start` and `end`.
///
/// This is the shortest prefix whose block can hold both addresses. It does
/// not check that `start` sits on that block boundary.
///
/// # Examples
/// ```
/// use pg2cidr::models::prefix_length;
/// use std::net::Ipv4Addr;
/// let start = Ipv4Addr::new(192, 168, 1, 0);
/// assert_eq!(prefix_length(start, Ipv4Addr::new(192, 168, 1, 1)), 31);
/// assert_eq!(prefix_length(start, start), 32);
/// ```
pub fn prefix_length(start: Ipv4Addr, end: Ipv4Addr) -> u8 {
    let mut xor = u32::from(start) ^ u32::from(end);
    let mut length = MAX_LENGTH;
    while xor != 0 {
        xor >>= 1;
        length -= 1;
    }
    length
}

/// A network written as `A.B.C.D/N`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The network address, taken as-is from the start of the range.
    pub network: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Build the record for a `start`-`end` pair.
    pub fn from_range(start: Ipv4Addr, end: Ipv4Addr) -> Cidr {
        Cidr {
            network: start,
            prefix: prefix_length(start, end),
        }
    }
}

impl FromStr for Cidr {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Cidr, Self::Err> {
        let (addr, prefix) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| format!("Invalid address/prefix: {s}"))?;
        let network: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        let prefix: u8 = prefix.parse()?;
        if prefix > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Cidr { network, prefix })
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}
