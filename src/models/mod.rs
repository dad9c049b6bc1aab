//! Domain models for the blocklist conversion.
//!
//! - [`Cidr`] - the `A.B.C.D/N` output record
//! - [`IpRange`] - the `start`-`end` pair read from one line
//! - [`Summary`] - counters for a whole run

mod ipv4;
mod range;
mod summary;

// Re-export public types
pub use ipv4::{parse_ip, prefix_length, Cidr, ParseIpError, MAX_LENGTH};
pub use range::IpRange;
pub use summary::Summary;
