//! Output of converted ranges.
//!
//! - [`sink`] - append-only CIDR writer

mod sink;

pub use sink::CidrSink;
