//! Convert PeerGuardian blocklists into CIDR ranges.
//!
//! Each `name:start-end` line becomes one `start/prefix` line appended to the
//! output file.

pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::Config;
pub use processing::{convert, convert_file};
