//! Blocklist processing.
//!
//! - [`reader`] - bounded line reading
//! - [`record`] - line classification and field splitting
//! - [`convert`] - the conversion loop

mod convert;
mod reader;
mod record;

// Re-export public functions
pub use convert::{convert, convert_file};
pub use reader::{Line, LineReader};
pub use record::{classify, Record};
