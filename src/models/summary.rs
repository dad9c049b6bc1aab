//! Per-run counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to the lines of one input file.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Lines read, including oversized ones.
    pub lines_read: usize,
    /// CIDR records appended to the output.
    pub written: usize,
    /// Comment and blank lines.
    pub ignored: usize,
    /// Lines missing the `:` or `-` delimiter.
    pub malformed: usize,
    /// Lines at or over the maximum length.
    pub too_long: usize,
    /// Records whose start or end address did not parse.
    pub bad_address: usize,
}

impl Summary {
    /// Lines that were dropped for a reason worth a diagnostic.
    pub fn rejected(&self) -> usize {
        self.too_long + self.bad_address
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display_is_json() {
        let summary = Summary {
            lines_read: 4,
            written: 1,
            ignored: 1,
            malformed: 1,
            too_long: 1,
            bad_address: 0,
        };
        let back: Summary = serde_json::from_str(&summary.to_string()).unwrap();
        assert_eq!(back, summary);
        assert_eq!(summary.rejected(), 1);
    }
}
