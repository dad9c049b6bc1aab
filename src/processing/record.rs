//! Splitting a blocklist line into its address fields.
//!
//! PeerGuardian lines look like `description:start-end`. Only the first `:`
//! and the first `-` after it matter, anything else in the description is
//! not interpreted.

/// What one line holds.
#[derive(Debug, PartialEq, Eq)]
pub enum Record<'a> {
    /// Starts with `#`.
    Comment,
    /// Nothing but the newline.
    Blank,
    /// The named delimiter was not found.
    Malformed(char),
    /// The raw address fields; `end` still carries the line ending.
    Range { start: &'a str, end: &'a str },
}

/// Classify a line as read from the input, newline included.
pub fn classify(line: &str) -> Record<'_> {
    if line.starts_with('#') {
        return Record::Comment;
    }
    if line == "\n" {
        return Record::Blank;
    }
    let Some((_, rest)) = line.split_once(':') else {
        return Record::Malformed(':');
    };
    let Some((start, end)) = rest.split_once('-') else {
        return Record::Malformed('-');
    };
    Record::Range { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_range() {
        assert_eq!(
            classify("example:1.2.3.0-1.2.3.255\n"),
            Record::Range {
                start: "1.2.3.0",
                end: "1.2.3.255\n"
            }
        );
    }

    #[test]
    fn test_classify_comment_and_blank() {
        assert_eq!(classify("# comment\n"), Record::Comment);
        assert_eq!(classify("#a:1.1.1.1-1.1.1.1\n"), Record::Comment);
        assert_eq!(classify("\n"), Record::Blank);
    }

    #[test]
    fn test_classify_missing_delimiters() {
        assert_eq!(classify("noRange 5.6.7.8\n"), Record::Malformed(':'));
        assert_eq!(classify("noRange:5.6.7.8\n"), Record::Malformed('-'));
        assert_eq!(classify("   \n"), Record::Malformed(':'));
        // description hyphens come before the colon and do not count
        assert_eq!(classify("some-name:5.6.7.8\n"), Record::Malformed('-'));
    }

    #[test]
    fn test_classify_first_delimiters_win() {
        assert_eq!(
            classify("a:b:1.1.1.1-2.2.2.2-3\n"),
            Record::Range {
                start: "b:1.1.1.1",
                end: "2.2.2.2-3\n"
            }
        );
        assert_eq!(
            classify("Bad-Guys Inc:10.0.0.0-10.0.0.255"),
            Record::Range {
                start: "10.0.0.0",
                end: "10.0.0.255"
            }
        );
    }
}
