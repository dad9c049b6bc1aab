//! The conversion loop: reader -> record -> address pair -> sink.

use super::reader::{Line, LineReader};
use super::record::{classify, Record};
use crate::config::Config;
use crate::models::{IpRange, Summary};
use crate::output::CidrSink;
use colored::Colorize;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// Convert the file named by `config.input`, appending to `config.output`.
///
/// The input is opened first, so a missing input never touches the output
/// file. Returns the run's [`Summary`].
pub fn convert_file(config: &Config) -> Result<Summary, Box<dyn Error>> {
    let input = File::open(&config.input)
        .map_err(|e| format!("Cannot open file {}: {e}", config.input.display()))?;
    let mut sink = CidrSink::open(&config.output)?;

    let summary = convert(BufReader::new(input), &mut sink, config.max_line_length)?;
    sink.close()?;

    Ok(summary)
}

/// Convert every line of `input`, writing records to `sink`.
///
/// Record-level problems are logged and counted; only I/O failures are
/// returned as errors.
pub fn convert<R: BufRead, W: Write>(
    input: R,
    sink: &mut CidrSink<W>,
    max_line_length: usize,
) -> Result<Summary, Box<dyn Error>> {
    let mut summary = Summary::default();
    let mut reader = LineReader::new(input, max_line_length);

    while let Some(line) = reader
        .next_line()
        .map_err(|e| format!("Error reading input: {e}"))?
    {
        summary.lines_read += 1;
        let (number, text) = match line {
            Line::Text { number, text } => (number, text),
            Line::TooLong { number, length } => {
                log::warn!(
                    "line {}: exceeds the maximum allowed length ({length} bytes, limit {max_line_length})",
                    number.to_string().yellow()
                );
                summary.too_long += 1;
                continue;
            }
        };

        match classify(&text) {
            Record::Comment | Record::Blank => summary.ignored += 1,
            Record::Malformed(missing) => {
                log::debug!("line {number}: no '{missing}', skipped");
                summary.malformed += 1;
            }
            Record::Range { start, end } => match IpRange::parse(number, start, end) {
                Ok(range) => {
                    let cidr = range.to_cidr();
                    log::trace!("line {number}: {}-{} -> {cidr}", range.start, range.end);
                    sink.write(&cidr)
                        .map_err(|e| format!("Error writing output file: {e}"))?;
                    summary.written += 1;
                }
                Err(e) => {
                    log::warn!("line {}: {e}", number.to_string().yellow());
                    summary.bad_address += 1;
                }
            },
        }
    }

    Ok(summary)
}
