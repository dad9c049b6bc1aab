//! Append-only output of CIDR records.

use crate::models::Cidr;
use colored::Colorize;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one `A.B.C.D/N` line per record.
pub struct CidrSink<W: Write> {
    writer: BufWriter<W>,
}

impl CidrSink<File> {
    /// Open `path` for appending, creating the file but never its directory.
    pub fn open(path: &Path) -> Result<CidrSink<File>, Box<dyn Error>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                format!(
                    "Cannot open or create the output file {}: {e}",
                    path.display()
                )
            })?;
        log::debug!("Appending to {}", path.display().to_string().on_blue());
        Ok(CidrSink::new(file))
    }
}

impl<W: Write> CidrSink<W> {
    pub fn new(inner: W) -> Self {
        CidrSink {
            writer: BufWriter::new(inner),
        }
    }

    pub fn write(&mut self, cidr: &Cidr) -> io::Result<()> {
        writeln!(self.writer, "{cidr}")
    }

    /// Flush everything buffered and hand back the underlying writer.
    pub fn close(self) -> Result<W, Box<dyn Error>> {
        let inner = self
            .writer
            .into_inner()
            .map_err(|e| format!("Failed to close output file: {}", e.error()))?;
        Ok(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_write_lines() {
        let mut sink = CidrSink::new(Vec::new());
        sink.write(&Cidr::from_range(
            Ipv4Addr::new(1, 2, 3, 0),
            Ipv4Addr::new(1, 2, 3, 255),
        ))
        .unwrap();
        sink.write(&Cidr::from_range(
            Ipv4Addr::new(8, 8, 8, 8),
            Ipv4Addr::new(8, 8, 8, 8),
        ))
        .unwrap();
        let out = sink.close().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.2.3.0/24\n8.8.8.8/32\n");
    }

    #[test]
    fn test_open_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nets.txt");
        std::fs::write(&path, "existing/1\n").unwrap();

        let mut sink = CidrSink::open(&path).unwrap();
        sink.write(&"10.0.0.0/8".parse().unwrap()).unwrap();
        sink.close().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing/1\n10.0.0.0/8\n");
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranges").join("nets.txt");
        let err = CidrSink::open(&path).err().unwrap();
        assert!(err.to_string().starts_with("Cannot open or create the output file"));
        assert!(!dir.path().join("ranges").exists());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_close_reports_flush_failure() {
        let mut sink = CidrSink::new(FailingWriter);
        // Buffered, so the failure only shows up on close
        sink.write(&"10.0.0.0/8".parse().unwrap()).unwrap();
        let err = sink.close().err().unwrap();
        assert!(err.to_string().contains("disk full"));
    }
}
