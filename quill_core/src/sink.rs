//! Log-file append sink.
//!
//! Messages are appended as UTF-8 text with file locking so writes for one
//! logfile path are serialized and land in call order. Every physical line
//! of a message gets a `[<timestamp>] ` prefix; the one-time header block is
//! written raw.

use crate::Result;
use fs2::FileExt;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Number of horizontal-bar characters in the header rule
const HEADER_BAR_WIDTH: usize = 80;

/// Local-time stamp in the historical `YYYY-DD-MM HH:mm:ss` layout.
///
/// Day and month positions are swapped relative to ISO order. Existing log
/// parsers expect exactly this layout, so it is preserved as-is.
pub fn file_timestamp() -> String {
    chrono::Local::now().format("%Y-%d-%m %H:%M:%S").to_string()
}

/// Line sink for rendered file-medium messages
pub trait LineSink {
    fn append(&self, text: &str) -> Result<()>;
}

/// Append-only file sink with per-path write serialization
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a new sink for the given logfile path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the log directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append raw text under an exclusive lock
    fn append_locked(&self, text: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Exclusive lock serializes writers for this path
        file.lock_exclusive()?;

        let mut writer = BufWriter::new(&file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;

        file.unlock()?;
        Ok(())
    }

    /// Append the one-time header block: a `LOG STARTED` stamp followed by a
    /// horizontal rule. Header lines carry no timestamp prefix.
    pub fn append_header(&self) -> Result<()> {
        let block = format!(
            "\n LOG STARTED ({})\n{}\n",
            file_timestamp(),
            "─".repeat(HEADER_BAR_WIDTH)
        );
        self.append_locked(&block)?;
        tracing::debug!("Wrote log header to {:?}", self.path);
        Ok(())
    }
}

impl LineSink for FileSink {
    /// Append a rendered message: one output line per logical line, each
    /// prefixed with the current timestamp
    fn append(&self, text: &str) -> Result<()> {
        let stamp = file_timestamp();
        let mut block = String::new();
        for line in text.lines() {
            block.push_str(&format!("[{}] {}\n", stamp, line));
        }
        self.append_locked(&block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_append_prefixes_each_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("test.log");

        let sink = FileSink::new(&path);
        sink.append("NORMAL File | ns title\n        1,\n        2").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.starts_with('['), "missing prefix: {:?}", line);
            assert!(line.contains("] "), "missing prefix: {:?}", line);
        }
        assert!(lines[0].contains("NORMAL File | ns title"));
    }

    #[test]
    fn test_timestamp_layout_is_year_day_month() {
        let stamp = file_timestamp();
        // YYYY-DD-MM HH:MM:SS
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[7..8], "-");
        assert_eq!(&stamp[10..11], " ");

        let now = chrono::Local::now();
        assert_eq!(stamp[5..7], now.format("%d").to_string());
        assert_eq!(stamp[8..10], now.format("%m").to_string());
    }

    #[test]
    fn test_header_block_shape() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("test.log");

        let sink = FileSink::new(&path);
        sink.append_header().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("\n LOG STARTED ("));
        let bar_line = contents.lines().nth(2).unwrap();
        assert_eq!(bar_line.chars().count(), HEADER_BAR_WIDTH);
        assert!(bar_line.chars().all(|c| c == '─'));
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested/dirs/test.log");

        let sink = FileSink::new(&path);
        sink.append("NORMAL File | ns hello").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_appends_preserve_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("test.log");

        let sink = FileSink::new(&path);
        for i in 0..5 {
            sink.append(&format!("NORMAL File | ns line{}", i)).unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        let positions: Vec<usize> = (0..5)
            .map(|i| contents.find(&format!("line{}", i)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
