//! JSON-lines implementation of the record repository.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::Record;
use crate::domain::repositories::{RecordFilter, RecordRepository};
use crate::error::AppError;

/// Append-only record log stored as one JSON object per line.
///
/// Every operation opens the file, uses it and closes it before returning;
/// no handle outlives a call. There is no index and no in-memory copy of the
/// file: each lookup is a full scan, so the file is always the source of truth.
///
/// Lines that fail to decode are skipped rather than failing the scan. The
/// number of such lines met by the latest walk is kept in
/// [`Self::corrupt_lines_seen`]. A final line left without its newline by an
/// interrupted write is closed off before the next record is appended.
///
/// The store assumes a single writer. Two processes appending at the same
/// time can both pass the collision check and write the same short URL.
#[derive(Debug)]
pub struct JsonlRecordRepository {
    path: PathBuf,
    corrupt_lines: AtomicU64,
}

impl JsonlRecordRepository {
    /// Creates a repository over `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            corrupt_lines: AtomicU64::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of distinct undecodable lines passed by the most recent scan or
    /// count. Repeating a lookup does not grow it.
    ///
    /// A scan that stops at its match only reports the lines before it.
    pub fn corrupt_lines_seen(&self) -> u64 {
        self.corrupt_lines.load(Ordering::Relaxed)
    }

    /// Opens the store for reading. A missing file is an empty store.
    fn open_for_read(&self) -> Result<Option<BufReader<File>>, AppError> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Walks decodable records in storage order until `visit` returns `false`.
    fn walk<F>(&self, mut visit: F) -> Result<(), AppError>
    where
        F: FnMut(Record) -> bool,
    {
        let Some(mut reader) = self.open_for_read()? else {
            self.corrupt_lines.store(0, Ordering::Relaxed);
            return Ok(());
        };

        let mut buf = Vec::new();
        let mut line_no = 0usize;
        let mut corrupt = 0u64;

        let result = loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break Ok(()),
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            }
            line_no += 1;

            match self.decode_line(line_no, &buf) {
                Ok(Some(record)) => {
                    if !visit(record) {
                        break Ok(());
                    }
                }
                Ok(None) => {}
                Err(()) => corrupt += 1,
            }
        };

        self.corrupt_lines.store(corrupt, Ordering::Relaxed);
        result
    }

    /// Decodes one raw line. Blank lines yield `Ok(None)`.
    fn decode_line(&self, line_no: usize, raw: &[u8]) -> Result<Option<Record>, ()> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice::<Record>(raw).map(Some).map_err(|e| {
            tracing::warn!(
                path = %self.path.display(),
                line = line_no,
                error = %e,
                "Skipping malformed record line"
            );
        })
    }

    /// Whether `file` has content whose last byte is not a newline.
    fn ends_mid_line(file: &mut File) -> io::Result<bool> {
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl RecordRepository for JsonlRecordRepository {
    fn scan(&self, filter: &RecordFilter) -> Result<Option<Record>, AppError> {
        let mut found = None;

        self.walk(|record| {
            if filter.matches(&record) {
                found = Some(record);
                false
            } else {
                true
            }
        })?;

        Ok(found)
    }

    fn append(&self, record: &Record) -> Result<(), AppError> {
        let encoded = serde_json::to_string(record).map_err(io::Error::other)?;

        let mut file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut line = String::with_capacity(encoded.len() + 2);
        if Self::ends_mid_line(&mut file)? {
            tracing::warn!(path = %self.path.display(), "Closing unterminated last line before append");
            line.push('\n');
        }
        line.push_str(&encoded);
        line.push('\n');

        file.write_all(line.as_bytes())?;
        file.flush()?;

        tracing::debug!(path = %self.path.display(), short_url = %record.short_url, "Record appended");
        Ok(())
    }

    fn count(&self) -> Result<usize, AppError> {
        let mut count = 0;
        self.walk(|_| {
            count += 1;
            true
        })?;
        Ok(count)
    }
}
