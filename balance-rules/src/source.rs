//! Where rule lines come from.

use crate::error::RuleError;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// A restartable source of text lines.
///
/// Every call to [`LineSource::open`] starts again from the beginning, so
/// one source can feed several independent runs.
pub trait LineSource: Send + Sync {
    /// Open a fresh reader positioned at the start of the input.
    fn open(&self) -> Result<Box<dyn BufRead + Send>, RuleError>;

    /// Open the source and iterate its lines, trimmed.
    fn lines(&self) -> Result<TrimmedLines<Box<dyn BufRead + Send>>, RuleError> {
        Ok(TrimmedLines::new(self.open()?))
    }
}

/// Lines read from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Read from `path`. The file is not touched until [`LineSource::open`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn open(&self) -> Result<Box<dyn BufRead + Send>, RuleError> {
        let file = File::open(&self.path).map_err(|e| {
            std::io::Error::new(e.kind(), format!("{}: {e}", self.path.display()))
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Lines held in memory.
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    /// Serve `text` line by line.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LineSource for TextSource {
    fn open(&self) -> Result<Box<dyn BufRead + Send>, RuleError> {
        Ok(Box::new(Cursor::new(self.text.clone().into_bytes())))
    }
}

/// Iterator over the lines of a reader with surrounding whitespace removed.
pub struct TrimmedLines<R> {
    inner: std::io::Lines<R>,
}

impl<R: BufRead> TrimmedLines<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for TrimmedLines<R> {
    type Item = Result<String, RuleError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        Some(
            line.map(|l| l.trim().to_string())
                .map_err(RuleError::from),
        )
    }
}
