//! Input abstraction for the analyzer

use crate::api::Error;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Text source to analyze
pub enum Input {
    /// Text held in memory
    Text(String),
    /// UTF-8 file on disk
    File(PathBuf),
    /// UTF-8 encoded bytes
    Bytes(Vec<u8>),
    /// Any reader producing UTF-8 (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish_non_exhaustive(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input as text, dropping a leading byte order mark
    pub(crate) fn into_text(self) -> Result<String, Error> {
        let text = match self {
            Input::Text(text) => text,
            Input::Bytes(bytes) => decode(bytes)?,
            Input::File(path) => {
                let bytes = std::fs::read(&path).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
                })?;
                decode(bytes)?
            }
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                decode(buffer)?
            }
        };

        Ok(match text.strip_prefix(BYTE_ORDER_MARK) {
            Some(rest) => rest.to_string(),
            None => text,
        })
    }
}

fn decode(bytes: Vec<u8>) -> Result<String, Error> {
    String::from_utf8(bytes)
        .map_err(|e| Error::Infrastructure(format!("Invalid UTF-8 encoding: {}", e)))
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}
