mod sqlite;
mod text;

use std::path::Path;

use crate::error::ShamrockResult;

pub use sqlite::SqliteSink;
pub use text::TextSink;

/// A digest and the plaintext it was computed from, the unit stored in a
/// rainbow table.
#[derive(Copy, Clone, Debug)]
pub struct Entry<'a> {
    /// The raw digest bytes, of any width.
    pub digest: &'a [u8],
    /// The plaintext hashed into the digest.
    pub plaintext: &'a str,
}

/// Trait implemented by the rainbow table writers.
///
/// A sink is append-only and opaque to what it stores: it does not
/// deduplicate, validate or reorder entries. It accumulates every entry
/// written between its opening and [`Sink::close`], however many corpora the
/// caller drives through it.
pub trait Sink {
    /// Appends an entry to the artifact.
    fn write(&mut self, entry: Entry<'_>) -> ShamrockResult<()>;

    /// Finalizes the artifact, flushing or committing anything still pending.
    fn close(self: Box<Self>) -> ShamrockResult<()>;
}

/// All the supported rainbow table artifact formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// A flat file of `digest-hex<TAB>plaintext` lines.
    Text,
    /// A SQLite database indexed on the digest.
    Sqlite,
}

impl ArtifactFormat {
    /// The conventional file extension of artifacts in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Sqlite => "db",
        }
    }

    /// Infers the format of an existing artifact from its file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("txt") => Some(Self::Text),
            Some("db") => Some(Self::Sqlite),
            _ => None,
        }
    }

    /// Opens the sink writing artifacts of this format.
    pub fn open(&self, path: &Path) -> ShamrockResult<Box<dyn Sink>> {
        Ok(match self {
            Self::Text => Box::new(TextSink::open(path)?),
            Self::Sqlite => Box::new(SqliteSink::open(path)?),
        })
    }
}
