pub mod alphabet;
pub mod batch;
pub mod error;
pub mod hash;
pub mod lookup;
pub mod sink;
pub mod table;
pub mod wordlist;

pub use alphabet::Alphabet;
pub use error::{ShamrockError, ShamrockResult};
pub use hash::HashAlgorithm;
pub use sink::{ArtifactFormat, Entry, Sink, SqliteSink, TextSink};
pub use wordlist::{Wordlist, Words};

/// The default charset.
pub const DEFAULT_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The default maximum word length.
pub const DEFAULT_MAX_WORD_LENGTH: u8 = 8;

/// The file extension marking a file as a corpus of plaintexts.
pub const CORPUS_EXTENSION: &str = "txt";
