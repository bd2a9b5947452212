use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use super::{Entry, Sink};
use crate::error::ShamrockResult;

/// A sink writing a flat file of `digest-hex<TAB>plaintext` lines.
///
/// The digest is lowercase hexadecimal, so a line is grep-able by digest and
/// splits back into its two fields on the tab.
pub struct TextSink {
    writer: BufWriter<File>,
}

impl TextSink {
    /// Opens the artifact in append mode, creating the file if needed.
    ///
    /// Append mode lets several corpora, or several runs, accumulate into
    /// the same artifact.
    pub fn open(path: &Path) -> ShamrockResult<Self> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Sink for TextSink {
    fn write(&mut self, entry: Entry<'_>) -> ShamrockResult<()> {
        writeln!(
            self.writer,
            "{}\t{}",
            hex::encode(entry.digest),
            entry.plaintext
        )?;

        Ok(())
    }

    fn close(mut self: Box<Self>) -> ShamrockResult<()> {
        self.writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::TextSink;
    use crate::{
        hash::HashAlgorithm,
        sink::{Entry, Sink},
    };

    #[test]
    fn entries_become_tab_separated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainbow.txt");

        let mut sink = Box::new(TextSink::open(&path).unwrap());
        sink.write(Entry {
            digest: &HashAlgorithm::Md5.digest(b"hello"),
            plaintext: "hello",
        })
        .unwrap();
        sink.write(Entry {
            digest: &HashAlgorithm::Md5.digest(b"world"),
            plaintext: "world",
        })
        .unwrap();
        sink.close().unwrap();

        assert_eq!(
            "5d41402abc4b2a76b9719d911017c592\thello\n\
             7d793037a0760186574b0282f2f435e7\tworld\n",
            fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn reopening_appends_to_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainbow.txt");

        for plaintext in ["first", "second"] {
            let mut sink = Box::new(TextSink::open(&path).unwrap());
            sink.write(Entry {
                digest: &HashAlgorithm::Md5.digest(plaintext.as_bytes()),
                plaintext,
            })
            .unwrap();
            sink.close().unwrap();
        }

        assert_eq!(2, fs::read_to_string(&path).unwrap().lines().count());
    }

    #[test]
    fn closing_an_untouched_sink_leaves_an_empty_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainbow.txt");

        Box::new(TextSink::open(&path).unwrap()).close().unwrap();

        assert_eq!("", fs::read_to_string(&path).unwrap());
    }
}
