use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{
    error::ShamrockResult,
    hash::HashAlgorithm,
    sink::{Entry, Sink},
};

/// Hashes every line of `corpus` and appends the resulting entries to `sink`.
///
/// Each line is one plaintext; empty lines are skipped without error. A
/// single streaming hasher is reset between lines, so no per-line allocation
/// happens beyond the line itself. The sink is never closed here: its
/// lifecycle belongs to the caller, which may drive several corpora through
/// it before closing. Returns the number of entries written.
pub fn build<R: BufRead>(
    corpus: R,
    algorithm: HashAlgorithm,
    sink: &mut dyn Sink,
) -> ShamrockResult<u64> {
    let mut hasher = algorithm.hasher();
    let mut entries = 0;

    for line in corpus.lines() {
        let plaintext = line?;
        if plaintext.is_empty() {
            continue;
        }

        hasher.update(plaintext.as_bytes());
        let digest = hasher.finalize_reset();

        sink.write(Entry {
            digest: &digest,
            plaintext: &plaintext,
        })?;
        entries += 1;
    }

    Ok(entries)
}

/// Hashes the corpus file at `path` through [`build`].
pub fn build_file(
    path: &Path,
    algorithm: HashAlgorithm,
    sink: &mut dyn Sink,
) -> ShamrockResult<u64> {
    let corpus = BufReader::new(File::open(path)?);
    let entries = build(corpus, algorithm, sink)?;

    debug!(entries, corpus = %path.display(), "corpus hashed");

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use super::{build, build_file};
    use crate::{
        error::ShamrockResult,
        hash::HashAlgorithm,
        sink::{Entry, Sink, TextSink},
    };

    /// A sink keeping the hex digests and plaintexts it received.
    #[derive(Default)]
    struct MemorySink {
        entries: Vec<(String, String)>,
    }

    impl Sink for MemorySink {
        fn write(&mut self, entry: Entry<'_>) -> ShamrockResult<()> {
            self.entries
                .push((hex::encode(entry.digest), entry.plaintext.to_owned()));
            Ok(())
        }

        fn close(self: Box<Self>) -> ShamrockResult<()> {
            Ok(())
        }
    }

    #[test]
    fn every_line_is_hashed_in_order() {
        let mut sink = MemorySink::default();

        let entries = build(
            Cursor::new("hello\nworld\n"),
            HashAlgorithm::Md5,
            &mut sink,
        )
        .unwrap();

        assert_eq!(2, entries);
        assert_eq!(
            vec![
                (
                    "5d41402abc4b2a76b9719d911017c592".to_owned(),
                    "hello".to_owned()
                ),
                (
                    "7d793037a0760186574b0282f2f435e7".to_owned(),
                    "world".to_owned()
                ),
            ],
            sink.entries
        );
    }

    #[test]
    fn empty_lines_are_skipped() {
        let mut sink = MemorySink::default();

        let entries = build(
            Cursor::new("hello\n\n\nworld\n\n"),
            HashAlgorithm::Md5,
            &mut sink,
        )
        .unwrap();

        assert_eq!(2, entries);
        assert_eq!(2, sink.entries.len());
    }

    #[test]
    fn a_corpus_without_final_newline_still_counts_its_last_line() {
        let mut sink = MemorySink::default();

        let entries = build(Cursor::new("hello\nworld"), HashAlgorithm::Md5, &mut sink).unwrap();

        assert_eq!(2, entries);
    }

    #[test]
    fn the_sink_stays_open_between_corpora() {
        let mut sink = MemorySink::default();

        build(Cursor::new("one\ntwo\n"), HashAlgorithm::Sha1, &mut sink).unwrap();
        build(Cursor::new("three\n"), HashAlgorithm::Sha1, &mut sink).unwrap();

        assert_eq!(3, sink.entries.len());
    }

    #[test]
    fn plaintexts_round_trip_through_a_text_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpus.txt");
        let artifact = dir.path().join("rainbow.txt");
        fs::write(&corpus, "alpha\nbeta\ngamma\n").unwrap();

        let mut sink: Box<dyn Sink> = Box::new(TextSink::open(&artifact).unwrap());
        let entries = build_file(&corpus, HashAlgorithm::Sha256, sink.as_mut()).unwrap();
        sink.close().unwrap();

        assert_eq!(3, entries);

        let contents = fs::read_to_string(&artifact).unwrap();
        let plaintexts: Vec<&str> = contents
            .lines()
            .map(|line| line.split_once('\t').unwrap().1)
            .collect();
        assert_eq!(vec!["alpha", "beta", "gamma"], plaintexts);
    }

    #[test]
    fn a_missing_corpus_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = MemorySink::default();

        let result = build_file(
            &dir.path().join("nowhere.txt"),
            HashAlgorithm::Md5,
            &mut sink,
        );

        assert!(result.is_err());
    }
}
