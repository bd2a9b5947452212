use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::ShamrockResult,
    hash::HashAlgorithm,
    sink::Sink,
    table, CORPUS_EXTENSION,
};

/// Hashes every corpus file of a folder into a single rainbow table.
///
/// The `.txt` files directly inside `folder` are processed in ascending name
/// order, so two runs over the same folder write their entries in the same
/// order. Subfolders and files with any other extension are ignored.
///
/// `open_sink` is called exactly once, before the first corpus, and the sink
/// it returns is shared by every file and closed after the last one. A
/// folder without any corpus file therefore still produces an empty
/// artifact, and the run returns the total number of entries written.
pub fn run<F>(folder: &Path, algorithm: HashAlgorithm, open_sink: F) -> ShamrockResult<u64>
where
    F: FnOnce() -> ShamrockResult<Box<dyn Sink>>,
{
    let corpora = corpus_files(folder)?;
    let mut sink = open_sink()?;

    let mut total = 0;
    for corpus in &corpora {
        debug!(corpus = %corpus.display(), %algorithm, "hashing corpus");

        match table::build_file(corpus, algorithm, sink.as_mut()) {
            Ok(entries) => total += entries,
            Err(err) => {
                // TODO: decide whether a failed run should delete the
                // artifact instead of closing it with the entries hashed so
                // far.
                let _ = sink.close();
                return Err(err);
            }
        }
    }
    sink.close()?;

    info!(total, corpora = corpora.len(), "batch finished");

    Ok(total)
}

/// Collects the corpus files directly inside `folder`, sorted by name.
fn corpus_files(folder: &Path) -> ShamrockResult<Vec<PathBuf>> {
    let mut corpora = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(CORPUS_EXTENSION) {
            corpora.push(path);
        }
    }

    corpora.sort();

    Ok(corpora)
}
