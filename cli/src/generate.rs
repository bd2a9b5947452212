use anyhow::{Context, Result};
use tracing::info;

use shamrock_core::{Alphabet, Wordlist, CORPUS_EXTENSION};

use crate::{with_default_extension, Generate};

pub fn generate(args: Generate) -> Result<()> {
    let alphabet = Alphabet::new(args.charset.as_bytes())?;
    let wordlist = Wordlist::new(alphabet, args.max_length as usize)?;
    let path = with_default_extension(&args.wordlist, CORPUS_EXTENSION);

    info!(words = wordlist.word_count(), "generating the wordlist");

    let words = wordlist
        .write_to(&path)
        .with_context(|| format!("Unable to write the wordlist to {}", path.display()))?;

    info!(words, path = %path.display(), "wordlist generated");

    Ok(())
}
