use anyhow::{Context, Result};
use tracing::info;

use shamrock_core::{table, ArtifactFormat};

use crate::{with_default_extension, Build};

pub fn build(args: Build) -> Result<()> {
    let format = ArtifactFormat::from(args.format);
    let output = with_default_extension(&args.output, format.extension());

    let mut sink = format
        .open(&output)
        .with_context(|| format!("Unable to open the rainbow table {}", output.display()))?;

    let entries = table::build_file(&args.wordlist, args.algorithm.into(), sink.as_mut())
        .with_context(|| format!("Unable to hash the wordlist {}", args.wordlist.display()))?;

    sink.close()
        .context("Unable to finalize the rainbow table")?;

    info!(entries, table = %output.display(), "rainbow table built");

    Ok(())
}
