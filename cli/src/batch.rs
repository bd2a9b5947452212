use anyhow::{Context, Result};
use tracing::info;

use shamrock_core::ArtifactFormat;

use crate::{with_default_extension, Batch};

pub fn batch(args: Batch) -> Result<()> {
    let format = ArtifactFormat::from(args.format);
    let output = with_default_extension(&args.output, format.extension());

    let entries = shamrock_core::batch::run(&args.folder, args.algorithm.into(), || {
        format.open(&output)
    })
    .with_context(|| {
        format!(
            "Unable to hash the wordlists of the folder {}",
            args.folder.display()
        )
    })?;

    info!(entries, table = %output.display(), "rainbow table built");

    Ok(())
}
