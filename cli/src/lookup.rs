use std::process;

use anyhow::{bail, Context, Result};

use shamrock_core::{lookup, ArtifactFormat};

use crate::Lookup;

pub fn lookup(args: Lookup) -> Result<()> {
    let Some(format) = ArtifactFormat::from_path(&args.table) else {
        bail!(
            "Unable to infer the format of {}: expected a .txt or .db rainbow table",
            args.table.display()
        );
    };

    let plaintext = lookup::find(&args.table, format, &args.digest)
        .with_context(|| format!("Unable to search the rainbow table {}", args.table.display()))?;

    if let Some(plaintext) = plaintext {
        println!("{plaintext}");
    } else {
        eprintln!("No plaintext found for the given digest");
        process::exit(1);
    }

    Ok(())
}
