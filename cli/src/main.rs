mod batch;
mod build;
mod generate;
mod lookup;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{value_parser, Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

use shamrock_core::{ArtifactFormat, HashAlgorithm, DEFAULT_CHARSET, DEFAULT_MAX_WORD_LENGTH};

use batch::batch;
use build::build;
use generate::generate;
use lookup::lookup;

/// All the hash algorithms supported.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl From<AlgorithmArg> for HashAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Md5 => HashAlgorithm::Md5,
            AlgorithmArg::Sha1 => HashAlgorithm::Sha1,
            AlgorithmArg::Sha256 => HashAlgorithm::Sha256,
            AlgorithmArg::Sha512 => HashAlgorithm::Sha512,
        }
    }
}

/// All the artifact formats supported.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// A flat file of digest-plaintext lines.
    Text,
    /// A SQLite database indexed on the digest.
    Sqlite,
}

impl From<FormatArg> for ArtifactFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ArtifactFormat::Text,
            FormatArg::Sqlite => ArtifactFormat::Sqlite,
        }
    }
}

/// Rainbow table application generating wordlists and hashing them into
/// searchable digest-to-plaintext tables.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug log output.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Generate(Generate),
    Build(Build),
    Batch(Batch),
    Lookup(Lookup),
}

/// Generate an exhaustive wordlist to be hashed later.
#[derive(Args)]
pub struct Generate {
    /// The file name of the wordlist. ".txt" is appended when no extension
    /// is given.
    wordlist: PathBuf,

    /// The maximum word length.
    #[arg(short = 'l', long, value_parser = value_parser!(u8).range(1..=16), default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    max_length: u8,

    /// The charset to use.
    #[arg(short, long, value_parser = check_charset, default_value_t = String::from_utf8_lossy(DEFAULT_CHARSET).to_string())]
    charset: String,
}

/// Hash a wordlist into a rainbow table.
#[derive(Args)]
pub struct Build {
    /// The wordlist file to hash.
    wordlist: PathBuf,

    /// The hash algorithm to apply to every word.
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Md5)]
    algorithm: AlgorithmArg,

    /// The file name of the rainbow table. The format extension is appended
    /// when no extension is given.
    #[arg(short, long, default_value = "rainbow")]
    output: PathBuf,

    /// The artifact format of the rainbow table.
    #[arg(short = 'F', long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
}

/// Hash every wordlist of a folder into a single rainbow table.
#[derive(Args)]
pub struct Batch {
    /// The folder containing the wordlists. Only ".txt" files directly
    /// inside it are hashed.
    folder: PathBuf,

    /// The hash algorithm to apply to every word.
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Md5)]
    algorithm: AlgorithmArg,

    /// The file name of the rainbow table. The format extension is appended
    /// when no extension is given.
    #[arg(short, long, default_value = "rainbow")]
    output: PathBuf,

    /// The artifact format of the rainbow table.
    #[arg(short = 'F', long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
}

/// Find the plaintext behind a digest in an existing rainbow table.
#[derive(Args)]
pub struct Lookup {
    /// The digest to look up, in hexadecimal.
    #[arg(value_parser = check_hex)]
    digest: String,

    /// The rainbow table to search. Its format is inferred from the file
    /// extension.
    table: PathBuf,
}

/// Checks if the charset is made of ASCII characters.
fn check_charset(charset: &str) -> Result<String> {
    if !charset.is_ascii() {
        bail!("The charset can only contain ASCII characters");
    }

    Ok(charset.to_owned())
}

/// Checks if the digest is valid hexadecimal.
fn check_hex(digest: &str) -> Result<String> {
    hex::decode(digest).context("The digest is not valid hexadecimal")?;

    Ok(digest.to_owned())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.commands {
        Commands::Generate(gen) => generate(gen)?,
        Commands::Build(bld) => build(bld)?,
        Commands::Batch(bat) => batch(bat)?,
        Commands::Lookup(lkp) => lookup(lkp)?,
    }

    Ok(())
}

/// Helper function appending `extension` to a path that has none.
fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}
