use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use rusqlite::{Connection, OpenFlags, OptionalExtension};

use crate::{error::ShamrockResult, sink::ArtifactFormat};

/// Searches an existing artifact for the plaintext behind `digest_hex`.
///
/// The digest is matched as lowercase hexadecimal, so the input casing does
/// not matter. Returns `None` when the digest is not in the table; when the
/// table holds several plaintexts for the digest, any one of them can come
/// back.
pub fn find(
    path: &Path,
    format: ArtifactFormat,
    digest_hex: &str,
) -> ShamrockResult<Option<String>> {
    let digest_hex = digest_hex.to_ascii_lowercase();

    match format {
        ArtifactFormat::Text => find_in_text(path, &digest_hex),
        ArtifactFormat::Sqlite => find_in_sqlite(path, &digest_hex),
    }
}

/// Scans the flat file line by line until the digest matches.
fn find_in_text(path: &Path, digest_hex: &str) -> ShamrockResult<Option<String>> {
    let reader = BufReader::new(File::open(path)?);

    for line in reader.lines() {
        let line = line?;
        if let Some((digest, plaintext)) = line.split_once('\t') {
            if digest == digest_hex {
                return Ok(Some(plaintext.to_owned()));
            }
        }
    }

    Ok(None)
}

/// Queries the database through its digest index.
fn find_in_sqlite(path: &Path, digest_hex: &str) -> ShamrockResult<Option<String>> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let plaintext = conn
        .query_row(
            "SELECT plaintext FROM entries WHERE digest = ?1",
            [digest_hex],
            |row| row.get(0),
        )
        .optional()?;

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::find;
    use crate::{
        hash::HashAlgorithm,
        sink::{ArtifactFormat, Entry},
    };

    fn artifact_with(dir: &Path, format: ArtifactFormat, plaintexts: &[&str]) -> PathBuf {
        let path = dir.join("rainbow").with_extension(format.extension());

        let mut sink = format.open(&path).unwrap();
        for &plaintext in plaintexts {
            sink.write(Entry {
                digest: &HashAlgorithm::Md5.digest(plaintext.as_bytes()),
                plaintext,
            })
            .unwrap();
        }
        sink.close().unwrap();

        path
    }

    #[test]
    fn a_stored_digest_is_found_in_both_formats() {
        for format in [ArtifactFormat::Text, ArtifactFormat::Sqlite] {
            let dir = tempfile::tempdir().unwrap();
            let path = artifact_with(dir.path(), format, &["hello", "world"]);

            let plaintext = find(&path, format, "7d793037a0760186574b0282f2f435e7").unwrap();

            assert_eq!(Some("world".to_owned()), plaintext);
        }
    }

    #[test]
    fn an_uppercase_digest_is_still_found() {
        for format in [ArtifactFormat::Text, ArtifactFormat::Sqlite] {
            let dir = tempfile::tempdir().unwrap();
            let path = artifact_with(dir.path(), format, &["hello"]);

            let plaintext = find(&path, format, "5D41402ABC4B2A76B9719D911017C592").unwrap();

            assert_eq!(Some("hello".to_owned()), plaintext);
        }
    }

    #[test]
    fn an_unknown_digest_comes_back_empty() {
        for format in [ArtifactFormat::Text, ArtifactFormat::Sqlite] {
            let dir = tempfile::tempdir().unwrap();
            let path = artifact_with(dir.path(), format, &["hello"]);

            let plaintext = find(&path, format, &"0".repeat(32)).unwrap();

            assert_eq!(None, plaintext);
        }
    }

    #[test]
    fn a_missing_artifact_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.txt");

        assert!(find(&path, ArtifactFormat::Text, "00").is_err());
    }
}
