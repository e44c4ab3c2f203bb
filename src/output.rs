//! Whole-file writes for the generated artifacts.

use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tempfile::Builder as TempFileBuilder;

/// Replaces the contents of `path` with `contents`.
///
/// The bytes go to a temporary sibling first and are then renamed over
/// `path`, so an interrupted write never leaves a truncated artifact behind.
pub fn write_file(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = TempFileBuilder::new()
        .prefix(".compile-docs-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .with_context(|| {
            format!(
                "Failed to create temporary file in {}",
                parent_dir.display()
            )
        })?;

    temp_file
        .write_all(contents)
        .with_context(|| "Failed to write to temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write output file {}", path.display()))?;

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn overwrites_existing_content() {
        let temp = assert_fs::TempDir::new().unwrap();
        let target = temp.child("README.html");
        target.write_str("stale content that is longer than the new one\n").unwrap();

        write_file(target.path(), b"<p>fresh</p>\n").unwrap();

        target.assert("<p>fresh</p>\n");
    }

    #[test]
    fn leaves_no_temporary_files_behind() {
        let temp = assert_fs::TempDir::new().unwrap();
        let target = temp.child("README_SVN.html");

        write_file(target.path(), b"<html></html>\n").unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(".compile-docs-"))
            .collect();
        assert!(leftovers.is_empty(), "left behind: {leftovers:?}");
        target.assert(predicate::path::exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let target = temp.child("no/such/dir/README.html");

        let err = write_file(target.path(), b"x").unwrap_err();
        assert!(err.to_string().contains("Failed to create temporary file"));
    }
}
