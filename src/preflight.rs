//! Checks that must pass before any conversion work starts: the converter
//! has to be installed and recent enough.

use crate::error::CompileError;
use crate::version::Version;
use anyhow::Context;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    let pathext = env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT;.COM".to_string());
    let mut found = vec![dir.join(program)];
    found.extend(
        pathext
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| dir.join(format!("{program}{ext}"))),
    );
    found
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

/// Resolves `program` against the directories listed in `search_path`.
///
/// A program name that already contains a path separator is checked as-is.
pub fn find_executable_in(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let as_path = Path::new(program);
    if as_path.components().count() > 1 {
        return is_executable(as_path).then(|| as_path.to_path_buf());
    }

    let search_path = search_path?;
    env::split_paths(search_path)
        .filter_map(|dir| {
            let dir = dir.to_string_lossy().trim_matches('"').to_string();
            (!dir.is_empty()).then(|| PathBuf::from(dir))
        })
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| is_executable(candidate))
}

/// Resolves `program` against the `PATH` of the current process.
pub fn find_executable(program: &str) -> Option<PathBuf> {
    find_executable_in(program, env::var_os("PATH").as_deref())
}

pub fn ensure_program_available(program: &str) -> Result<PathBuf, CompileError> {
    let resolved =
        find_executable(program).ok_or_else(|| CompileError::ProgramNotFound(program.to_string()))?;
    log::debug!("Resolved {} to {}", program, resolved.display());
    Ok(resolved)
}

/// Extracts the version from `--version` output such as `pandoc 3.1.2\n...`:
/// the second word of the first line.
pub fn parse_version_output(output: &str) -> Result<Version, CompileError> {
    let first_line = output.lines().next().unwrap_or_default();
    let token = first_line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| CompileError::UnrecognizedVersion(first_line.to_string()))?;
    token.parse()
}

pub fn query_version(program: &Path) -> anyhow::Result<Version> {
    let output = Command::new(program)
        .arg("--version")
        .output()
        .with_context(|| format!("Failed to run {} --version", program.display()))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_version_output(&stdout)?)
}

/// Fails with [`CompileError::VersionTooOld`] when `installed` is below `minimum`.
pub fn check_minimum_version(
    program: &str,
    installed: &Version,
    minimum: &Version,
) -> Result<(), CompileError> {
    if installed < minimum {
        return Err(CompileError::VersionTooOld {
            program: program.to_string(),
            required: minimum.to_string(),
            found: installed.to_string(),
        });
    }
    Ok(())
}

/// The converter executable that passed preflight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    pub path: PathBuf,
    pub version: Version,
}

/// Runs both preflight checks. Later stages must run the returned `path`, so
/// the binary that gets used is the one whose version was checked.
pub fn run_checks(program: &str, minimum: &Version) -> anyhow::Result<Converter> {
    let path = ensure_program_available(program)?;
    let version = query_version(&path)?;
    check_minimum_version(program, &version, minimum)?;
    Ok(Converter { path, version })
}
