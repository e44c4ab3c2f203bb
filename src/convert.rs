//! Full-document conversion: Markdown in, complete HTML page out.

use crate::config::Config;
use crate::error::CompileError;
use crate::output::write_file;
use anyhow::Context;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Arguments passed to Pandoc: link `stylesheet` and read `input`.
pub fn converter_args(stylesheet: &str, input: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-c"),
        OsString::from(stylesheet),
        input.as_os_str().to_os_string(),
    ]
}

/// Runs `converter` (the executable found during preflight) on
/// `config.markdown_file` and stores its standard output in
/// `config.html_full_file`.
pub fn convert_full_document(config: &Config, converter: &Path) -> anyhow::Result<()> {
    let input = &config.markdown_file;
    if !input.is_file() {
        return Err(CompileError::MissingInput(input.clone()).into());
    }

    let args = converter_args(&config.stylesheet, input);
    log::debug!("Running {} {:?}", converter.display(), args);

    let output = Command::new(converter)
        .args(&args)
        .output()
        .with_context(|| format!("Failed to run {}", converter.display()))?;

    if !output.status.success() {
        return Err(CompileError::ConverterFailed {
            program: converter.display().to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    write_file(&config.html_full_file, &output.stdout)
}
