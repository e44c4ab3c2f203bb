//! Core library for compile-docs: turns a Markdown file into a standalone HTML
//! page and an embeddable HTML fragment with the help of Pandoc.
//!
//! A run has three stages, each reading the file the previous one wrote:
//!
//! 1. [`preflight`] makes sure Pandoc is installed and recent enough.
//! 2. [`convert`] has Pandoc render the Markdown into a complete page.
//! 3. [`fragment`] strips the page down to its body and adds extra CSS.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod fragment;
pub mod output;
pub mod preflight;
pub mod version;

use crate::cli::Cli;
use crate::config::Config;
use crate::version::Version;
use clap::Parser;
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub full_document: PathBuf,
    pub fragment: PathBuf,
    pub converter: PathBuf,
    pub converter_version: Version,
}

/// Runs every stage in order, stopping at the first failure.
pub fn compile(config: &Config) -> anyhow::Result<CompileReport> {
    let converter = preflight::run_checks(&config.pandoc, &config.minimum_version)?;
    log::info!("Using {} {}", converter.path.display(), converter.version);

    convert::convert_full_document(config, &converter.path)?;
    log::info!(
        "Compiled {} to {}",
        config.markdown_file.display(),
        config.html_full_file.display()
    );

    fragment::derive_fragment(config)?;
    log::info!(
        "Derived {} from {}",
        config.html_fragment_file.display(),
        config.html_full_file.display()
    );

    Ok(CompileReport {
        full_document: config.html_full_file.clone(),
        fragment: config.html_fragment_file.clone(),
        converter: converter.path,
        converter_version: converter.version,
    })
}

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let config = Config::from(Cli::parse());
    log::debug!("{config:?}");

    let report = compile(&config)?;
    log::info!(
        "Wrote {} and {} with {} {}",
        report.full_document.display(),
        report.fragment.display(),
        report.converter.display(),
        report.converter_version
    );
    Ok(())
}
