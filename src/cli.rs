//! Defines the command-line interface for the application.

use crate::config::{
    DEFAULT_HTML_FRAGMENT_FILE, DEFAULT_HTML_FULL_FILE, DEFAULT_MARKDOWN_FILE, DEFAULT_PANDOC,
    DEFAULT_STYLESHEET,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "compile-docs",
    version,
    about = "Compile Markdown documentation to standalone and embeddable HTML using Pandoc."
)]
pub struct Cli {
    /// The Markdown file to compile.
    #[arg(
        long,
        alias = "MarkdownFileName",
        value_name = "FILE",
        default_value = DEFAULT_MARKDOWN_FILE
    )]
    pub markdown_file: PathBuf,

    /// Where to write the complete HTML document (doctype, head and body included).
    #[arg(
        long,
        alias = "HTMLSVNFileName",
        value_name = "FILE",
        default_value = DEFAULT_HTML_FULL_FILE
    )]
    pub html_full_file: PathBuf,

    /// Where to write the embeddable HTML fragment.
    #[arg(
        long,
        alias = "HTMLGitFileName",
        value_name = "FILE",
        default_value = DEFAULT_HTML_FRAGMENT_FILE
    )]
    pub html_fragment_file: PathBuf,

    /// The Pandoc executable to run, either a name looked up on PATH or a path.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_PANDOC)]
    pub pandoc: String,

    /// URL of the stylesheet linked from the complete HTML document.
    #[arg(long, value_name = "URL", default_value = DEFAULT_STYLESHEET)]
    pub stylesheet: String,
}
