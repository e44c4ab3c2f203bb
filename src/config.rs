//! Run configuration, fixed once at startup.

use crate::cli::Cli;
use crate::version::Version;
use std::path::PathBuf;

pub const DEFAULT_MARKDOWN_FILE: &str = "README.md";
pub const DEFAULT_HTML_FULL_FILE: &str = "README_SVN.html";
pub const DEFAULT_HTML_FRAGMENT_FILE: &str = "README.html";
pub const DEFAULT_PANDOC: &str = "pandoc";
pub const DEFAULT_STYLESHEET: &str = "https://cdn.rawgit.com/wdbm/style/master/SS/newswire.css";

/// Oldest Pandoc release known to produce the expected document layout.
pub const MINIMUM_PANDOC_VERSION: &str = "1.12.2.1";

/// Everything a compilation run needs. Built once and passed by reference to
/// each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub markdown_file: PathBuf,
    pub html_full_file: PathBuf,
    pub html_fragment_file: PathBuf,
    pub pandoc: String,
    pub minimum_version: Version,
    pub stylesheet: String,
}

fn minimum_pandoc_version() -> Version {
    MINIMUM_PANDOC_VERSION
        .parse()
        .expect("MINIMUM_PANDOC_VERSION is a valid version")
}

/// Expands `$VAR` and `${VAR}` references in a path. Undefined variables
/// leave the path as written.
fn expand_path(path: PathBuf) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path;
    };

    match shellexpand::env(text) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(err) => {
            log::debug!("Leaving {} unexpanded: {}", path.display(), err);
            path
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            markdown_file: PathBuf::from(DEFAULT_MARKDOWN_FILE),
            html_full_file: PathBuf::from(DEFAULT_HTML_FULL_FILE),
            html_fragment_file: PathBuf::from(DEFAULT_HTML_FRAGMENT_FILE),
            pandoc: DEFAULT_PANDOC.to_string(),
            minimum_version: minimum_pandoc_version(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let Cli {
            markdown_file,
            html_full_file,
            html_fragment_file,
            pandoc,
            stylesheet,
        } = cli;

        Config {
            markdown_file: expand_path(markdown_file),
            html_full_file: expand_path(html_full_file),
            html_fragment_file: expand_path(html_fragment_file),
            pandoc,
            minimum_version: minimum_pandoc_version(),
            stylesheet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.markdown_file, PathBuf::from("README.md"));
        assert_eq!(config.html_full_file, PathBuf::from("README_SVN.html"));
        assert_eq!(config.html_fragment_file, PathBuf::from("README.html"));
        assert_eq!(config.pandoc, "pandoc");
        assert_eq!(config.stylesheet, DEFAULT_STYLESHEET);
        assert_eq!(config.minimum_version.to_string(), "1.12.2.1");
    }

    #[test]
    fn cli_without_arguments_yields_defaults() {
        let cli = Cli::try_parse_from(["compile-docs"]).unwrap();
        assert_eq!(Config::from(cli), Config::default());
    }

    #[test]
    fn cli_overrides_paths() {
        let cli = Cli::try_parse_from([
            "compile-docs",
            "--markdown-file",
            "docs/guide.md",
            "--html-full-file",
            "out/full.html",
            "--html-fragment-file",
            "out/fragment.html",
        ])
        .unwrap();
        let config = Config::from(cli);

        assert_eq!(config.markdown_file, PathBuf::from("docs/guide.md"));
        assert_eq!(config.html_full_file, PathBuf::from("out/full.html"));
        assert_eq!(config.html_fragment_file, PathBuf::from("out/fragment.html"));
    }

    #[test]
    fn expands_environment_variables_in_paths() {
        let home = std::env::var("HOME").unwrap_or_default();
        if home.is_empty() {
            return;
        }
        let expanded = expand_path(PathBuf::from("$HOME/README.md"));
        assert_eq!(expanded, PathBuf::from(format!("{home}/README.md")));
    }

    #[test]
    fn undefined_variables_are_left_as_written() {
        let path = PathBuf::from("$COMPILE_DOCS_SURELY_UNDEFINED_VAR/README.md");
        assert_eq!(expand_path(path.clone()), path);
    }
}
