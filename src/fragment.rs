//! Derives the embeddable fragment from a complete HTML document.
//!
//! Derivation is purely textual. Every line mentioning one of
//! [`BOILERPLATE_MARKERS`] is dropped, then [`CSS_BLOCK`] is spliced in at the
//! first `</style>` of what remains.

use crate::config::Config;
use crate::error::CompileError;
use crate::output::write_file;
use anyhow::Context;
use regex::bytes::{NoExpand, Regex};
use std::fs;
use std::sync::LazyLock;

/// Substrings identifying the structural lines of a standalone page.
pub const BOILERPLATE_MARKERS: [&str; 10] = [
    "!DOCTYPE html",
    "<html",
    "<head",
    "<meta",
    "<title",
    "<link rel",
    "</head>",
    "<body>",
    "</body>",
    "</html>",
];

pub const STYLE_CLOSE: &str = "</style>";

/// Replaces the first [`STYLE_CLOSE`]: closes the existing style element and
/// opens a second one with the rules the hosting page lacks.
pub const CSS_BLOCK: &str = r#"
</style>
<style>
pre{
    border-radius: 0.5em;
    border-left: 1px solid #000000;
    border-right: 1px solid #000000;
    border-top: 1px solid #000000;
    border-bottom: 1px solid #000000;
    background: #F9F9F9;
    color: #000000;
    padding: 1.5em;
}

/* list point formatting */

.img-rounded{
    -webkit-border-radius: 6px;
    -moz-border-radius: 6px;
    border-radius: 6px;
}

.img-polaroid{
    padding: 4px;
    background-color: #ffffff;
    border: 1px solid #cccccc;
    border:1px solid rgba(0, 0, 0, 0.2);
    -webkit-box-shadow:0 1px 3px rgba(0, 0, 0, 0.1);
    -moz-box-shadow:0 1px 3px rgba(0, 0, 0, 0.1);
    box-shadow:0 1px 3px rgba(0, 0, 0, 0.1);
}

.img-circle{
    -webkit-border-radius: 500px;
    -moz-border-radius: 500px;
    border-radius: 500px;
}

/* tables */

/* left margin on pages */
.container,
.navbar-static-top .container,
.navbar-fixed-top .container,
.navbar-fixed-bottom
.container{
    width: 940px;
}
.container{
    margin-right: auto;
    margin-left:auto;
    *zoom: 1;
}
.container:before,.container:after{
    display: table;
    content: "";
    line-height: 0;
}

/* remove unnecessary border spacings */
table{
    max-width: 100%;
    background-color: transparent;
    border-collapse: collapse;
    border-spacing:0;
}

/* extend tables across the full page width, rather than limiting them to the
 * minimum size */
.table{
    width: 100%;
    margin-bottom: 21px;
}
.table th,
.table td{
    padding: 8px;
    line-height: 21px;
    text-align: left;
    vertical-align: top;
    border-top: 1px solid #dddddd;
}

/* thin table top border */
.table caption+thead tr: first-child th,
.table caption+thead tr:first-child td,
.table colgroup+thead tr:first-child th,
.table colgroup+thead tr:first-child td,
.table thead:first-child tr:first-child th,
.table thead:first-child tr:first-child td{
    border-top: 0;
}

.table-bordered th,
.table-bordered td{
    border-left:1px solid #000000;
}

/* table alternating line colours */
.table-striped tbody tr:nth-child(odd) td,
.table-striped tbody tr:nth-child(odd) th{
    background-color: #f9f9f9;
}

table{
    width: 100%;
    margin-bottom: 21px;
    max-width: 100%;
    background-color: transparent;
    border-collapse: collapse;
    border-spacing:0;
    /* table bordered */
    border:1px solid #000000;
    border-collapse:separate;
    *border-collapse:collapse;
    border-left:0;
    -webkit-border-radius:4px;
    -moz-border-radius:4px;
    border-radius:4px;
}

th,
td{
    padding: 8px;
    line-height: 21px;
    text-align: left;
    vertical-align: top;
    border-top: 1px solid #dddddd;
    border-left: 1px solid #000000;
}

/* table alternating line colours */
tbody tr:nth-child(odd) td,
tbody tr:nth-child(odd) th{
    background-color: #f9f9f9;
}
</style>
    "#;

static BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BOILERPLATE_MARKERS
        .iter()
        .map(|marker| regex::escape(marker))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("boilerplate markers form a valid pattern")
});

static STYLE_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&regex::escape(STYLE_CLOSE)).expect("style close tag is a valid pattern")
});

fn lines(html: &[u8]) -> impl Iterator<Item = &[u8]> {
    html.split_inclusive(|&byte| byte == b'\n')
}

pub fn is_boilerplate(line: &[u8]) -> bool {
    BOILERPLATE_RE.is_match(line)
}

/// Drops boilerplate lines, keeping the rest in order with their original
/// line terminators. The document need not be valid UTF-8.
pub fn strip_boilerplate(html: &[u8]) -> Vec<u8> {
    lines(html)
        .filter(|line| !is_boilerplate(line))
        .flatten()
        .copied()
        .collect()
}

/// Splices [`CSS_BLOCK`] in place of the first `</style>` only. Input without
/// a closing style tag comes back unchanged.
pub fn inject_css(html: &[u8]) -> Vec<u8> {
    if !STYLE_CLOSE_RE.is_match(html) {
        log::warn!("No {STYLE_CLOSE} found in the document; extra CSS was not added.");
        return html.to_vec();
    }
    STYLE_CLOSE_RE
        .replacen(html, 1, NoExpand(CSS_BLOCK.as_bytes()))
        .into_owned()
}

pub fn derive_fragment_bytes(html: &[u8]) -> Vec<u8> {
    inject_css(&strip_boilerplate(html))
}

/// Reads `config.html_full_file` and writes the derived fragment to
/// `config.html_fragment_file`.
pub fn derive_fragment(config: &Config) -> anyhow::Result<()> {
    let input = &config.html_full_file;
    if !input.is_file() {
        return Err(CompileError::MissingInput(input.clone()).into());
    }

    let html = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let kept = strip_boilerplate(&html);
    log::debug!(
        "Kept {} of {} lines from {}",
        lines(&kept).count(),
        lines(&html).count(),
        input.display()
    );

    write_file(&config.html_fragment_file, &inject_css(&kept))
}
