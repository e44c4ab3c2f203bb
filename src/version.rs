//! Loose, dotted-numeric version numbers.
//!
//! Version strings are split into runs of digits and runs of letters; every
//! other character (usually `.`) only separates components. Two versions are
//! ordered component by component, with numbers compared numerically, so
//! `1.9` sorts below `1.12` and `1.12.2.1` below `1.13.0`.

use crate::error::CompileError;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static COMPONENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+|[A-Za-z]+").expect("version component pattern is valid")
});

/// A single piece of a version string.
///
/// Numbers sort below letters when both occur at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Component {
    Number(u64),
    Alpha(String),
}

/// A parsed version, remembering the text it was read from.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    components: Vec<Component>,
}

impl Version {
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl FromStr for Version {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let components = COMPONENT_RE
            .find_iter(raw)
            .map(|m| {
                let text = m.as_str();
                if text.as_bytes()[0].is_ascii_digit() {
                    text.parse::<u64>()
                        .map(Component::Number)
                        .map_err(|_| CompileError::InvalidVersion(raw.to_string()))
                } else {
                    Ok(Component::Alpha(text.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if components.is_empty() {
            return Err(CompileError::InvalidVersion(raw.to_string()));
        }

        Ok(Version {
            raw: raw.to_string(),
            components,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("1.12.2.1", "1.13.0")]
    #[case("1.9", "1.12")]
    #[case("1.12.2", "1.12.2.1")]
    #[case("1.13", "1.13.0")]
    #[case("1.12.2.1", "2.19.2")]
    #[case("2.9.2.1", "3.1.2")]
    #[case("3.1", "3.1a")]
    fn orders_versions_numerically(#[case] lower: &str, #[case] higher: &str) {
        assert!(v(lower) < v(higher), "{lower} should sort below {higher}");
        assert!(v(higher) > v(lower));
    }

    #[test]
    fn equal_versions_compare_equal() {
        assert_eq!(v("1.12.2.1"), v("1.12.2.1"));
        assert_eq!(v("1.12.2.1").cmp(&v("1.12.2.1")), Ordering::Equal);
    }

    #[test]
    fn plain_string_order_is_not_used() {
        // "10" < "9" as strings, but not as versions.
        assert!(v("10.0") > v("9.0"));
    }

    #[test]
    fn splits_letters_from_digits() {
        assert_eq!(
            v("3.1.1rc2").components(),
            &[
                Component::Number(3),
                Component::Number(1),
                Component::Number(1),
                Component::Alpha("rc".to_string()),
                Component::Number(2),
            ]
        );
    }

    #[test]
    fn display_keeps_original_text() {
        assert_eq!(v(" 2.19.2\n").to_string(), "2.19.2");
    }

    #[rstest]
    #[case("")]
    #[case("...")]
    #[case("   ")]
    fn rejects_strings_without_components(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Version>(),
            Err(CompileError::InvalidVersion(_))
        ));
    }
}
