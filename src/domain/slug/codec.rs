//! Parsing and formatting of friendly-id strings.
//!
//! ```text
//! token      := numeric-id | name-token
//! name-token := name ["--" digit+]
//! ```
//!
//! A missing suffix means sequence 1. Nothing here normalizes text; callers
//! pass slug text that has already been through the normalizer.

use crate::domain::slug::value_objects::{SEQUENCE_SEPARATOR, Sequence};

/// A friendly-id token split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendlyId {
    pub name: String,
    pub sequence: Sequence,
}

impl FriendlyId {
    pub fn parse(token: &str) -> Self {
        let (name, sequence) = parse(token);
        Self {
            name: name.to_string(),
            sequence,
        }
    }
}

impl std::fmt::Display for FriendlyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format(&self.name, self.sequence))
    }
}

/// Split `token` into `(name, sequence)`.
///
/// The suffix after the last `--` counts as a sequence only when it is a run
/// of ASCII digits denoting a value of at least 1 and the name before it is
/// not empty. Anything else leaves the whole token as the name.
pub fn parse(token: &str) -> (&str, Sequence) {
    if let Some((name, suffix)) = token.rsplit_once(SEQUENCE_SEPARATOR) {
        if !name.is_empty() && is_digits(suffix) {
            if let Some(sequence) = suffix.parse::<u32>().ok().and_then(|n| Sequence::new(n).ok())
            {
                return (name, sequence);
            }
        }
    }
    (token, Sequence::FIRST)
}

pub fn format(name: &str, sequence: Sequence) -> String {
    if sequence.is_first() {
        name.to_string()
    } else {
        format!("{name}{SEQUENCE_SEPARATOR}{sequence}")
    }
}

/// Whether `token` reads as a raw primary key: ASCII digits only, no leading
/// zeros, positive and within `i64`.
pub fn numeric_id(token: &str) -> Option<i64> {
    if !is_digits(token) || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    token.parse::<i64>().ok().filter(|id| *id > 0)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
