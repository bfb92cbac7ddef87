// src/application/ports/util.rs

/// Knobs for turning free text into slug text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Transliterate accented and other non-Latin letters to ASCII.
    pub strip_diacritics: bool,
    /// Drop every character outside ASCII before building the slug.
    pub strip_non_ascii: bool,
    /// Maximum length in characters.
    pub max_length: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip_diacritics: false,
            strip_non_ascii: false,
            max_length: 255,
        }
    }
}

pub trait SlugNormalizer: Send + Sync {
    fn normalize(&self, input: &str, options: &NormalizeOptions) -> String;
}
