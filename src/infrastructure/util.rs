use crate::application::ports::util::{NormalizeOptions, SlugNormalizer};

/// Lowercases text and joins its words with `-`.
///
/// Letters outside ASCII survive unless `strip_diacritics` (transliterate with
/// the `slug` crate) or `strip_non_ascii` (drop them) is set.
#[derive(Default, Clone)]
pub struct DefaultSlugNormalizer;

impl SlugNormalizer for DefaultSlugNormalizer {
    fn normalize(&self, input: &str, options: &NormalizeOptions) -> String {
        let input: String = if options.strip_non_ascii {
            input.chars().filter(char::is_ascii).collect()
        } else {
            input.to_string()
        };

        let text = if options.strip_diacritics {
            slug::slugify(&input)
        } else {
            join_words(&input)
        };

        truncate(&text, options.max_length)
    }
}

fn join_words(input: &str) -> String {
    input
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    cut.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(input: &str, options: &NormalizeOptions) -> String {
        DefaultSlugNormalizer.normalize(input, options)
    }

    #[test]
    fn joins_lowercase_words() {
        let options = NormalizeOptions::default();
        assert_eq!(normalize("Test post", &options), "test-post");
        assert_eq!(normalize("  Hello,   World! ", &options), "hello-world");
        assert_eq!(normalize("-.-", &options), "");
    }

    #[test]
    fn keeps_diacritics_and_non_ascii_by_default() {
        let options = NormalizeOptions::default();
        assert!(normalize("¡Feliz año!", &options).contains('ñ'));
        assert_eq!(
            normalize("katakana: ゲコゴサザシジ", &options),
            "katakana-ゲコゴサザシジ"
        );
    }

    #[test]
    fn strips_diacritics_when_asked() {
        let options = NormalizeOptions {
            strip_diacritics: true,
            ..NormalizeOptions::default()
        };
        let text = normalize("¡Feliz año!", &options);
        assert!(!text.contains('ñ'));
        assert_eq!(text, "feliz-ano");
    }

    #[test]
    fn strips_non_ascii_when_asked() {
        let options = NormalizeOptions {
            strip_non_ascii: true,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize("katakana: ゲコゴサザシジ", &options), "katakana");
    }

    #[test]
    fn truncates_on_character_boundaries() {
        let options = NormalizeOptions {
            max_length: 10,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize(&"a".repeat(11), &options).len(), 10);

        let unicode = format!("{}{}", "ё".repeat(5), "ю".repeat(6));
        let text = normalize(&unicode, &options);
        assert_eq!(text.chars().count(), 10);
        assert_eq!(text.chars().last(), Some('ю'));
    }

    #[test]
    fn truncation_does_not_leave_a_trailing_separator() {
        let options = NormalizeOptions {
            max_length: 5,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize("abcd efgh", &options), "abcd");
    }
}
