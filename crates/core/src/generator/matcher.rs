//! Text helpers shared by the generator steps.

/// Suffix marking a keyword as a stem that also matches longer words.
pub const STEM_MARKER: char = '*';

/// Returns the first keyword that matches a word of `text`, ignoring case.
///
/// Words are split at every non-alphanumeric character, so accented letters
/// stay inside their word. A plain keyword must equal the whole word; a
/// keyword ending in [`STEM_MARKER`] matches any word starting with it. The
/// returned keyword has the marker removed.
pub fn find_keyword<'k>(text: &str, keywords: &[&'k str]) -> Option<&'k str> {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .find_map(|word| {
            keywords
                .iter()
                .copied()
                .find(|keyword| keyword_matches(word, keyword))
        })
        .map(|keyword| keyword.trim_end_matches(STEM_MARKER))
}

pub fn contains_keyword(text: &str, keywords: &[&str]) -> bool {
    find_keyword(text, keywords).is_some()
}

fn keyword_matches(word: &str, keyword: &str) -> bool {
    match keyword.strip_suffix(STEM_MARKER) {
        Some(stem) => word.starts_with(stem),
        None => word == keyword,
    }
}

/// Trims `text` and strips the first matching filler prefix together with
/// the separators it leaves behind.
///
/// Text that starts with no filler prefix is only trimmed.
pub fn strip_filler_prefix<'a>(text: &'a str, prefixes: &[&str]) -> &'a str {
    let text = text.trim();
    prefixes
        .iter()
        .find_map(|prefix| strip_prefix_ignore_case(text, prefix))
        .map_or(text, |rest| {
            rest.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | ',' | '-'))
        })
}

/// Case-insensitive `strip_prefix` that only matches whole words.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    let mut end = 0;
    for expected in prefix.chars() {
        let (idx, c) = chars.next()?;
        if !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end = idx + c.len_utf8();
    }

    let rest = &text[end..];
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() => None,
        _ => Some(rest),
    }
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_keyword_matches_word_prefix() {
        assert!(contains_keyword("Colores azules", &["azul*"]));
        assert!(contains_keyword("Un FORMULARIO simple", &["formulario*"]));
        assert_eq!(find_keyword("tabla y listas", &["tabla", "lista*"]), Some("tabla"));
        assert_eq!(find_keyword("listas", &["lista*"]), Some("lista"));
    }

    #[test]
    fn test_plain_keyword_needs_whole_word() {
        assert!(contains_keyword("Bold red accents", &["red"]));
        assert!(!contains_keyword("bordes redondeados y redes sociales", &["red"]));
        assert!(!contains_keyword("Un formulario", &["form"]));
    }

    #[test]
    fn test_keyword_ignores_inner_substrings() {
        assert!(!contains_keyword("a colored, bored layout", &["red*"]));
        assert!(!contains_keyword("transform", &["form*"]));
    }

    #[test]
    fn test_keyword_handles_accents_and_punctuation() {
        assert!(contains_keyword("Gráfico/icono", &["icono*"]));
        assert!(contains_keyword("(energía)", &["energía"]));
        assert!(contains_keyword("Ambiente CÁLIDO", &["cálid*"]));
    }

    #[test]
    fn test_strip_filler_prefix_case_insensitively() {
        let prefixes = &["the action is", "i want"];
        assert_eq!(strip_filler_prefix("The Action Is: sign up", prefixes), "sign up");
        assert_eq!(strip_filler_prefix("  I want a tool ", prefixes), "a tool");
    }

    #[test]
    fn test_separators_are_kept_without_prefix() {
        assert_eq!(strip_filler_prefix(" - Sign up now ", &["i want"]), "- Sign up now");
        assert_eq!(strip_filler_prefix("¡Regístrate!", &["i want"]), "¡Regístrate!");
    }

    #[test]
    fn test_strip_filler_prefix_requires_word_boundary() {
        assert_eq!(strip_filler_prefix("iwantless", &["i want"]), "iwantless");
        assert_eq!(strip_filler_prefix("Quierosa", &["quiero"]), "Quierosa");
    }

    #[test]
    fn test_strip_filler_prefix_with_multibyte_prefix() {
        assert_eq!(
            strip_filler_prefix("LA ACCIÓN ES descargar la app", &["la acción es"]),
            "descargar la app"
        );
    }

    #[test]
    fn test_prefix_only_is_empty() {
        assert_eq!(strip_filler_prefix("I want", &["i want"]), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("éxito"), "Éxito");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("¡hola!"), "¡hola!");
        assert_eq!(capitalize_first("already Upper"), "Already Upper");
    }
}
