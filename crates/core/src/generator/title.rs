use super::matcher::{capitalize_first, strip_filler_prefix};
use super::rules::{
    DEFAULT_TITLE, OPENING_MARKS, SENTENCE_TERMINATORS, TITLE_FILLER_PREFIXES, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};

/// Derives the page title from the first sentence of the problem statement.
///
/// Falls back to [`DEFAULT_TITLE`] when the cleaned sentence is too short or
/// too long to read as a heading. Sentence splitting drops the closing `?`
/// or `!`, so the matching opening mark is dropped as well.
pub fn derive_title(problem_or_goal: &str) -> String {
    let Some(sentence) = first_sentence(problem_or_goal) else {
        return DEFAULT_TITLE.to_string();
    };

    let sentence = sentence.trim_start_matches(OPENING_MARKS).trim_start();
    let title = capitalize_first(strip_filler_prefix(sentence, TITLE_FILLER_PREFIXES));
    let len = title.chars().count();
    if len > TITLE_MIN_CHARS && len < TITLE_MAX_CHARS {
        title
    } else {
        DEFAULT_TITLE.to_string()
    }
}

fn first_sentence(text: &str) -> Option<&str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentence_without_terminator() {
        assert_eq!(
            derive_title("Build an efficient management tool."),
            "Build an efficient management tool"
        );
    }

    #[test]
    fn test_short_statement_falls_back() {
        assert_eq!(derive_title("App"), DEFAULT_TITLE);
        assert_eq!(derive_title("Tiny app."), DEFAULT_TITLE);
    }

    #[test]
    fn test_long_statement_falls_back() {
        let long = "A very long problem statement that keeps going well beyond sixty characters";
        assert_eq!(derive_title(long), DEFAULT_TITLE);
    }

    #[test]
    fn test_length_bounds_are_exclusive() {
        // exactly 10 characters
        assert_eq!(derive_title("Abcdefghij"), DEFAULT_TITLE);
        assert_eq!(derive_title("Abcdefghijk"), "Abcdefghijk");
        let sixty = "A".repeat(60);
        assert_eq!(derive_title(&sixty), DEFAULT_TITLE);
        let fifty_nine = "A".repeat(59);
        assert_eq!(derive_title(&fifty_nine), fifty_nine);
    }

    #[test]
    fn test_skips_empty_leading_segments() {
        assert_eq!(
            derive_title("...!  Organize your weekly meals? Then shop."),
            "Organize your weekly meals"
        );
    }

    #[test]
    fn test_strips_filler_prefix_and_capitalizes() {
        assert_eq!(
            derive_title("Necesitamos una aplicación simple para gestionar tareas diarias."),
            "Una aplicación simple para gestionar tareas diarias"
        );
        assert_eq!(
            derive_title("The problem is: teams lose track of invoices"),
            "Teams lose track of invoices"
        );
    }

    #[test]
    fn test_inverted_question_mark_is_dropped() {
        assert_eq!(
            derive_title("¿Cómo organizamos las reuniones del equipo?"),
            "Cómo organizamos las reuniones del equipo"
        );
    }

    #[test]
    fn test_prefix_after_opening_mark_is_stripped() {
        assert_eq!(
            derive_title("¡Queremos vender pan artesanal en línea!"),
            "Vender pan artesanal en línea"
        );
    }

    #[test]
    fn test_only_punctuation_falls_back() {
        assert_eq!(derive_title("?!."), DEFAULT_TITLE);
        assert_eq!(derive_title(""), DEFAULT_TITLE);
    }
}
