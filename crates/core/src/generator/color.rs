use tracing::debug;

use super::matcher::find_keyword;
use super::rules::{COLOR_RULES, DEFAULT_PRIMARY_COLOR};

/// Picks the primary color from the atmosphere answer.
pub fn infer_primary_color(atmosphere: &str) -> &'static str {
    for rule in COLOR_RULES {
        if let Some(keyword) = find_keyword(atmosphere, rule.keywords) {
            debug!(rule = rule.name, keyword, color = rule.color, "Matched color rule");
            return rule.color;
        }
    }
    DEFAULT_PRIMARY_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::matcher::{contains_keyword, STEM_MARKER};

    #[test]
    fn test_color_names() {
        assert_eq!(infer_primary_color("Tonos azules y limpios"), "#2563eb");
        assert_eq!(infer_primary_color("Mucho verde, natural"), "#16a34a");
        assert_eq!(infer_primary_color("Bold RED accents"), "#dc2626");
        assert_eq!(infer_primary_color("naranja"), "#ea580c");
        assert_eq!(infer_primary_color("Púrpura suave"), "#9333ea");
    }

    #[test]
    fn test_moods() {
        assert_eq!(infer_primary_color("Corporate and serious"), "#1e40af");
        assert_eq!(infer_primary_color("Cálido y cercano"), "#d97706");
        assert_eq!(infer_primary_color("Elegante"), "#1f2937");
        assert_eq!(infer_primary_color("Que inspire confianza"), "#0f766e");
        assert_eq!(infer_primary_color("Dinámico"), "#e11d48");
    }

    #[test]
    fn test_color_names_win_over_moods() {
        assert_eq!(
            infer_primary_color("Ambiente profesional con colores verdes"),
            "#16a34a"
        );
    }

    #[test]
    fn test_rule_order_decides_between_colors() {
        assert_eq!(infer_primary_color("green and blue"), "#2563eb");
    }

    #[test]
    fn test_no_match_uses_default() {
        assert_eq!(infer_primary_color("Calm and minimal"), DEFAULT_PRIMARY_COLOR);
        assert_eq!(infer_primary_color("Colored and bored"), DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_short_color_names_need_whole_word() {
        assert_eq!(
            infer_primary_color("Ambiente moderno con bordes redondeados y redes sociales"),
            DEFAULT_PRIMARY_COLOR
        );
        assert_eq!(infer_primary_color("Bordes redondeados, tono cálido"), "#d97706");
        assert_eq!(infer_primary_color("Bluetooth friendly"), DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_calidad_is_not_warm() {
        assert_eq!(infer_primary_color("Alta calidad"), DEFAULT_PRIMARY_COLOR);
        assert_eq!(infer_primary_color("Ambiente calido"), "#d97706");
    }

    #[test]
    fn test_every_keyword_maps_to_its_rule_color() {
        for (index, rule) in COLOR_RULES.iter().enumerate() {
            for keyword in rule.keywords {
                let word = keyword.trim_end_matches(STEM_MARKER);
                let expected = COLOR_RULES[..index]
                    .iter()
                    .find(|earlier| contains_keyword(word, earlier.keywords))
                    .map_or(rule.color, |earlier| earlier.color);
                assert_eq!(infer_primary_color(word), expected, "{keyword}");
            }
        }
    }
}
