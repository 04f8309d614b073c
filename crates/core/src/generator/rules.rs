//! Constant tables driving the generator: keyword lists, literal copy,
//! component ids and style blocks.
//!
//! Keywords are lowercase whole words. A trailing `*` turns one into a stem,
//! so `azul*` also matches `azules` while `red` stays clear of `redondeados`.

use super::components;
use crate::domain::{AnswerSet, UiComponent};

pub const DEFAULT_TITLE: &str = "Solución Simple y Efectiva";
pub const DESCRIPTION_TEXT: &str =
    "Aquí encontrarás toda la información relevante para comenzar de forma rápida y sencilla.";
pub const INPUT_PLACEHOLDER: &str = "Ingresa tu información aquí...";
pub const LIST_ITEMS: [&str; 3] = [
    "Característica principal",
    "Beneficio clave",
    "Ventaja adicional",
];
pub const IMAGE_CAPTION: &str = "Imagen principal del producto";
pub const DEFAULT_CTA_LABEL: &str = "Comenzar";
pub const PRIMARY_ACTION: &str = "primary-action";
pub const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";

/// Titles must be strictly longer than this many characters.
pub const TITLE_MIN_CHARS: usize = 10;
/// Titles must be strictly shorter than this many characters.
pub const TITLE_MAX_CHARS: usize = 60;
pub const CTA_MAX_CHARS: usize = 50;

pub const HEADING_ID: &str = "main-heading";
pub const DESCRIPTION_ID: &str = "main-description";
pub const INPUT_ID: &str = "main-input";
pub const LIST_ID: &str = "features-list";
pub const IMAGE_ID: &str = "main-image";
pub const BUTTON_ID: &str = "cta-button";

pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
pub const OPENING_MARKS: [char; 2] = ['¿', '¡'];

pub const TITLE_FILLER_PREFIXES: &[&str] = &[
    "el problema es",
    "el objetivo es",
    "necesitamos",
    "necesito",
    "queremos",
    "quiero",
    "the problem is",
    "the goal is",
    "we need",
    "i need",
    "we want",
    "i want",
];

pub const CTA_FILLER_PREFIXES: &[&str] = &[
    "la acción es",
    "la accion es",
    "quiero que el usuario",
    "el usuario debe",
    "the action is",
    "i want the user to",
    "the user must",
    "the user should",
];

pub const INPUT_KEYWORDS: &[&str] = &[
    "formulario*",
    "form",
    "forms",
    "dato",
    "datos",
    "data",
    "email*",
    "correo*",
    "input*",
    "registr*",
    "informaci*",
    "information",
];

pub const LIST_KEYWORDS: &[&str] = &[
    "lista*",
    "list",
    "lists",
    "caracter*",
    "feature*",
    "beneficio*",
    "benefit*",
    "elemento*",
    "element*",
    "punto*",
    "point*",
];

pub const IMAGE_KEYWORDS: &[&str] = &[
    "imagen*",
    "imágen*",
    "image*",
    "foto*",
    "photo*",
    "gráfico*",
    "grafico*",
    "graphic*",
    "icono*",
    "icon*",
    "visual*",
];

pub const HEADING_STYLES: &[(&str, &str)] = &[("fontSize", "32px"), ("fontWeight", "bold")];
pub const DESCRIPTION_STYLES: &[(&str, &str)] = &[("lineHeight", "1.6"), ("marginBottom", "24px")];
pub const INPUT_STYLES: &[(&str, &str)] = &[
    ("padding", "12px"),
    ("border", "1px solid #d1d5db"),
    ("borderRadius", "6px"),
];
pub const LIST_STYLES: &[(&str, &str)] = &[("marginBottom", "24px")];
pub const IMAGE_STYLES: &[(&str, &str)] = &[
    ("borderRadius", "8px"),
    ("width", "100%"),
    ("height", "200px"),
];
/// `backgroundColor` is added per configuration from the primary color.
pub const BUTTON_STYLES: &[(&str, &str)] = &[
    ("color", "#ffffff"),
    ("padding", "12px 24px"),
    ("borderRadius", "6px"),
    ("fontSize", "16px"),
    ("fontWeight", "600"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    ProblemOrGoal,
    ContentElements,
    CallToAction,
    VisualElements,
    Atmosphere,
}

impl AnswerField {
    pub fn read(self, answers: &AnswerSet) -> &str {
        match self {
            Self::ProblemOrGoal => &answers.problem_or_goal,
            Self::ContentElements => &answers.content_elements,
            Self::CallToAction => &answers.call_to_action,
            Self::VisualElements => &answers.visual_elements,
            Self::Atmosphere => &answers.atmosphere,
        }
    }
}

/// A component emitted when `source` mentions any of `keywords`.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRule {
    pub id: &'static str,
    pub source: AnswerField,
    pub keywords: &'static [&'static str],
    pub build: fn() -> UiComponent,
}

/// Conditional components, in output order.
pub const COMPONENT_RULES: &[ComponentRule] = &[
    ComponentRule {
        id: INPUT_ID,
        source: AnswerField::ContentElements,
        keywords: INPUT_KEYWORDS,
        build: components::input,
    },
    ComponentRule {
        id: LIST_ID,
        source: AnswerField::ContentElements,
        keywords: LIST_KEYWORDS,
        build: components::list,
    },
    ComponentRule {
        id: IMAGE_ID,
        source: AnswerField::VisualElements,
        keywords: IMAGE_KEYWORDS,
        build: components::image,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ColorRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub color: &'static str,
}

/// Checked top to bottom against the atmosphere answer; first match wins.
/// Color names come before moods.
pub const COLOR_RULES: &[ColorRule] = &[
    ColorRule {
        name: "blue",
        keywords: &["azul*", "blue"],
        color: "#2563eb",
    },
    ColorRule {
        name: "green",
        keywords: &["verde*", "green"],
        color: "#16a34a",
    },
    ColorRule {
        name: "red",
        keywords: &["rojo*", "roja*", "red"],
        color: "#dc2626",
    },
    ColorRule {
        name: "orange",
        keywords: &["naranja*", "orange"],
        color: "#ea580c",
    },
    ColorRule {
        name: "purple",
        keywords: &["morado*", "morada*", "púrpura*", "purpura*", "violeta*", "purple"],
        color: "#9333ea",
    },
    ColorRule {
        name: "professional",
        keywords: &["profesional*", "professional*", "corporativ*", "corporate"],
        color: "#1e40af",
    },
    ColorRule {
        name: "warm",
        keywords: &[
            "cálid*", "calido", "calida", "calidos", "calidas", "acogedor*", "warm*", "cozy",
        ],
        color: "#d97706",
    },
    ColorRule {
        name: "elegant",
        keywords: &["elegant*", "sofisticad*", "sophisticated"],
        color: "#1f2937",
    },
    ColorRule {
        name: "trustworthy",
        keywords: &["confiable*", "confianza", "trust*"],
        color: "#0f766e",
    },
    ColorRule {
        name: "energetic",
        keywords: &[
            "enérgic*", "energetic", "energía", "energia", "energy", "dinámic*", "dinamic*", "dynamic*",
        ],
        color: "#e11d48",
    },
];
