//! Rule-based generator turning an [`AnswerSet`] into a [`UiConfiguration`].
//!
//! The output is a pure function of the five answers. Every literal the
//! generator can emit lives in [`rules`].

mod color;
mod components;
mod cta;
mod matcher;
pub mod rules;
mod title;

use tracing::debug;

use crate::domain::{AnswerSet, Layout, Theme, UiConfiguration};

pub use color::infer_primary_color;
pub use cta::clean_call_to_action;
pub use matcher::{contains_keyword, find_keyword};
pub use title::derive_title;

use rules::COMPONENT_RULES;

/// Builds the configuration for `answers`.
///
/// Components are always ordered heading, text, then the triggered
/// conditional components in [`COMPONENT_RULES`] order, then the button.
pub fn generate(answers: &AnswerSet) -> UiConfiguration {
    let primary_color = infer_primary_color(&answers.atmosphere);

    let mut nodes = Vec::with_capacity(COMPONENT_RULES.len() + 3);
    nodes.push(components::heading(derive_title(&answers.problem_or_goal)));
    nodes.push(components::description());

    for rule in COMPONENT_RULES {
        if let Some(keyword) = find_keyword(rule.source.read(answers), rule.keywords) {
            debug!(component = rule.id, keyword, "Conditional component triggered");
            nodes.push((rule.build)());
        }
    }

    nodes.push(components::button(
        clean_call_to_action(&answers.call_to_action),
        primary_color,
    ));

    UiConfiguration {
        layout: Layout::SingleColumn,
        theme: Theme::Minimal,
        primary_color: primary_color.to_string(),
        components: nodes,
    }
}
