//! Builders for each component kind the generator emits.

use super::rules::*;
use crate::domain::{ComponentKind, UiComponent};

pub fn heading(title: impl Into<String>) -> UiComponent {
    UiComponent::new(HEADING_ID, ComponentKind::Heading)
        .with_content(title)
        .with_styles(HEADING_STYLES)
}

pub fn description() -> UiComponent {
    UiComponent::new(DESCRIPTION_ID, ComponentKind::Text)
        .with_content(DESCRIPTION_TEXT)
        .with_styles(DESCRIPTION_STYLES)
}

pub fn input() -> UiComponent {
    UiComponent::new(INPUT_ID, ComponentKind::Input)
        .with_placeholder(INPUT_PLACEHOLDER)
        .with_styles(INPUT_STYLES)
}

pub fn list() -> UiComponent {
    UiComponent::new(LIST_ID, ComponentKind::List)
        .with_items(LIST_ITEMS)
        .with_styles(LIST_STYLES)
}

pub fn image() -> UiComponent {
    UiComponent::new(IMAGE_ID, ComponentKind::Image)
        .with_content(IMAGE_CAPTION)
        .with_styles(IMAGE_STYLES)
}

pub fn button(label: impl Into<String>, primary_color: &str) -> UiComponent {
    UiComponent::new(BUTTON_ID, ComponentKind::Button)
        .with_label(label)
        .with_action(PRIMARY_ACTION)
        .with_style("backgroundColor", primary_color)
        .with_styles(BUTTON_STYLES)
}
