use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use utoipa::ToSchema;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema, Hash)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    SingleColumn,
    TwoColumn,
    Centered,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleColumn => "single-column",
            Self::TwoColumn => "two-column",
            Self::Centered => "centered",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema, Hash)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Minimal,
    Modern,
    Classic,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Modern => "modern",
            Self::Classic => "classic",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, Hash)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Heading,
    Text,
    Input,
    Button,
    Image,
    List,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Text => "text",
            Self::Input => "input",
            Self::Button => "button",
            Self::Image => "image",
            Self::List => "list",
        }
    }
}

/// A single node of the generated page. Components are never nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct UiComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Heading or paragraph text, or an image caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Input placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Action identifier triggered by a button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// List entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    /// Presentational style properties, passed through to the renderer
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
}

impl UiComponent {
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: None,
            label: None,
            placeholder: None,
            action: None,
            items: None,
            styles: BTreeMap::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_styles(mut self, styles: &[(&str, &str)]) -> Self {
        self.styles.extend(
            styles
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        self
    }

    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(name.into(), value.into());
        self
    }

    fn check_payload(&self) -> Result<(), CoreError> {
        let missing = |field: &str| {
            CoreError::InvalidConfiguration(format!(
                "{} component '{}' is missing {}",
                self.kind.as_str(),
                self.id,
                field
            ))
        };

        match self.kind {
            ComponentKind::Heading | ComponentKind::Text | ComponentKind::Image => {
                self.content.as_ref().ok_or_else(|| missing("content"))?;
            }
            ComponentKind::Button => {
                self.label.as_ref().ok_or_else(|| missing("label"))?;
                self.action.as_ref().ok_or_else(|| missing("action"))?;
            }
            ComponentKind::Input => {
                self.placeholder.as_ref().ok_or_else(|| missing("placeholder"))?;
            }
            ComponentKind::List => match &self.items {
                Some(items) if !items.is_empty() => {}
                _ => return Err(missing("items")),
            },
        }
        Ok(())
    }
}

/// The generated page description handed to the preview renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct UiConfiguration {
    pub layout: Layout,
    pub theme: Theme,
    pub primary_color: String,
    pub components: Vec<UiComponent>,
}

impl UiConfiguration {
    pub fn component(&self, id: &str) -> Option<&UiComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn count_of(&self, kind: ComponentKind) -> usize {
        self.components.iter().filter(|c| c.kind == kind).count()
    }

    pub fn kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(|c| c.kind).collect()
    }

    /// Checks the configuration against the schema the renderer expects.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.components.is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "configuration has no components".to_string(),
            ));
        }

        if !is_hex_color(&self.primary_color) {
            return Err(CoreError::InvalidConfiguration(format!(
                "primary_color '{}' is not a hex color",
                self.primary_color
            )));
        }

        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                return Err(CoreError::InvalidConfiguration(format!(
                    "duplicate component id '{}'",
                    component.id
                )));
            }
            component.check_payload()?;
        }

        Ok(())
    }
}

/// Accepts `#rgb` and `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
