use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CoreError;

/// The five answers a prototype is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AnswerSet {
    /// The main problem the product solves, or its goal
    pub problem_or_goal: String,
    /// Information the user must see
    pub content_elements: String,
    /// The most important action; becomes the button label
    pub call_to_action: String,
    /// Images, graphics or icons the page needs
    pub visual_elements: String,
    /// Tone and mood; only used to pick the primary color
    pub atmosphere: String,
}

impl AnswerSet {
    pub fn new(
        problem_or_goal: impl Into<String>,
        content_elements: impl Into<String>,
        call_to_action: impl Into<String>,
        visual_elements: impl Into<String>,
        atmosphere: impl Into<String>,
    ) -> Self {
        Self {
            problem_or_goal: problem_or_goal.into(),
            content_elements: content_elements.into(),
            call_to_action: call_to_action.into(),
            visual_elements: visual_elements.into(),
            atmosphere: atmosphere.into(),
        }
    }

    /// Field names paired with their values, in question order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("problem_or_goal", &self.problem_or_goal),
            ("content_elements", &self.content_elements),
            ("call_to_action", &self.call_to_action),
            ("visual_elements", &self.visual_elements),
            ("atmosphere", &self.atmosphere),
        ]
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in self.fields() {
            require_non_blank(field, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CreatePrototypeRequest {
    pub problem_or_goal: String,
    pub content_elements: String,
    pub call_to_action: String,
    pub visual_elements: String,
    pub atmosphere: String,
}

impl CreatePrototypeRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.clone().into_answers().validate()
    }

    pub fn into_answers(self) -> AnswerSet {
        AnswerSet {
            problem_or_goal: self.problem_or_goal,
            content_elements: self.content_elements,
            call_to_action: self.call_to_action,
            visual_elements: self.visual_elements,
            atmosphere: self.atmosphere,
        }
    }
}

impl From<AnswerSet> for CreatePrototypeRequest {
    fn from(answers: AnswerSet) -> Self {
        Self {
            problem_or_goal: answers.problem_or_goal,
            content_elements: answers.content_elements,
            call_to_action: answers.call_to_action,
            visual_elements: answers.visual_elements,
            atmosphere: answers.atmosphere,
        }
    }
}

/// Sparse update: absent fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct UpdatePrototypeRequest {
    pub problem_or_goal: Option<String>,
    pub content_elements: Option<String>,
    pub call_to_action: Option<String>,
    pub visual_elements: Option<String>,
    pub atmosphere: Option<String>,
}

impl UpdatePrototypeRequest {
    fn fields(&self) -> [(&'static str, Option<&String>); 5] {
        [
            ("problem_or_goal", self.problem_or_goal.as_ref()),
            ("content_elements", self.content_elements.as_ref()),
            ("call_to_action", self.call_to_action.as_ref()),
            ("visual_elements", self.visual_elements.as_ref()),
            ("atmosphere", self.atmosphere.as_ref()),
        ]
    }

    /// Whether any answer field is present.
    pub fn touches_answers(&self) -> bool {
        self.fields().iter().any(|(_, value)| value.is_some())
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in self.fields() {
            if let Some(value) = value {
                require_non_blank(field, value)?;
            }
        }
        Ok(())
    }

    /// Overlays the present fields onto `answers`.
    pub fn merge_into(&self, answers: &mut AnswerSet) {
        if let Some(value) = &self.problem_or_goal {
            answers.problem_or_goal = value.clone();
        }
        if let Some(value) = &self.content_elements {
            answers.content_elements = value.clone();
        }
        if let Some(value) = &self.call_to_action {
            answers.call_to_action = value.clone();
        }
        if let Some(value) = &self.visual_elements {
            answers.visual_elements = value.clone();
        }
        if let Some(value) = &self.atmosphere {
            answers.atmosphere = value.clone();
        }
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}
