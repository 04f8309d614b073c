use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{AnswerSet, UiConfiguration, UpdatePrototypeRequest};
use crate::generator::generate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Prototype {
    pub id: Uuid,
    #[serde(flatten)]
    pub answers: AnswerSet,
    pub ui_config: UiConfiguration,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prototype {
    /// Creates a prototype with a freshly generated configuration.
    pub fn new(answers: AnswerSet) -> Self {
        let now = Utc::now();
        let ui_config = generate(&answers);
        Self {
            id: Uuid::new_v4(),
            answers,
            ui_config,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Applies a sparse update. The configuration is rebuilt from the merged
    /// answers when at least one answer is present, and left as is otherwise.
    ///
    /// Returns `true` if the configuration was regenerated.
    pub fn apply_update(&mut self, update: &UpdatePrototypeRequest) -> bool {
        self.updated_at = Utc::now();

        if !update.touches_answers() {
            return false;
        }

        update.merge_into(&mut self.answers);
        self.ui_config = generate(&self.answers);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComponentKind;

    fn answers() -> AnswerSet {
        AnswerSet::new(
            "Build an efficient management tool.",
            "A short summary",
            "Sign up now",
            "Plain text only",
            "Calm",
        )
    }

    #[test]
    fn test_prototype_creation_generates_config() {
        let prototype = Prototype::new(answers());

        assert_eq!(prototype.created_at, prototype.updated_at);
        assert_eq!(prototype.ui_config, generate(&prototype.answers));
        assert_eq!(
            prototype.ui_config.component("cta-button").unwrap().label.as_deref(),
            Some("Sign up now")
        );
    }

    #[test]
    fn test_prototype_with_id() {
        let id = Uuid::new_v4();
        let prototype = Prototype::new(answers()).with_id(id);

        assert_eq!(prototype.id, id);
    }

    #[test]
    fn test_update_without_answers_keeps_config() {
        let mut prototype = Prototype::new(answers());
        let before = prototype.ui_config.clone();

        let regenerated = prototype.apply_update(&UpdatePrototypeRequest::default());

        assert!(!regenerated);
        assert_eq!(prototype.ui_config, before);
        assert!(prototype.updated_at >= prototype.created_at);
    }

    #[test]
    fn test_update_with_answer_regenerates_from_merged_set() {
        let mut prototype = Prototype::new(answers());
        assert_eq!(prototype.ui_config.count_of(ComponentKind::Input), 0);

        let update = UpdatePrototypeRequest {
            content_elements: Some("Registration form".to_string()),
            ..Default::default()
        };
        let regenerated = prototype.apply_update(&update);

        assert!(regenerated);
        assert_eq!(prototype.answers.content_elements, "Registration form");
        assert_eq!(prototype.answers.call_to_action, "Sign up now");
        assert_eq!(prototype.ui_config.count_of(ComponentKind::Input), 1);
        assert_eq!(prototype.ui_config, generate(&prototype.answers));
    }

    #[test]
    fn test_flattened_json_shape() {
        let prototype = Prototype::new(answers());
        let value = serde_json::to_value(&prototype).unwrap();

        assert_eq!(value["problem_or_goal"], "Build an efficient management tool.");
        assert_eq!(value["ui_config"]["layout"], "single-column");
        assert!(value.get("answers").is_none());
    }
}
