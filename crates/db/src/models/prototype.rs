use chrono::{DateTime, TimeZone, Utc};
use prototyper_core::{AnswerSet, Prototype, UiConfiguration};
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PrototypeRow {
    pub id: String,
    pub problem_or_goal: String,
    pub content_elements: String,
    pub call_to_action: String,
    pub visual_elements: String,
    pub atmosphere: String,
    pub ui_config: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PrototypeRow {
    pub fn into_domain(self) -> Result<Prototype, DbError> {
        let ui_config: UiConfiguration =
            serde_json::from_str(&self.ui_config).map_err(|e| DbError::CorruptConfig {
                id: self.id.clone(),
                reason: e.to_string(),
            })?;

        Ok(Prototype {
            id: Uuid::parse_str(&self.id).unwrap_or_default(),
            answers: AnswerSet {
                problem_or_goal: self.problem_or_goal,
                content_elements: self.content_elements,
                call_to_action: self.call_to_action,
                visual_elements: self.visual_elements,
                atmosphere: self.atmosphere,
            },
            ui_config,
            created_at: timestamp_to_datetime(self.created_at),
            updated_at: timestamp_to_datetime(self.updated_at),
        })
    }

    pub fn try_from_domain(prototype: &Prototype) -> Result<Self, DbError> {
        Ok(Self {
            id: prototype.id.to_string(),
            problem_or_goal: prototype.answers.problem_or_goal.clone(),
            content_elements: prototype.answers.content_elements.clone(),
            call_to_action: prototype.answers.call_to_action.clone(),
            visual_elements: prototype.answers.visual_elements.clone(),
            atmosphere: prototype.answers.atmosphere.clone(),
            ui_config: serde_json::to_string(&prototype.ui_config)?,
            created_at: datetime_to_timestamp(prototype.created_at),
            updated_at: datetime_to_timestamp(prototype.updated_at),
        })
    }
}

fn timestamp_to_datetime(ts: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(ts, 0).single().unwrap_or_default()
}

fn datetime_to_timestamp(dt: DateTime<Utc>) -> i64 {
    dt.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prototype() -> Prototype {
        Prototype::new(AnswerSet::new(
            "Share recipes with friends.",
            "Lista de recetas",
            "Publicar receta",
            "Fotos de platos",
            "Cálido",
        ))
    }

    #[test]
    fn test_row_conversion_keeps_config() {
        let original = prototype();
        let row = PrototypeRow::try_from_domain(&original).unwrap();
        assert_eq!(row.id, original.id.to_string());

        let restored = row.into_domain().unwrap();
        assert_eq!(restored.id, original.id);
        assert_eq!(restored.answers, original.answers);
        assert_eq!(restored.ui_config, original.ui_config);
        assert_eq!(restored.created_at.timestamp(), original.created_at.timestamp());
    }

    #[test]
    fn test_corrupt_config_is_reported() {
        let mut row = PrototypeRow::try_from_domain(&prototype()).unwrap();
        row.ui_config = "{not json".to_string();

        let err = row.into_domain().unwrap_err();
        assert!(matches!(err, DbError::CorruptConfig { .. }));
    }
}
