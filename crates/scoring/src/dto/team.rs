use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Category, Team};

/// Request payload for creating or replacing a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayload {
    pub category: Category,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Athlete name must be between 1 and 255 characters"
    ))]
    pub athlete1: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Athlete name must be between 1 and 255 characters"
    ))]
    pub athlete2: String,
}

impl TeamPayload {
    pub fn into_team(self, id: impl Into<String>) -> Team {
        Team {
            id: id.into(),
            category: Some(self.category),
            athlete1: self.athlete1,
            athlete2: self.athlete2,
        }
    }
}

/// Request payload for updating some fields of an existing team
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    pub category: Option<Category>,

    #[validate(length(min = 1, max = 255))]
    pub athlete1: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub athlete2: Option<String>,
}

impl UpdateTeamRequest {
    pub fn apply_to(self, team: &mut Team) {
        if let Some(category) = self.category {
            team.category = Some(category);
        }
        if let Some(athlete1) = self.athlete1 {
            team.athlete1 = athlete1;
        }
        if let Some(athlete2) = self.athlete2 {
            team.athlete2 = athlete2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(athlete1: &str) -> TeamPayload {
        TeamPayload {
            category: Category::Men,
            athlete1: athlete1.to_string(),
            athlete2: "Bruno".to_string(),
        }
    }

    #[test]
    fn test_empty_athlete_name_is_rejected() {
        assert!(payload("Alex").validate().is_ok());
        assert!(payload("").validate().is_err());
    }

    #[test]
    fn test_payload_rejects_unknown_category() {
        let parsed: Result<TeamPayload, _> = serde_json::from_str(
            r#"{"category": "mixed", "athlete1": "A", "athlete2": "B"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_partial_update_only_touches_given_fields() {
        let mut team = payload("Alex").into_team("t1");
        UpdateTeamRequest {
            athlete2: Some("Carl".to_string()),
            ..UpdateTeamRequest::default()
        }
        .apply_to(&mut team);

        assert_eq!(team.athlete1, "Alex");
        assert_eq!(team.athlete2, "Carl");
        assert_eq!(team.category, Some(Category::Men));
    }
}
