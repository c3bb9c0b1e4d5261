use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::duration::parse_duration;
use crate::models::TeamResult;

/// Request payload for saving the full result of a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultPayload {
    #[serde(default, with = "rust_decimal::serde::float")]
    pub snatch_athlete1: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub snatch_athlete2: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub clean_athlete1: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub clean_athlete2: Decimal,

    #[serde(default)]
    #[validate(length(max = 32), custom(function = "validate_wod_time"))]
    pub wod_time: String,
}

impl ResultPayload {
    pub fn into_result(self, team_id: impl Into<String>) -> TeamResult {
        let team_id = team_id.into();
        TeamResult {
            id: team_id.clone(),
            team_id,
            snatch_athlete1: self.snatch_athlete1,
            snatch_athlete2: self.snatch_athlete2,
            clean_athlete1: self.clean_athlete1,
            clean_athlete2: self.clean_athlete2,
            wod_time: self.wod_time,
            total_points: None,
        }
    }
}

/// Request payload for merging some fields into a team's result
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartialResultRequest {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub snatch_athlete1: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub snatch_athlete2: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub clean_athlete1: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub clean_athlete2: Option<Decimal>,

    #[validate(length(max = 32), custom(function = "validate_wod_time"))]
    pub wod_time: Option<String>,
}

impl PartialResultRequest {
    pub fn merge_into(self, result: &mut TeamResult) {
        if let Some(value) = self.snatch_athlete1 {
            result.snatch_athlete1 = value;
        }
        if let Some(value) = self.snatch_athlete2 {
            result.snatch_athlete2 = value;
        }
        if let Some(value) = self.clean_athlete1 {
            result.clean_athlete1 = value;
        }
        if let Some(value) = self.clean_athlete2 {
            result.clean_athlete2 = value;
        }
        if let Some(wod_time) = self.wod_time {
            result.wod_time = wod_time;
        }
    }
}

// An empty time means the WOD is not done yet; anything else must be readable.
fn validate_wod_time(wod_time: &str) -> Result<(), validator::ValidationError> {
    if wod_time.trim().is_empty() || parse_duration(Some(wod_time)).is_some() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_wod_time"))
    }
}
