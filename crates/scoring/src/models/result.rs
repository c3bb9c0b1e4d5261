use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recorded performance of one team. At most one per team, keyed by `team_id`.
///
/// Any field may be missing in a partially entered document; lifts then
/// default to zero and the WOD time to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    #[serde(default)]
    pub id: String,
    pub team_id: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub snatch_athlete1: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub snatch_athlete2: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub clean_athlete1: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub clean_athlete2: Decimal,
    #[serde(default)]
    pub wod_time: String,
    /// Previously stored total. Never read when ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points: Option<f64>,
}

impl TeamResult {
    pub fn empty(team_id: impl Into<String>) -> Self {
        let team_id = team_id.into();
        Self {
            id: team_id.clone(),
            team_id,
            ..Self::default()
        }
    }

    pub fn snatch_total(&self) -> Decimal {
        self.snatch_athlete1 + self.snatch_athlete2
    }

    pub fn clean_total(&self) -> Decimal {
        self.clean_athlete1 + self.clean_athlete2
    }
}
