use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::category::Category;

/// One ranked row of a category's standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub team_id: String,
    pub team_name: String,
    pub category: Category,
    pub category_label: String,
    pub athletes: Vec<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub snatch_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub snatch_athlete1: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub snatch_athlete2: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub clean_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub clean_athlete1: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub clean_athlete2: Decimal,
    pub wod_seconds: Option<f64>,
    /// Sum of placements across the three events. Lower is better.
    pub total_points: u32,
}
