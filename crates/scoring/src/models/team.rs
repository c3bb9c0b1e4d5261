use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::category::{Category, deserialize_known_category};

/// A two-athlete team registered in the roster.
///
/// `category` is `None` when the stored tag is not one of the known
/// categories; such a team is accepted but never ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_known_category")]
    pub category: Option<Category>,
    pub athlete1: String,
    pub athlete2: String,
}

impl Team {
    pub fn display_name(&self) -> String {
        format!("{} & {}", self.athlete1, self.athlete2)
    }

    pub fn athletes(&self) -> Vec<String> {
        vec![self.athlete1.clone(), self.athlete2.clone()]
    }
}
