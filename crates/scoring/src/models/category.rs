use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::ScoringError;

/// Competition division. Each category is ranked independently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
}

impl Category {
    pub const ALL: [Category; 2] = [Self::Men, Self::Women];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
        }
    }

    /// Human readable label shown next to the standings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Men => "Men + Men",
            Self::Women => "Women + Women",
        }
    }

    fn parse_str(s: &str) -> Result<Self, ScoringError> {
        match s.trim().to_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            _ => Err(ScoringError::UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = ScoringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for Category {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reads a stored category tag. Only the exact lowercase tags are known;
/// anything else maps to `None`, so the team is kept in the roster but left
/// out of every bucket.
pub(crate) fn deserialize_known_category<'de, D>(
    deserializer: D,
) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(raw.and_then(|tag| {
        let known = Category::ALL
            .into_iter()
            .find(|category| category.as_str() == tag);
        if known.is_none() {
            tracing::debug!(%tag, "ignoring unknown category tag");
        }
        known
    }))
}
