use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::types::{SetCode, SlotPosition};

/// Card name reported for a slot with no candidate
pub const UNKNOWN_CARD: &str = "Unknown";

/// Best match for a single pack slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Slot position, 1 through 5
    pub position: SlotPosition,

    /// Matched card identifier, or [`UNKNOWN_CARD`]
    pub card_name: String,

    /// Pixel distance to the matched card; lower is better.
    /// `None` when the slot could not be matched.
    pub confidence_score: Option<u64>,
}

impl MatchResult {
    pub fn matched(position: SlotPosition, card_name: impl Into<String>, score: u64) -> Self {
        Self {
            position,
            card_name: card_name.into(),
            confidence_score: Some(score),
        }
    }

    #[must_use]
    pub fn unknown(position: SlotPosition) -> Self {
        Self {
            position,
            card_name: UNKNOWN_CARD.to_string(),
            confidence_score: None,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.confidence_score.is_none()
    }
}

/// Outcome of identifying one pack image
///
/// Serializes to the document consumed by callers, with a boolean `success`
/// discriminant:
///
/// ```text
/// {"success": true, "set_code": "A1", "set_name": "Genetic Apex", "cards": [...]}
/// {"success": false, "error": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentificationReport {
    Success {
        set_code: SetCode,
        set_name: String,
        cards: Vec<MatchResult>,
    },
    Failure {
        error: String,
    },
}

impl IdentificationReport {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Per-slot results, empty for a failure report
    #[must_use]
    pub fn cards(&self) -> &[MatchResult] {
        match self {
            Self::Success { cards, .. } => cards,
            Self::Failure { .. } => &[],
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

impl Serialize for IdentificationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success {
                set_code,
                set_name,
                cards,
            } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("set_code", set_code)?;
                map.serialize_entry("set_name", set_name)?;
                map.serialize_entry("cards", cards)?;
                map.end()
            }
            Self::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}
