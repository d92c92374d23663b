use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Checkpoint identifiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimelineKey {
    Registered,
    Review,
    Initiate,
    Order,
    Final,
}

impl TimelineKey {
    /// Slot along the process; compared against [`crate::InvestigationStage::order`].
    pub fn position(self) -> u8 {
        match self {
            TimelineKey::Registered => 0,
            TimelineKey::Review => 1,
            TimelineKey::Initiate => 2,
            TimelineKey::Order => 3,
            TimelineKey::Final => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    Done,
    Current,
    Pending,
    Skipped,
}

/// One derived lifecycle checkpoint. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimelineItem {
    pub key: TimelineKey,
    pub label: String,
    pub at: Option<DateTime<Utc>>,
    pub status: TimelineStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
