// Event payload: ClockedOutV1.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ClockedOutV1 {
    pub at: DateTime<Utc>,
}
