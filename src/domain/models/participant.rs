use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named registration against one session. Owned exclusively by that
/// session; deleting the session removes its participants with it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub session_id: String,
    pub registered_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(session_id: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            session_id,
            registered_at: Utc::now(),
        }
    }
}
