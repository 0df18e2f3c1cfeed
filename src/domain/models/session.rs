use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::participant::Participant;
use crate::domain::services::pricing;
use crate::error::LedgerError;

/// Maximum headcount for a session. The missing cap is explicit instead of a
/// sentinel, so spot arithmetic stays total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Capacity {
    #[default]
    Unlimited,
    Limited(u32),
}

impl From<Option<u32>> for Capacity {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(n) => Capacity::Limited(n),
            None => Capacity::Unlimited,
        }
    }
}

impl From<Capacity> for Option<u32> {
    fn from(value: Capacity) -> Self {
        match value {
            Capacity::Limited(n) => Some(n),
            Capacity::Unlimited => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub price: f64,
    #[serde(default)]
    pub capacity: Capacity,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(draft: SessionDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            date: draft.date,
            time: draft.time,
            price: draft.price,
            capacity: draft.capacity,
            description: draft.description,
            created_at: Utc::now(),
        }
    }
}

/// Create/update input. `id` and `created_at` are never part of a draft;
/// they are assigned once at creation and immutable afterwards.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub price: f64,
    #[serde(default)]
    pub capacity: Capacity,
    pub description: Option<String>,
}

impl SessionDraft {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.title.trim().is_empty() {
            return Err(LedgerError::Validation("Title must not be empty".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(LedgerError::Validation(
                "Price must be a non-negative amount".into(),
            ));
        }
        if self.capacity == Capacity::Limited(0) {
            return Err(LedgerError::Validation("Capacity must be at least 1".into()));
        }
        Ok(())
    }
}

/// A session joined with its registrations and the derived figures the
/// consumer displays. Never stored without recomputing: every mutation goes
/// through [`SessionWithParticipants::recompute`].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionWithParticipants {
    #[serde(flatten)]
    pub session: Session,
    pub participants: Vec<Participant>,
    pub cost_per_person: f64,
    pub available_spots: Capacity,
}

impl SessionWithParticipants {
    pub fn new(session: Session, participants: Vec<Participant>) -> Self {
        let mut view = Self {
            cost_per_person: session.price,
            available_spots: session.capacity,
            session,
            participants,
        };
        view.recompute();
        view
    }

    pub(crate) fn recompute(&mut self) {
        self.cost_per_person = pricing::cost_per_person(self.session.price, self.participants.len());
        self.available_spots = pricing::available_spots(self.session.capacity, self.participants.len());
    }

    pub fn is_full(&self) -> bool {
        self.available_spots == Capacity::Limited(0)
    }
}
