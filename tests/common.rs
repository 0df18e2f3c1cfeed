#![allow(dead_code)] // not every suite uses every helper

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use session_ledger::domain::models::participant::Participant;
use session_ledger::domain::models::session::{Capacity, Session, SessionDraft};
use session_ledger::domain::ports::SessionSource;
use session_ledger::domain::services::ledger::SessionLedger;
use session_ledger::error::LedgerError;
use session_ledger::infra::sources::seed_source::SeedSource;

pub fn draft(title: &str, price: f64, capacity: Option<u32>) -> SessionDraft {
    SessionDraft {
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        price,
        capacity: capacity.into(),
        description: None,
    }
}

pub fn session(id: &str, title: &str, price: f64, capacity: Capacity) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        price,
        capacity,
        description: None,
        created_at: Utc::now(),
    }
}

pub fn participant(id: &str, session_id: &str, name: &str) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
        session_id: session_id.to_string(),
        registered_at: Utc::now(),
    }
}

/// A source whose contents are fixed per test.
pub struct FixedSource {
    pub sessions: Vec<Session>,
    pub participants: Vec<Participant>,
}

#[async_trait]
impl SessionSource for FixedSource {
    async fn fetch(&self) -> Result<(Vec<Session>, Vec<Participant>), LedgerError> {
        Ok((self.sessions.clone(), self.participants.clone()))
    }
}

pub struct FailingSource;

#[async_trait]
impl SessionSource for FailingSource {
    async fn fetch(&self) -> Result<(Vec<Session>, Vec<Participant>), LedgerError> {
        Err(LedgerError::Source("store unavailable".into()))
    }
}

/// A ledger loaded from the built-in seed, without the cosmetic delay.
pub async fn seeded_ledger() -> SessionLedger {
    let mut ledger = SessionLedger::new();
    ledger
        .load(&SeedSource, Duration::ZERO)
        .await
        .expect("seed load should succeed");
    ledger
}
