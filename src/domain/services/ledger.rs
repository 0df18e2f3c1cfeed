use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::models::participant::Participant;
use crate::domain::models::session::{Capacity, Session, SessionDraft, SessionWithParticipants};
use crate::domain::ports::SessionSource;
use crate::error::LedgerError;

/// In-memory store of sessions and their registrations. Exclusively owned by
/// its consumer; every operation runs to completion before returning, so no
/// two operations ever interleave.
#[derive(Default)]
pub struct SessionLedger {
    sessions: Vec<SessionWithParticipants>,
    is_loading: bool,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions in creation order, with derived figures current.
    pub fn sessions(&self) -> &[SessionWithParticipants] {
        &self.sessions
    }

    pub fn get(&self, id: &str) -> Option<&SessionWithParticipants> {
        self.sessions.iter().find(|s| s.session.id == id)
    }

    /// True only while a `load` is in flight. Display-only; gates nothing.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Replaces all ledger state with the source's current contents. The
    /// delay is cosmetic pacing for the consumer's spinner, modeled as a
    /// cancellable timer. On a source failure prior state is kept untouched.
    pub async fn load(
        &mut self,
        source: &dyn SessionSource,
        delay: Duration,
    ) -> Result<(), LedgerError> {
        self.is_loading = true;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let fetched = source.fetch().await;
        self.is_loading = false;

        let (sessions, participants) = fetched?;
        let mut loaded: Vec<SessionWithParticipants> = sessions
            .into_iter()
            .map(|session| SessionWithParticipants::new(session, Vec::new()))
            .collect();

        let mut orphans = 0usize;
        for participant in participants {
            match loaded
                .iter_mut()
                .find(|s| s.session.id == participant.session_id)
            {
                Some(entry) => entry.participants.push(participant),
                None => orphans += 1,
            }
        }
        if orphans > 0 {
            warn!("Dropped {} participant(s) without a matching session", orphans);
        }

        for entry in &mut loaded {
            entry.recompute();
        }

        info!("Loaded {} session(s) from source", loaded.len());
        self.sessions = loaded;
        Ok(())
    }

    pub fn create_session(
        &mut self,
        draft: SessionDraft,
    ) -> Result<SessionWithParticipants, LedgerError> {
        draft.validate()?;

        let session = Session::new(draft);
        let view = SessionWithParticipants::new(session, Vec::new());
        info!("Created session {} ({})", view.session.id, view.session.title);
        self.sessions.push(view.clone());
        Ok(view)
    }

    /// Replaces the editable fields in place. `id`, `created_at` and the
    /// participant sequence survive the edit; the derived figures are
    /// recomputed against the existing headcount.
    pub fn update_session(
        &mut self,
        id: &str,
        draft: SessionDraft,
    ) -> Result<SessionWithParticipants, LedgerError> {
        draft.validate()?;

        let entry = self
            .sessions
            .iter_mut()
            .find(|s| s.session.id == id)
            .ok_or_else(|| LedgerError::NotFound(format!("Session {} not found", id)))?;

        entry.session.title = draft.title;
        entry.session.date = draft.date;
        entry.session.time = draft.time;
        entry.session.price = draft.price;
        entry.session.capacity = draft.capacity;
        entry.session.description = draft.description;
        entry.recompute();

        info!("Updated session {}", id);
        Ok(entry.clone())
    }

    /// Removes the session and every participant registered to it. Deleting
    /// an id twice fails the second time, never silently succeeds.
    pub fn delete_session(&mut self, id: &str) -> Result<(), LedgerError> {
        let position = self
            .sessions
            .iter()
            .position(|s| s.session.id == id)
            .ok_or_else(|| LedgerError::NotFound(format!("Session {} not found", id)))?;

        let removed = self.sessions.remove(position);
        info!(
            "Deleted session {} with {} participant(s)",
            id,
            removed.participants.len()
        );
        Ok(())
    }

    /// Appends a registration under the trimmed display name. Insertion order
    /// is display order. A full session rejects the registration with the
    /// participant sequence untouched.
    pub fn register(&mut self, session_id: &str, name: &str) -> Result<Participant, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Participant name must not be empty".into(),
            ));
        }

        let entry = self
            .sessions
            .iter_mut()
            .find(|s| s.session.id == session_id)
            .ok_or_else(|| LedgerError::NotFound(format!("Session {} not found", session_id)))?;

        if let Capacity::Limited(cap) = entry.session.capacity {
            if entry.participants.len() as u32 >= cap {
                return Err(LedgerError::CapacityExceeded {
                    session_id: session_id.to_string(),
                    capacity: cap,
                });
            }
        }

        let participant = Participant::new(session_id.to_string(), name.to_string());
        entry.participants.push(participant.clone());
        entry.recompute();

        info!(
            "Registered {} for session {} ({} signed up)",
            participant.name,
            session_id,
            entry.participants.len()
        );
        Ok(participant)
    }

    /// Tolerant removal: an absent session or participant is a no-op, so a
    /// double-click on the consumer side costs nothing.
    pub fn unregister(&mut self, session_id: &str, participant_id: &str) {
        let Some(entry) = self.sessions.iter_mut().find(|s| s.session.id == session_id) else {
            debug!("Unregister ignored: session {} not present", session_id);
            return;
        };

        let before = entry.participants.len();
        entry.participants.retain(|p| p.id != participant_id);
        if entry.participants.len() == before {
            debug!(
                "Unregister ignored: participant {} not in session {}",
                participant_id, session_id
            );
            return;
        }

        entry.recompute();
        info!(
            "Removed participant {} from session {}",
            participant_id, session_id
        );
    }
}
