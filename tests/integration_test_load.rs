mod common;

use std::time::Duration;

use common::{draft, participant, seeded_ledger, session, FailingSource, FixedSource};
use session_ledger::domain::models::session::Capacity;
use session_ledger::domain::services::ledger::SessionLedger;
use session_ledger::error::LedgerError;
use session_ledger::infra::sources::seed_source::SeedSource;

#[tokio::test]
async fn test_seed_load_joins_participants_and_derives() {
    let ledger = seeded_ledger().await;

    assert_eq!(ledger.sessions().len(), 4);
    assert!(!ledger.is_loading());

    let debutant = ledger.get("1").unwrap();
    assert_eq!(debutant.session.title, "Boxe Débutant");
    assert_eq!(debutant.participants.len(), 3);
    assert_eq!(debutant.cost_per_person, 20.0);
    assert_eq!(debutant.available_spots, Capacity::Limited(5));

    let sparring = ledger.get("3").unwrap();
    assert_eq!(sparring.participants.len(), 1);
    assert_eq!(sparring.cost_per_person, 90.0);
    assert_eq!(sparring.available_spots, Capacity::Limited(3));

    let fitness = ledger.get("4").unwrap();
    assert_eq!(fitness.participants.len(), 3);
    assert_eq!(fitness.cost_per_person, 15.0);
    assert_eq!(fitness.available_spots, Capacity::Limited(9));
}

#[tokio::test]
async fn test_seed_participants_keep_their_registration_order() {
    let ledger = seeded_ledger().await;

    let names: Vec<&str> = ledger
        .get("1")
        .unwrap()
        .participants
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Marie Dubois", "Pierre Martin", "Sophie Laurent"]);
}

#[tokio::test]
async fn test_reload_replaces_all_prior_state() {
    let mut ledger = seeded_ledger().await;
    let extra = ledger
        .create_session(draft("Extra", 42.0, None))
        .unwrap()
        .session
        .id;
    ledger.register("1", "Nina Rousseau").unwrap();

    ledger.load(&SeedSource, Duration::ZERO).await.unwrap();

    assert_eq!(ledger.sessions().len(), 4);
    assert!(ledger.get(&extra).is_none());
    assert_eq!(ledger.get("1").unwrap().participants.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_load_waits_out_the_cosmetic_delay() {
    let mut ledger = SessionLedger::new();
    let start = tokio::time::Instant::now();

    ledger
        .load(&SeedSource, Duration::from_millis(500))
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(500));
    assert!(!ledger.is_loading());
}

#[tokio::test]
async fn test_failed_load_keeps_prior_state_and_clears_the_flag() {
    let mut ledger = seeded_ledger().await;

    let err = ledger.load(&FailingSource, Duration::ZERO).await.unwrap_err();

    assert!(matches!(err, LedgerError::Source(_)));
    assert!(!ledger.is_loading());
    assert_eq!(ledger.sessions().len(), 4);
}

#[tokio::test]
async fn test_orphan_participants_are_dropped_on_load() {
    let mut ledger = SessionLedger::new();
    let source = FixedSource {
        sessions: vec![session("s1", "Boxe", 60.0, Capacity::Limited(8))],
        participants: vec![
            participant("p1", "s1", "Marie"),
            participant("p2", "ghost", "Pierre"),
        ],
    };

    ledger.load(&source, Duration::ZERO).await.unwrap();

    let entry = ledger.get("s1").unwrap();
    assert_eq!(entry.participants.len(), 1);
    assert_eq!(entry.participants[0].name, "Marie");
    assert!(ledger.get("ghost").is_none());
}

#[tokio::test]
async fn test_overbooked_source_data_clamps_spots_at_zero() {
    // A future store could hand back more registrations than the cap.
    let mut ledger = SessionLedger::new();
    let source = FixedSource {
        sessions: vec![session("s1", "Boxe", 60.0, Capacity::Limited(2))],
        participants: vec![
            participant("p1", "s1", "Marie"),
            participant("p2", "s1", "Pierre"),
            participant("p3", "s1", "Sophie"),
        ],
    };

    ledger.load(&source, Duration::ZERO).await.unwrap();

    let entry = ledger.get("s1").unwrap();
    assert_eq!(entry.participants.len(), 3);
    assert_eq!(entry.available_spots, Capacity::Limited(0));
    assert_eq!(entry.cost_per_person, 20.0);
}
