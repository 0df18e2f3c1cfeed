use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::domain::models::participant::Participant;
use crate::domain::models::session::{Capacity, Session};
use crate::domain::ports::SessionSource;
use crate::error::LedgerError;

/// Built-in bootstrap data: a week of boxing classes with a handful of
/// registrations already on the books.
pub struct SeedSource;

#[async_trait]
impl SessionSource for SeedSource {
    async fn fetch(&self) -> Result<(Vec<Session>, Vec<Participant>), LedgerError> {
        Ok((seed_sessions(), seed_participants()))
    }
}

fn seed_sessions() -> Vec<Session> {
    vec![
        session(
            "1",
            "Boxe Débutant",
            (2025, 5, 26),
            (18, 0),
            60.0,
            Capacity::Limited(8),
            "Cours de boxe pour débutants - Apprentissage des bases",
            (2025, 5, 20, 10, 0),
        ),
        session(
            "2",
            "Boxe Intermédiaire",
            (2025, 5, 27),
            (19, 30),
            75.0,
            Capacity::Limited(6),
            "Cours de boxe niveau intermédiaire - Perfectionnement technique",
            (2025, 5, 20, 11, 0),
        ),
        session(
            "3",
            "Sparring Session",
            (2025, 5, 28),
            (20, 0),
            90.0,
            Capacity::Limited(4),
            "Session de sparring pour boxeurs expérimentés",
            (2025, 5, 20, 12, 0),
        ),
        session(
            "4",
            "Boxe Fitness",
            (2025, 5, 29),
            (17, 0),
            45.0,
            Capacity::Limited(12),
            "Cours de fitness avec techniques de boxe",
            (2025, 5, 20, 13, 0),
        ),
    ]
}

fn seed_participants() -> Vec<Participant> {
    vec![
        participant("1", "Marie Dubois", "1", (2025, 5, 21, 14, 30)),
        participant("2", "Pierre Martin", "1", (2025, 5, 21, 15, 45)),
        participant("3", "Sophie Laurent", "1", (2025, 5, 22, 9, 15)),
        participant("4", "Thomas Bernard", "2", (2025, 5, 21, 16, 20)),
        participant("5", "Julie Moreau", "2", (2025, 5, 22, 10, 30)),
        participant("6", "Alex Rodriguez", "3", (2025, 5, 22, 11, 45)),
        participant("7", "Emma Wilson", "4", (2025, 5, 21, 17, 0)),
        participant("8", "Lucas Petit", "4", (2025, 5, 22, 8, 30)),
        participant("9", "Camille Durand", "4", (2025, 5, 22, 12, 15)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn session(
    id: &str,
    title: &str,
    date: (i32, u32, u32),
    time: (u32, u32),
    price: f64,
    capacity: Capacity,
    description: &str,
    created: (i32, u32, u32, u32, u32),
) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid seed date"),
        time: NaiveTime::from_hms_opt(time.0, time.1, 0).expect("valid seed time"),
        price,
        capacity,
        description: Some(description.to_string()),
        created_at: timestamp(created),
    }
}

fn participant(id: &str, name: &str, session_id: &str, at: (i32, u32, u32, u32, u32)) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
        session_id: session_id.to_string(),
        registered_at: timestamp(at),
    }
}

fn timestamp((y, mo, d, h, mi): (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}
