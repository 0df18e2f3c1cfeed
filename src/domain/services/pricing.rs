use crate::domain::models::session::Capacity;

/// Round to the nearest cent, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Even split of the session price across the current headcount. An empty
/// session shows the full price, never a division by zero.
pub fn cost_per_person(price: f64, participant_count: usize) -> f64 {
    if participant_count > 0 {
        round2(price / participant_count as f64)
    } else {
        price
    }
}

/// Remaining registration slots, clamped at zero. An uncapped session stays
/// uncapped regardless of headcount.
pub fn available_spots(capacity: Capacity, participant_count: usize) -> Capacity {
    match capacity {
        Capacity::Unlimited => Capacity::Unlimited,
        Capacity::Limited(cap) => Capacity::Limited(cap.saturating_sub(participant_count as u32)),
    }
}
