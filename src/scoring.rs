use crate::types::{
    ActivityPeriod, DayRating, FishingWindowScore, MoonPhase, PeriodKind, SolunarSnapshot,
    WindowRating,
};

pub const MAJOR_REASON: &str = "major period – lunar transit";
pub const MINOR_REASON: &str = "minor period – moonrise/moonset";

const MAX_SCORE: u32 = 100;

fn day_phase_points(phase: MoonPhase) -> u32 {
    if phase.is_syzygy() {
        40
    } else if phase.is_quarter() {
        30
    } else {
        20
    }
}

fn day_illumination_points(illumination: f64) -> u32 {
    if illumination > 80.0 || illumination < 20.0 {
        20
    } else {
        10
    }
}

fn period_count_points(major_count: usize) -> u32 {
    (major_count.min(2) * 20) as u32
}

/// Day quality index in [0, 100] from phase, illumination and major count.
pub fn day_quality_index(snapshot: &SolunarSnapshot) -> u8 {
    let total = day_phase_points(snapshot.moon_phase)
        + day_illumination_points(snapshot.illumination_percent)
        + period_count_points(snapshot.major_periods.len());
    total.min(MAX_SCORE) as u8
}

pub fn day_rating(snapshot: &SolunarSnapshot) -> DayRating {
    DayRating::from_index(day_quality_index(snapshot))
}

fn window_phase_points(phase: MoonPhase) -> u32 {
    if phase.is_syzygy() {
        30
    } else if phase.is_quarter() {
        20
    } else {
        10
    }
}

/// Score in [0, 100] for a single window under the given moon.
pub fn period_score(kind: PeriodKind, phase: MoonPhase, illumination: f64) -> u8 {
    let base = match kind {
        PeriodKind::Major => 60,
        PeriodKind::Minor => 40,
    };
    let extreme = if illumination > 90.0 || illumination < 10.0 { 10 } else { 0 };
    (base + window_phase_points(phase) + extreme).min(MAX_SCORE) as u8
}

pub fn score_period(period: &ActivityPeriod, snapshot: &SolunarSnapshot) -> FishingWindowScore {
    let score = period_score(period.kind, snapshot.moon_phase, snapshot.illumination_percent);
    let reason = match period.kind {
        PeriodKind::Major => MAJOR_REASON,
        PeriodKind::Minor => MINOR_REASON,
    };
    FishingWindowScore {
        period: *period,
        score,
        reason: reason.to_string(),
        rating: WindowRating::from_score(score),
    }
}

/// Scores every window of the snapshot, best first. Ties keep majors ahead
/// of minors and otherwise construction order.
pub fn rank_fishing_windows(snapshot: &SolunarSnapshot) -> Vec<FishingWindowScore> {
    let mut ranked: Vec<FishingWindowScore> = snapshot
        .major_periods
        .iter()
        .chain(&snapshot.minor_periods)
        .map(|p| score_period(p, snapshot))
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
