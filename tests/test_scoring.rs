use chrono::NaiveDate;
use proptest::prelude::*;

use solunar::scoring::*;
use solunar::snapshot::compute_snapshot;
use solunar::types::{DayRating, MoonPhase, PeriodKind, SolunarSnapshot, WindowRating};

fn snapshot_with(phase: MoonPhase, illumination: f64, majors: usize, minors: usize) -> SolunarSnapshot {
    let date = NaiveDate::from_ymd_opt(2026, 3, 21).unwrap();
    let mut s = compute_snapshot(date, 0.0, 0.0);
    assert_eq!((s.major_periods.len(), s.minor_periods.len()), (2, 2));
    s.moon_phase = phase;
    s.illumination_percent = illumination;
    s.major_periods.truncate(majors);
    s.minor_periods.truncate(minors);
    s
}

// ── Day quality index ──

#[test]
fn test_new_moon_bright_two_majors_scores_maximum() {
    let s = snapshot_with(MoonPhase::New, 95.0, 2, 0);
    assert_eq!(day_quality_index(&s), 100);
}

#[test]
fn test_full_moon_two_majors_one_minor_is_excellent() {
    let s = snapshot_with(MoonPhase::Full, 100.0, 2, 1);
    assert_eq!(day_quality_index(&s), 100);
    assert_eq!(day_rating(&s), DayRating::Excellent);
    assert_eq!(day_rating(&s).to_string(), "Excellent");
}

#[test]
fn test_index_components() {
    let cases: &[(MoonPhase, f64, usize, u8)] = &[
        (MoonPhase::WaxingCrescent, 50.0, 0, 30),
        (MoonPhase::FirstQuarter, 50.0, 1, 60),
        (MoonPhase::LastQuarter, 15.0, 2, 90),
        (MoonPhase::WaxingGibbous, 85.0, 2, 80),
        (MoonPhase::WaningGibbous, 80.0, 2, 70),
        (MoonPhase::WaningCrescent, 20.0, 1, 50),
        (MoonPhase::Full, 50.0, 0, 50),
    ];
    for &(phase, illum, majors, expected) in cases {
        let s = snapshot_with(phase, illum, majors, 0);
        assert_eq!(day_quality_index(&s), expected, "{:?} {} {}", phase, illum, majors);
    }
}

#[test]
fn test_day_rating_thresholds() {
    let cases: &[(u8, DayRating, &str)] = &[
        (100, DayRating::Excellent, "Excellent"),
        (80, DayRating::Excellent, "Excellent"),
        (79, DayRating::VeryGood, "Very good"),
        (60, DayRating::VeryGood, "Very good"),
        (59, DayRating::Good, "Good"),
        (40, DayRating::Good, "Good"),
        (39, DayRating::Average, "Average"),
        (20, DayRating::Average, "Average"),
        (19, DayRating::Poor, "Poor"),
        (0, DayRating::Poor, "Poor"),
    ];
    for &(index, rating, label) in cases {
        assert_eq!(DayRating::from_index(index), rating, "index={}", index);
        assert_eq!(rating.label(), label);
    }
}

// ── Period scores ──

#[test]
fn test_period_score_components() {
    let cases: &[(PeriodKind, MoonPhase, f64, u8)] = &[
        (PeriodKind::Major, MoonPhase::New, 5.0, 100),
        (PeriodKind::Major, MoonPhase::Full, 95.0, 100),
        (PeriodKind::Major, MoonPhase::Full, 90.0, 90),
        (PeriodKind::Major, MoonPhase::WaningGibbous, 50.0, 70),
        (PeriodKind::Minor, MoonPhase::Full, 50.0, 70),
        (PeriodKind::Minor, MoonPhase::FirstQuarter, 95.0, 70),
        (PeriodKind::Minor, MoonPhase::LastQuarter, 50.0, 60),
        (PeriodKind::Minor, MoonPhase::WaxingCrescent, 50.0, 50),
        (PeriodKind::Minor, MoonPhase::WaxingCrescent, 10.0, 50),
        (PeriodKind::Minor, MoonPhase::WaxingCrescent, 9.9, 60),
    ];
    for &(kind, phase, illum, expected) in cases {
        assert_eq!(period_score(kind, phase, illum), expected, "{:?} {:?} {}", kind, phase, illum);
    }
}

#[test]
fn test_window_rating_thresholds() {
    let cases: &[(u8, WindowRating, &str)] = &[
        (100, WindowRating::Excellent, "Excellent"),
        (80, WindowRating::Excellent, "Excellent"),
        (79, WindowRating::VeryGood, "Very good"),
        (60, WindowRating::VeryGood, "Very good"),
        (59, WindowRating::Good, "Good"),
        (40, WindowRating::Good, "Good"),
        (39, WindowRating::Average, "Average"),
        (0, WindowRating::Average, "Average"),
    ];
    for &(score, rating, label) in cases {
        assert_eq!(WindowRating::from_score(score), rating, "score={}", score);
        assert_eq!(rating.label(), label);
    }
}

#[test]
fn test_day_and_window_scales_differ() {
    assert_eq!(DayRating::from_index(15), DayRating::Poor);
    assert_eq!(WindowRating::from_score(15), WindowRating::Average);
}

// ── Ranking ──

#[test]
fn test_rank_majors_ahead_of_minors() {
    let s = snapshot_with(MoonPhase::WaxingGibbous, 60.0, 2, 2);
    let ranked = rank_fishing_windows(&s);
    assert_eq!(ranked.len(), 4);
    let scores: Vec<u8> = ranked.iter().map(|w| w.score).collect();
    assert_eq!(scores, vec![70, 70, 50, 50]);
    assert_eq!(ranked[0].reason, MAJOR_REASON);
    assert_eq!(ranked[2].reason, MINOR_REASON);
    assert_eq!(ranked[0].rating, WindowRating::VeryGood);
    assert_eq!(ranked[3].rating, WindowRating::Good);
}

#[test]
fn test_rank_is_stable_on_ties() {
    let s = snapshot_with(MoonPhase::Full, 100.0, 2, 2);
    let ranked = rank_fishing_windows(&s);
    let periods: Vec<_> = ranked.iter().map(|w| w.period).collect();
    let expected: Vec<_> = s.major_periods.iter().chain(&s.minor_periods).copied().collect();
    assert_eq!(periods, expected);
    assert_eq!(ranked[0].score, 100);
    assert_eq!(ranked[2].score, 80);
}

#[test]
fn test_rank_empty_snapshot() {
    let s = snapshot_with(MoonPhase::New, 0.0, 0, 0);
    assert!(rank_fishing_windows(&s).is_empty());
    assert_eq!(day_quality_index(&s), 60);
}

#[test]
fn test_reason_labels() {
    assert_eq!(MAJOR_REASON, "major period – lunar transit");
    assert_eq!(MINOR_REASON, "minor period – moonrise/moonset");
}

// ── Properties ──

fn any_phase() -> impl Strategy<Value = MoonPhase> {
    prop::sample::select(vec![
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ])
}

proptest! {
    #[test]
    fn prop_index_in_range(
        phase in any_phase(),
        illum in 0.0..=100.0f64,
        majors in 0usize..=2,
        minors in 0usize..=2,
    ) {
        let s = snapshot_with(phase, illum, majors, minors);
        prop_assert!(day_quality_index(&s) <= 100);
    }

    #[test]
    fn prop_ranking_sorted_and_complete(
        phase in any_phase(),
        illum in 0.0..=100.0f64,
        majors in 0usize..=2,
        minors in 0usize..=2,
    ) {
        let s = snapshot_with(phase, illum, majors, minors);
        let ranked = rank_fishing_windows(&s);
        prop_assert_eq!(ranked.len(), majors + minors);
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(ranked.iter().all(|w| w.score <= 100));
        // majors always outscore minors under the same moon
        let first_minor = ranked.iter().position(|w| w.period.kind == PeriodKind::Minor);
        if let Some(i) = first_minor {
            prop_assert!(ranked[i..].iter().all(|w| w.period.kind == PeriodKind::Minor));
        }
    }
}
