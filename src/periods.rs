//! Major and minor solunar activity windows.
//!
//! Majors sit on the lunar transits, approximated as local midday shifted
//! by four minutes per degree of longitude, and on the opposite transit
//! twelve hours later. Minors sit on moonrise and moonset.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::angles::{self, MINUTES_PER_DEGREE};
use crate::types::{ActivityPeriod, Degradation, PeriodKind, PeriodSlot};

pub const MAJOR_HALF_WIDTH_MINUTES: i64 = 60;
pub const MINOR_HALF_WIDTH_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolunarPeriods {
    pub major: Vec<ActivityPeriod>,
    pub minor: Vec<ActivityPeriod>,
    pub dropped: Vec<Degradation>,
}

pub fn half_width(kind: PeriodKind) -> Duration {
    match kind {
        PeriodKind::Major => Duration::minutes(MAJOR_HALF_WIDTH_MINUTES),
        PeriodKind::Minor => Duration::minutes(MINOR_HALF_WIDTH_MINUTES),
    }
}

/// Window of the nominal width for `kind`, centred on `center`.
pub fn window_around(kind: PeriodKind, center: DateTime<FixedOffset>) -> Option<ActivityPeriod> {
    let half = half_width(kind);
    let start = center.checked_sub_signed(half)?;
    let end = center.checked_add_signed(half)?;
    Some(ActivityPeriod { kind, start, end })
}

/// Upper lunar transit: local midday plus `longitude × 4` minutes.
pub fn upper_transit(
    date: NaiveDate,
    offset: FixedOffset,
    longitude: f64,
) -> Option<DateTime<FixedOffset>> {
    let midday = offset
        .from_local_datetime(&date.and_time(NaiveTime::from_hms_opt(12, 0, 0)?))
        .single()?;
    midday.checked_add_signed(angles::minutes_duration(longitude * MINUTES_PER_DEGREE)?)
}

pub fn lower_transit(upper: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    upper.checked_add_signed(Duration::hours(12))
}

/// Builds the day's windows in construction order: upper then lower
/// transit, then moonrise and moonset. Anything that cannot be placed on
/// the calendar is left out and reported in `dropped`.
pub fn solunar_periods(
    date: NaiveDate,
    offset: FixedOffset,
    longitude: f64,
    moonrise: Option<DateTime<FixedOffset>>,
    moonset: Option<DateTime<FixedOffset>>,
) -> SolunarPeriods {
    let mut periods = SolunarPeriods::default();

    let upper = upper_transit(date, offset, longitude);
    let lower = upper.and_then(lower_transit);
    let slots = [
        (PeriodSlot::UpperTransit, upper, true),
        (PeriodSlot::LowerTransit, lower, true),
        (PeriodSlot::Moonrise, moonrise, false),
        (PeriodSlot::Moonset, moonset, false),
    ];

    for (slot, center, required) in slots {
        let kind = slot.kind();
        match center.and_then(|c| window_around(kind, c)) {
            Some(period) if kind == PeriodKind::Major => periods.major.push(period),
            Some(period) => periods.minor.push(period),
            // an absent moon event is reported upstream, not as a dropped period
            None if required || center.is_some() => {
                periods.dropped.push(Degradation::PeriodDropped(slot))
            }
            None => {}
        }
    }

    periods
}

/// All windows of a day sorted by start time.
pub fn all_periods_chronological(
    major: &[ActivityPeriod],
    minor: &[ActivityPeriod],
) -> Vec<ActivityPeriod> {
    let mut all: Vec<ActivityPeriod> = major.iter().chain(minor).copied().collect();
    all.sort_by_key(|p| p.start);
    all
}

/// First window (majors before minors) that contains `instant`.
pub fn active_period_at<'a, Tz: TimeZone>(
    major: &'a [ActivityPeriod],
    minor: &'a [ActivityPeriod],
    instant: &DateTime<Tz>,
) -> Option<&'a ActivityPeriod> {
    major.iter().chain(minor).find(|p| p.contains(instant))
}
