//! Moon age, illumination and phase from a mean synodic month.
//!
//! The moon is modelled as a uniform clock running from a fixed reference
//! new moon. Moonrise and moonset are not computed from the lunar orbit:
//! they are the sun's events, shifted by half a day around full moon.

use std::f64::consts::TAU;

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

use crate::types::{MoonPhase, MoonState};

pub const SYNODIC_MONTH_DAYS: f64 = 29.53058867;
pub const SYNODIC_MONTH_SECONDS: f64 = SYNODIC_MONTH_DAYS * 86_400.0;

/// Unix timestamp of the reference new moon, 2000-01-06T18:14:00Z.
pub const REFERENCE_NEW_MOON_UNIX: i64 = 947_182_440;

pub fn reference_new_moon() -> DateTime<Utc> {
    DateTime::from_timestamp(REFERENCE_NEW_MOON_UNIX, 0).unwrap_or_default()
}

/// Fraction of the synodic month elapsed at `instant`, in [0, 1).
pub fn moon_age_fraction<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    let utc = instant.with_timezone(&Utc);
    let elapsed = (utc.timestamp() - REFERENCE_NEW_MOON_UNIX) as f64
        + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
    let fraction = (elapsed / SYNODIC_MONTH_SECONDS).rem_euclid(1.0);
    // rem_euclid may round a tiny negative remainder up to exactly 1.0
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Lit share of the disk, 0 at new moon and 100 at full moon.
pub fn illumination_percent(age_fraction: f64) -> f64 {
    ((1.0 - (age_fraction * TAU).cos()) / 2.0 * 100.0).clamp(0.0, 100.0)
}

pub fn moon_state<Tz: TimeZone>(instant: &DateTime<Tz>) -> MoonState {
    let age_fraction = moon_age_fraction(instant);
    MoonState {
        age_fraction,
        illumination_percent: illumination_percent(age_fraction),
        phase: MoonPhase::from_age_fraction(age_fraction),
    }
}

pub fn moon_phase<Tz: TimeZone>(instant: &DateTime<Tz>) -> MoonPhase {
    moon_state(instant).phase
}

/// Offset applied to a sun event to obtain the matching moon event.
pub fn moon_event_offset(phase: MoonPhase) -> Duration {
    match phase {
        MoonPhase::Full => Duration::hours(12),
        _ => Duration::zero(),
    }
}

/// Moonrise (or moonset) derived from the sunrise (or sunset) of the same day.
pub fn moon_event_from_sun(
    sun_event: DateTime<FixedOffset>,
    phase: MoonPhase,
) -> Option<DateTime<FixedOffset>> {
    sun_event.checked_add_signed(moon_event_offset(phase))
}
