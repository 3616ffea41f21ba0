//! Assembles one day's moon, sun and period data into a [`SolunarSnapshot`].
//!
//! Every entry point is total: inputs that cannot be placed on the
//! calendar fall back to local midnight or drop a period, and the fallback
//! is listed in `SolunarSnapshot::degradations`.

use std::cmp::Reverse;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, TimeZone};
use rayon::prelude::*;

use crate::angles;
use crate::moon;
use crate::periods;
use crate::scoring;
use crate::sun;
use crate::types::{
    DayForecast, DayRating, Degradation, MoonState, SolunarSnapshot, SunCondition,
};

/// Snapshot for `date`, with the moon evaluated at local noon.
pub fn compute_snapshot(date: NaiveDate, latitude: f64, longitude: f64) -> SolunarSnapshot {
    let longitude = angles::wrap_longitude(longitude);
    let offset = sun::local_mean_time_offset(longitude);
    let noon = sun::at_local_clock(date, offset, 12.0)
        .unwrap_or_else(|| sun::local_midnight(date, offset));
    build_snapshot(date, latitude, longitude, offset, moon::moon_state(&noon))
}

/// Snapshot for the local calendar day containing `instant`, with the moon
/// evaluated at `instant` itself.
pub fn compute_snapshot_at<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SolunarSnapshot {
    let longitude = angles::wrap_longitude(longitude);
    let offset = sun::local_mean_time_offset(longitude);
    let date = instant.with_timezone(&offset).date_naive();
    build_snapshot(date, latitude, longitude, offset, moon::moon_state(instant))
}

fn build_snapshot(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    offset: FixedOffset,
    moon_state: MoonState,
) -> SolunarSnapshot {
    let events = sun::sun_events(date, latitude, longitude);
    let midnight = sun::local_midnight(date, offset);
    let mut degradations = Vec::new();

    let sunrise = match events.sunrise {
        Some(t) => t,
        None => {
            degradations.push(Degradation::SunriseFallback);
            midnight
        }
    };
    let sunset = match events.sunset {
        Some(t) => t,
        None => {
            degradations.push(Degradation::SunsetFallback);
            midnight
        }
    };

    let moonrise = events
        .sunrise
        .and_then(|t| moon::moon_event_from_sun(t, moon_state.phase));
    if moonrise.is_none() {
        degradations.push(Degradation::MoonriseUnavailable);
    }
    let moonset = events
        .sunset
        .and_then(|t| moon::moon_event_from_sun(t, moon_state.phase));
    if moonset.is_none() {
        degradations.push(Degradation::MoonsetUnavailable);
    }

    let periods = periods::solunar_periods(date, offset, longitude, moonrise, moonset);
    degradations.extend(periods.dropped.iter().copied());

    if events.condition != SunCondition::Normal {
        tracing::debug!(%date, latitude, condition = ?events.condition, "sun does not cross the horizon");
    }
    for d in &degradations {
        tracing::warn!(%date, latitude, longitude, "degraded snapshot: {}", d);
    }
    tracing::debug!(
        %date,
        phase = %moon_state.phase,
        illumination = moon_state.illumination_percent,
        majors = periods.major.len(),
        minors = periods.minor.len(),
        "computed solunar snapshot"
    );

    SolunarSnapshot {
        date,
        latitude,
        longitude,
        utc_offset_seconds: offset.local_minus_utc(),
        moon: moon_state,
        moon_phase: moon_state.phase,
        illumination_percent: moon_state.illumination_percent,
        sunrise,
        sunset,
        moonrise,
        moonset,
        sun_condition: events.condition,
        major_periods: periods.major,
        minor_periods: periods.minor,
        degradations,
    }
}

fn range_dates(start: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..u64::from(days)).map_while(move |i| start.checked_add_days(Days::new(i)))
}

/// One snapshot per day starting at `start`, in date order. Stops early only
/// if the range runs past the last representable date.
pub fn compute_range(
    start: NaiveDate,
    days: u32,
    latitude: f64,
    longitude: f64,
) -> Vec<SolunarSnapshot> {
    range_dates(start, days)
        .map(|date| compute_snapshot(date, latitude, longitude))
        .collect()
}

/// Same output as [`compute_range`], computed on the rayon pool.
pub fn compute_range_par(
    start: NaiveDate,
    days: u32,
    latitude: f64,
    longitude: f64,
) -> Vec<SolunarSnapshot> {
    let dates: Vec<NaiveDate> = range_dates(start, days).collect();
    dates
        .into_par_iter()
        .map(|date| compute_snapshot(date, latitude, longitude))
        .collect()
}

pub fn forecast(snapshot: SolunarSnapshot) -> DayForecast {
    let quality_index = scoring::day_quality_index(&snapshot);
    let windows = scoring::rank_fishing_windows(&snapshot);
    DayForecast {
        snapshot,
        quality_index,
        rating: DayRating::from_index(quality_index),
        windows,
    }
}

pub fn forecast_day(date: NaiveDate, latitude: f64, longitude: f64) -> DayForecast {
    forecast(compute_snapshot(date, latitude, longitude))
}

pub fn forecast_range(
    start: NaiveDate,
    days: u32,
    latitude: f64,
    longitude: f64,
) -> Vec<DayForecast> {
    compute_range_par(start, days, latitude, longitude)
        .into_iter()
        .map(forecast)
        .collect()
}

/// The `limit` best days of the range by quality index, best first. Ties
/// keep the earlier day first.
pub fn best_days(
    start: NaiveDate,
    days: u32,
    latitude: f64,
    longitude: f64,
    limit: usize,
) -> Vec<DayForecast> {
    let mut forecasts = forecast_range(start, days, latitude, longitude);
    forecasts.sort_by_key(|f| Reverse(f.quality_index));
    forecasts.truncate(limit);
    forecasts
}
