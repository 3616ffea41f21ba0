//! Sunrise and sunset from the cosine declination approximation.
//!
//! Hours come out on the UT clock (`12 ∓ H/15 − lon/15`) and are placed on
//! local mean time, the clock whose offset from UTC is `lon/15` hours. No
//! IANA zone is involved; converting to legal time is left to callers.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

use crate::angles::{self, DEGREES_PER_HOUR};
use crate::types::{SunCondition, SunHours};

const SECONDS_PER_DEGREE_LONGITUDE: f64 = 240.0;

/// Sunrise/sunset hours on the UT clock for a day of the year.
///
/// When the sun never sets (polar day) the hour angle is taken as 180°,
/// when it never rises (polar night) as 0°, so both events collapse onto
/// the day's edges or onto solar noon respectively.
pub fn sun_hours(latitude: f64, longitude: f64, day_of_year: i32) -> SunHours {
    let decl = angles::solar_declination(day_of_year);
    let cos_h = angles::cos_sunrise_hour_angle(latitude, decl);

    let (h_deg, condition) = if cos_h >= 1.0 {
        (0.0, SunCondition::PolarNight)
    } else if cos_h <= -1.0 {
        (180.0, SunCondition::PolarDay)
    } else {
        (angles::rad_to_deg(cos_h.acos()), SunCondition::Normal)
    };

    let half_day = h_deg / DEGREES_PER_HOUR;
    let noon = solar_noon_hours(longitude);
    SunHours {
        sunrise: noon - half_day,
        sunset: noon + half_day,
        condition,
    }
}

/// Solar noon on the UT clock.
pub fn solar_noon_hours(longitude: f64) -> f64 {
    12.0 - angles::longitude_hours(longitude)
}

/// UTC offset of local mean time at `longitude`, rounded to the second.
pub fn local_mean_time_offset(longitude: f64) -> FixedOffset {
    let seconds = (longitude.clamp(-180.0, 180.0) * SECONDS_PER_DEGREE_LONGITUDE).round();
    // NaN casts to 0, i.e. UTC
    FixedOffset::east_opt(seconds as i32).unwrap_or_else(|| Utc.fix())
}

/// Local midnight at the start of `date`.
pub fn local_midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<FixedOffset> {
    let naive = date.and_time(NaiveTime::MIN);
    offset
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| offset.from_utc_datetime(&naive))
}

/// Places fractional local clock hours on `date`, truncated to the minute.
/// Hours of 24 and beyond are pinned to 23:59 of the same day.
pub fn at_local_clock(
    date: NaiveDate,
    offset: FixedOffset,
    hours: f64,
) -> Option<DateTime<FixedOffset>> {
    // offset rounding can leave a polar-day sunrise a fraction of a second before midnight
    let hours = if (-1.0 / 60.0..0.0).contains(&hours) { 0.0 } else { hours };
    let (hour, minute) = angles::hours_to_time(hours)?;
    let (hour, minute) = angles::normalize_clock(hour, minute);
    let naive = date.and_hms_opt(hour, minute, 0)?;
    offset.from_local_datetime(&naive).single()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEvents {
    /// `None` when the hour could not be placed on the local clock.
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
    pub condition: SunCondition,
}

pub fn sun_events(date: NaiveDate, latitude: f64, longitude: f64) -> SunEvents {
    let hours = sun_hours(latitude, longitude, angles::date_day_of_year(date));
    let offset = local_mean_time_offset(longitude);
    let shift = f64::from(offset.local_minus_utc()) / 3600.0;
    SunEvents {
        sunrise: at_local_clock(date, offset, hours.sunrise + shift),
        sunset: at_local_clock(date, offset, hours.sunset + shift),
        condition: hours.condition,
    }
}
