use chrono::{Datelike, Duration, NaiveDate};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    (sum + day) as i32
}

pub fn date_day_of_year(date: NaiveDate) -> i32 {
    day_of_year(date.year(), date.month(), date.day())
}

/// Solar declination in degrees for a day of the year (1-based).
pub fn solar_declination(n: i32) -> f64 {
    -EARTH_AXIAL_TILT * deg_to_rad((360.0 / 365.0) * (n + 10) as f64).cos()
}

/// Cosine of the sunrise hour angle. Values outside [-1, 1] mean the sun
/// stays above (<= -1) or below (>= 1) the horizon all day.
pub fn cos_sunrise_hour_angle(latitude: f64, declination: f64) -> f64 {
    -deg_to_rad(latitude).tan() * deg_to_rad(declination).tan()
}

/// Folds a longitude into [-180, 180).
pub fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

/// Hours east of Greenwich for a longitude in degrees.
pub fn longitude_hours(longitude: f64) -> f64 {
    longitude / DEGREES_PER_HOUR
}

/// Splits fractional clock hours into (hour, minute), truncating seconds.
pub fn hours_to_time(hours: f64) -> Option<(u32, u32)> {
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }
    let total_minutes = (hours * 60.0).floor() as i64;
    let hour = u32::try_from(total_minutes / 60).unwrap_or(u32::MAX);
    Some((hour, (total_minutes % 60) as u32))
}

/// Clamps an (hour, minute) pair into the representable clock day.
pub fn normalize_clock(hour: u32, minute: u32) -> (u32, u32) {
    if hour >= 24 {
        (23, 59)
    } else {
        (hour, minute.min(59))
    }
}

/// Converts fractional minutes into a `Duration`, rejecting non-finite or
/// out-of-range values.
pub fn minutes_duration(minutes: f64) -> Option<Duration> {
    let seconds = (minutes * 60.0).round();
    if !seconds.is_finite() || seconds.abs() > i64::MAX as f64 / 1000.0 {
        return None;
    }
    Duration::try_seconds(seconds as i64)
}
