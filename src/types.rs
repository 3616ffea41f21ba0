use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use serde::Serialize;

use crate::error::{SolunarError, SolunarResult};

/// A validated observer position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> SolunarResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SolunarError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SolunarError::InvalidCoordinate(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Classifies a moon age fraction in [0, 1).
    pub fn from_age_fraction(fraction: f64) -> Self {
        match fraction {
            f if f < 0.03 || f >= 0.97 => MoonPhase::New,
            f if f < 0.22 => MoonPhase::WaxingCrescent,
            f if f < 0.28 => MoonPhase::FirstQuarter,
            f if f < 0.47 => MoonPhase::WaxingGibbous,
            f if f < 0.53 => MoonPhase::Full,
            f if f < 0.72 => MoonPhase::WaningGibbous,
            f if f < 0.78 => MoonPhase::LastQuarter,
            _ => MoonPhase::WaningCrescent,
        }
    }

    /// New or full moon.
    pub fn is_syzygy(self) -> bool {
        matches!(self, MoonPhase::New | MoonPhase::Full)
    }

    pub fn is_quarter(self) -> bool {
        matches!(self, MoonPhase::FirstQuarter | MoonPhase::LastQuarter)
    }

    pub fn label(self) -> &'static str {
        match self {
            MoonPhase::New => "New moon",
            MoonPhase::WaxingCrescent => "Waxing crescent",
            MoonPhase::FirstQuarter => "First quarter",
            MoonPhase::WaxingGibbous => "Waxing gibbous",
            MoonPhase::Full => "Full moon",
            MoonPhase::WaningGibbous => "Waning gibbous",
            MoonPhase::LastQuarter => "Last quarter",
            MoonPhase::WaningCrescent => "Waning crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonState {
    pub age_fraction: f64,
    pub illumination_percent: f64,
    pub phase: MoonPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SunCondition {
    Normal,
    /// Sun above the horizon for the whole day.
    PolarDay,
    /// Sun below the horizon for the whole day.
    PolarNight,
}

/// Sunrise and sunset as fractional hours on the UT clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunHours {
    pub sunrise: f64,
    pub sunset: f64,
    pub condition: SunCondition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodKind {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodSlot {
    UpperTransit,
    LowerTransit,
    Moonrise,
    Moonset,
}

impl PeriodSlot {
    pub fn kind(self) -> PeriodKind {
        match self {
            PeriodSlot::UpperTransit | PeriodSlot::LowerTransit => PeriodKind::Major,
            PeriodSlot::Moonrise | PeriodSlot::Moonset => PeriodKind::Minor,
        }
    }
}

/// A best-effort fallback taken while building a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "slot", rename_all = "kebab-case")]
pub enum Degradation {
    /// Sunrise could not be placed on the clock; local midnight was used.
    SunriseFallback,
    /// Sunset could not be placed on the clock; local midnight was used.
    SunsetFallback,
    MoonriseUnavailable,
    MoonsetUnavailable,
    PeriodDropped(PeriodSlot),
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::SunriseFallback => f.write_str("sunrise fell back to midnight"),
            Degradation::SunsetFallback => f.write_str("sunset fell back to midnight"),
            Degradation::MoonriseUnavailable => f.write_str("moonrise unavailable"),
            Degradation::MoonsetUnavailable => f.write_str("moonset unavailable"),
            Degradation::PeriodDropped(slot) => write!(f, "{:?} period dropped", slot),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActivityPeriod {
    pub kind: PeriodKind,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl ActivityPeriod {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn center(&self) -> DateTime<FixedOffset> {
        self.start + self.duration() / 2
    }

    /// Half-open containment: `start <= instant < end`.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let instant = instant.fixed_offset();
        self.start <= instant && instant < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolunarSnapshot {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    /// Offset of local mean time from UTC, in seconds.
    pub utc_offset_seconds: i32,
    pub moon: MoonState,
    pub moon_phase: MoonPhase,
    pub illumination_percent: f64,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    pub moonrise: Option<DateTime<FixedOffset>>,
    pub moonset: Option<DateTime<FixedOffset>>,
    pub sun_condition: SunCondition,
    pub major_periods: Vec<ActivityPeriod>,
    pub minor_periods: Vec<ActivityPeriod>,
    pub degradations: Vec<Degradation>,
}

impl SolunarSnapshot {
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayRating {
    Poor,
    Average,
    Good,
    VeryGood,
    Excellent,
}

impl DayRating {
    pub fn from_index(index: u8) -> Self {
        match index {
            80..=u8::MAX => DayRating::Excellent,
            60..=79 => DayRating::VeryGood,
            40..=59 => DayRating::Good,
            20..=39 => DayRating::Average,
            _ => DayRating::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayRating::Excellent => "Excellent",
            DayRating::VeryGood => "Very good",
            DayRating::Good => "Good",
            DayRating::Average => "Average",
            DayRating::Poor => "Poor",
        }
    }
}

impl fmt::Display for DayRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowRating {
    Average,
    Good,
    VeryGood,
    Excellent,
}

impl WindowRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => WindowRating::Excellent,
            60..=79 => WindowRating::VeryGood,
            40..=59 => WindowRating::Good,
            _ => WindowRating::Average,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WindowRating::Excellent => "Excellent",
            WindowRating::VeryGood => "Very good",
            WindowRating::Good => "Good",
            WindowRating::Average => "Average",
        }
    }
}

impl fmt::Display for WindowRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FishingWindowScore {
    pub period: ActivityPeriod,
    pub score: u8,
    pub reason: String,
    pub rating: WindowRating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayForecast {
    pub snapshot: SolunarSnapshot,
    pub quality_index: u8,
    pub rating: DayRating,
    pub windows: Vec<FishingWindowScore>,
}
