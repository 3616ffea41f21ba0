pub mod angles;
pub mod config;
pub mod error;
pub mod moon;
pub mod periods;
pub mod scoring;
pub mod snapshot;
pub mod sun;
pub mod types;

pub use angles::{
    date_day_of_year, day_of_year, deg_to_rad, rad_to_deg, solar_declination,
    wrap_longitude, DEGREES_PER_HOUR, EARTH_AXIAL_TILT, MINUTES_PER_DEGREE,
};

pub use config::SolunarConfig;
pub use error::{SolunarError, SolunarResult};

pub use moon::{
    illumination_percent, moon_age_fraction, moon_phase, moon_state, reference_new_moon,
    SYNODIC_MONTH_DAYS, SYNODIC_MONTH_SECONDS,
};

pub use periods::{active_period_at, all_periods_chronological, solunar_periods, SolunarPeriods};

pub use scoring::{day_quality_index, day_rating, period_score, rank_fishing_windows};

pub use snapshot::{
    best_days, compute_range, compute_range_par, compute_snapshot, compute_snapshot_at,
    forecast, forecast_day, forecast_range,
};

pub use sun::{local_mean_time_offset, sun_events, sun_hours, SunEvents};

pub use types::{
    ActivityPeriod, Coordinate, DayForecast, DayRating, Degradation, FishingWindowScore,
    MoonPhase, MoonState, PeriodKind, PeriodSlot, SolunarSnapshot, SunCondition, SunHours,
    WindowRating,
};
