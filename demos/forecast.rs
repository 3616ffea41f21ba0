use chrono::NaiveDate;
use chrono_tz::Pacific::Noumea;

use solunar::{compute_snapshot, day_quality_index, rank_fishing_windows, DayRating};

fn main() {
    let latitude = -22.2758;
    let longitude = 166.4580;
    let date = NaiveDate::from_ymd_opt(2026, 3, 21).unwrap();

    let snapshot = compute_snapshot(date, latitude, longitude);
    let index = day_quality_index(&snapshot);

    println!("=== Solunar Forecast Example ===");
    println!("Location: Nouméa ({:.4}°S, {:.4}°E)", -latitude, longitude);
    println!("Date: {}", date);
    println!();
    println!("--- Moon ---");
    println!("Phase: {}", snapshot.moon_phase);
    println!("Illumination: {:.1}%", snapshot.illumination_percent);
    println!("Age: {:.3} of a synodic month", snapshot.moon.age_fraction);
    println!();
    println!("--- Sun (local mean time / Pacific/Noumea) ---");
    println!(
        "Sunrise: {} / {}",
        snapshot.sunrise.format("%H:%M"),
        snapshot.sunrise.with_timezone(&Noumea).format("%H:%M %Z")
    );
    println!(
        "Sunset: {} / {}",
        snapshot.sunset.format("%H:%M"),
        snapshot.sunset.with_timezone(&Noumea).format("%H:%M %Z")
    );
    println!();
    println!("--- Fishing Windows ---");
    for w in rank_fishing_windows(&snapshot) {
        println!(
            "{:>3} {}: {} - {}",
            w.score,
            w.reason,
            w.period.start.with_timezone(&Noumea).format("%d %H:%M"),
            w.period.end.with_timezone(&Noumea).format("%d %H:%M"),
        );
    }
    println!();
    println!("Day quality: {}/100 ({})", index, DayRating::from_index(index));
}
