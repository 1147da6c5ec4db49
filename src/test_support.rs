use clap::Parser;

use crate::{
    cli::Cli,
    domain::weather::{CurrentConditions, DailyForecast, ForecastBundle, Location, TempUnit},
};

/// 2026-03-14 00:00 in Hong Kong.
pub(crate) const HK_MIDNIGHT: i64 = 1_773_417_600;
/// 06:00 and 18:00 local on the same day.
pub(crate) const HK_SUNRISE: i64 = 1_773_439_200;
pub(crate) const HK_SUNSET: i64 = 1_773_482_400;

pub(crate) fn state_test_cli() -> Cli {
    Cli::parse_from(["skyclock", "--backend-url", "http://127.0.0.1:1"])
}

pub(crate) fn hong_kong() -> Location {
    Location {
        time_zone: chrono_tz::Asia::Hong_Kong,
        latitude: 22.2783,
        longitude: 114.1747,
        region_name: Some("Central and Western".to_string()),
        country_name: Some("Hong Kong".to_string()),
    }
}

pub(crate) fn sample_bundle() -> ForecastBundle {
    let icons = ["clear-day", "rain", "cloudy", "partly-cloudy-day", "fog"];
    let daily = icons
        .iter()
        .enumerate()
        .map(|(idx, icon)| {
            let offset = 86_400 * idx as i64;
            DailyForecast {
                time: Some(HK_MIDNIGHT + offset),
                sunrise_time: Some(HK_SUNRISE + offset),
                sunset_time: Some(HK_SUNSET + offset),
                apparent_temperature_max: Some(28.4 + idx as f64),
                apparent_temperature_min: Some(21.6),
                icon: Some((*icon).to_string()),
            }
        })
        .collect();

    ForecastBundle {
        location: hong_kong(),
        current: CurrentConditions {
            temperature: Some(26.7),
            icon: Some("clear-day".to_string()),
            summary: Some("Clear".to_string()),
        },
        unit: TempUnit::Degree,
        daily,
    }
}
