#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use clap::Parser;
use skyclock::{
    cli::Cli,
    domain::weather::{CurrentConditions, DailyForecast, ForecastBundle, Location, TempUnit},
};

pub const CLIENT_IP: &str = "47.90.96.247";
/// 2026-03-14 00:00 Hong Kong time.
pub const HK_MIDNIGHT: i64 = 1_773_417_600;
/// 06:00 and 18:00 Hong Kong time on the same day.
pub const HK_SUNRISE: i64 = 1_773_439_200;
pub const HK_SUNSET: i64 = 1_773_482_400;
pub const HK_LATITUDE: f64 = 22.2783;
pub const HK_LONGITUDE: f64 = 114.1747;

pub fn cli_for(backend_url: &str) -> Cli {
    Cli::parse_from([
        "skyclock",
        "--backend-url",
        backend_url,
        "--tick-ms",
        "100",
        "--timeout-secs",
        "5",
        "--ascii-icons",
    ])
}

/// Wall-clock instant for a Hong Kong local time on the fixture day.
pub fn hk_time(hour: u32, minute: u32) -> DateTime<Utc> {
    chrono_tz::Asia::Hong_Kong
        .with_ymd_and_hms(2026, 3, 14, hour, minute, 0)
        .single()
        .expect("valid Hong Kong time")
        .with_timezone(&Utc)
}

pub fn location_payload() -> serde_json::Value {
    serde_json::json!({
        "ip": CLIENT_IP,
        "country_code": "HK",
        "country_name": "Hong Kong",
        "region_code": "HCW",
        "region_name": "Central and Western",
        "city": "Hong Kong",
        "time_zone": "Asia/Hong_Kong",
        "latitude": HK_LATITUDE,
        "longitude": HK_LONGITUDE
    })
}

pub fn weather_payload() -> serde_json::Value {
    let days: Vec<_> = (0..8_i64)
        .map(|idx| {
            serde_json::json!({
                "time": HK_MIDNIGHT + idx * 86_400,
                "sunriseTime": HK_SUNRISE + idx * 86_400,
                "sunsetTime": HK_SUNSET + idx * 86_400,
                "apparentTemperatureMax": 28.4 + idx as f64,
                "apparentTemperatureMin": 21.6,
                "icon": if idx % 2 == 0 { "clear-day" } else { "rain" },
                "summary": "Mostly sunny"
            })
        })
        .collect();

    serde_json::json!({
        "latitude": HK_LATITUDE,
        "longitude": HK_LONGITUDE,
        "timezone": "Asia/Hong_Kong",
        "currently": {
            "time": HK_SUNSET,
            "temperature": 26.7,
            "icon": "clear-day",
            "summary": "Clear"
        },
        "flags": { "units": "si" },
        "daily": { "data": days }
    })
}

pub fn hong_kong() -> Location {
    Location {
        time_zone: chrono_tz::Asia::Hong_Kong,
        latitude: HK_LATITUDE,
        longitude: HK_LONGITUDE,
        region_name: Some("Central and Western".to_string()),
        country_name: Some("Hong Kong".to_string()),
    }
}

pub fn fixture_bundle() -> ForecastBundle {
    let daily = (0..5_i64)
        .map(|idx| DailyForecast {
            time: Some(HK_MIDNIGHT + idx * 86_400),
            sunrise_time: Some(HK_SUNRISE + idx * 86_400),
            sunset_time: Some(HK_SUNSET + idx * 86_400),
            apparent_temperature_max: Some(28.4 + idx as f64),
            apparent_temperature_min: Some(21.6),
            icon: Some(if idx % 2 == 0 { "clear-day" } else { "rain" }.to_string()),
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
