//! Display strings shared by the terminal widgets and the one-shot snapshot.

use crate::{
    app::ticker::ClockReading,
    cli::IconMode,
    domain::weather::{ForecastBundle, PLACEHOLDER, temp_label, weather_icon},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayFields {
    pub headline: String,
    pub temperature: String,
    pub icon: &'static str,
    pub summary: String,
    pub max: String,
    pub min: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlookDay {
    pub weekday: String,
    pub icon: &'static str,
    pub max: String,
}

pub fn today_fields(bundle: &ForecastBundle, icon_mode: IconMode) -> TodayFields {
    let today = bundle.today();
    TodayFields {
        headline: format!(
            "{}, {}",
            bundle.location.display_name(),
            bundle.today_label()
        ),
        temperature: bundle.current_temp_label(),
        icon: weather_icon(bundle.current.icon.as_deref(), icon_mode),
        summary: bundle
            .current
            .summary
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        max: format!(
            "{} max",
            temp_label(today.and_then(|d| d.apparent_temperature_max), bundle.unit)
        ),
        min: format!(
            "{} min",
            temp_label(today.and_then(|d| d.apparent_temperature_min), bundle.unit)
        ),
    }
}

pub fn outlook_days(bundle: &ForecastBundle, icon_mode: IconMode) -> Vec<OutlookDay> {
    bundle
        .outlook()
        .iter()
        .map(|day| OutlookDay {
            weekday: day.weekday_label(bundle.location.time_zone),
            icon: weather_icon(day.icon.as_deref(), icon_mode),
            max: temp_label(day.apparent_temperature_max, bundle.unit),
        })
        .collect()
}

/// `("HH:mm", "Phase")`, with placeholders before the first tick.
pub fn clock_fields(reading: Option<&ClockReading>) -> (String, &'static str) {
    match reading {
        Some(reading) => (
            reading.time_label.clone(),
            reading.phase.map_or(PLACEHOLDER, |phase| phase.label()),
        ),
        None => ("--:--".to_string(), PLACEHOLDER),
    }
}
