use chrono::Duration;
use chrono_tz::Tz;

use crate::{
    cli::IconMode,
    domain::phase::{SunWindow, build_sun_window, local_instant},
};

pub const PLACEHOLDER: &str = "--";
pub const OUTLOOK_DAYS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Fahrenheit,
    Degree,
}

impl TempUnit {
    /// Maps the backend's `flags.units` value; anything but `us` is metric.
    #[must_use]
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("us") => Self::Fahrenheit,
            _ => Self::Degree,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "F",
            Self::Degree => "º",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub time_zone: Tz,
    pub latitude: f64,
    pub longitude: f64,
    pub region_name: Option<String>,
    pub country_name: Option<String>,
}

impl Location {
    pub fn new(time_zone: Tz, latitude: f64, longitude: f64) -> Self {
        Self {
            time_zone,
            latitude,
            longitude,
            region_name: None,
            country_name: None,
        }
    }

    pub fn display_name(&self) -> String {
        non_empty(self.region_name.as_deref())
            .or_else(|| non_empty(self.country_name.as_deref()))
            .unwrap_or("Unknown location")
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub icon: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyForecast {
    pub time: Option<i64>,
    pub sunrise_time: Option<i64>,
    pub sunset_time: Option<i64>,
    pub apparent_temperature_max: Option<f64>,
    pub apparent_temperature_min: Option<f64>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ForecastBundle {
    pub location: Location,
    pub current: CurrentConditions,
    pub unit: TempUnit,
    pub daily: Vec<DailyForecast>,
}

impl ForecastBundle {
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }

    /// The days after today, at most [`OUTLOOK_DAYS`] of them.
    pub fn outlook(&self) -> &[DailyForecast] {
        let end = self.daily.len().min(OUTLOOK_DAYS + 1);
        self.daily.get(1..end).unwrap_or(&[])
    }

    pub fn sun_window(&self, transition: Duration) -> Option<SunWindow> {
        let today = self.today()?;
        build_sun_window(
            today.sunrise_time?,
            today.sunset_time?,
            self.location.time_zone,
            transition,
        )
    }

    pub fn current_temp_label(&self) -> String {
        temp_label(self.current.temperature, self.unit)
    }

    pub fn today_label(&self) -> String {
        self.today()
            .and_then(|day| day.time)
            .map_or_else(
                || PLACEHOLDER.to_string(),
                |time| format_local(time, self.location.time_zone, "%a %-d"),
            )
    }
}

impl DailyForecast {
    pub fn weekday_label(&self, tz: Tz) -> String {
        self.time.map_or_else(
            || PLACEHOLDER.to_string(),
            |time| format_local(time, tz, "%a"),
        )
    }
}

#[must_use]
pub fn round_temp(value: f64) -> i64 {
    value.round() as i64
}

pub fn temp_label(value: Option<f64>, unit: TempUnit) -> String {
    value.filter(|v| v.is_finite()).map_or_else(
        || PLACEHOLDER.to_string(),
        |v| format!("{}{}", round_temp(v), unit.symbol()),
    )
}

fn format_local(epoch_sec: i64, tz: Tz, pattern: &str) -> String {
    local_instant(epoch_sec, tz).map_or_else(
        || PLACEHOLDER.to_string(),
        |instant| instant.format(pattern).to_string(),
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Glyph for a forecast.io style icon name (`clear-day`, `rain`, ...).
pub fn weather_icon(icon: Option<&str>, mode: IconMode) -> &'static str {
    let Some(icon) = icon else {
        return PLACEHOLDER;
    };
    match mode {
        IconMode::Ascii => match icon {
            "clear-day" => "SUN",
            "clear-night" => "MON",
            "partly-cloudy-day" | "partly-cloudy-night" | "cloudy" => "CLD",
            "fog" => "FOG",
            "rain" => "RAN",
            "snow" | "sleet" => "SNW",
            "wind" => "WND",
            "thunderstorm" | "hail" => "THN",
            _ => "---",
        },
        IconMode::Emoji => match icon {
            "clear-day" => "☀️",
            "clear-night" => "🌙",
            "partly-cloudy-day" => "⛅",
            "partly-cloudy-night" | "cloudy" => "☁️",
            "fog" => "🌫️",
            "rain" => "🌧️",
            "snow" | "sleet" => "🌨️",
            "wind" => "💨",
            "thunderstorm" | "hail" => "⛈️",
            _ => "☁️",
        },
        IconMode::Unicode => match icon {
            "clear-day" => "☀",
            "clear-night" => "☾",
            "partly-cloudy-day" | "partly-cloudy-night" | "cloudy" => "☁",
            "fog" => "░",
            "rain" => "☂",
            "snow" | "sleet" => "❄",
            "wind" => "≋",
            "thunderstorm" | "hail" => "⚡",
            _ => "☁",
        },
    }
}
