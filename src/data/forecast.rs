use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::{
    data::{build_client, endpoint, post_json},
    domain::weather::{CurrentConditions, DailyForecast, ForecastBundle, Location, TempUnit},
};

const WEATHER_PATH: &str = "/v1/weather";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
struct ForecastRequest {
    lat: f64,
    long: f64,
}

impl ForecastClient {
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            url: endpoint(base_url, WEATHER_PATH),
        })
    }

    pub async fn fetch(&self, location: Location) -> Result<ForecastBundle> {
        let request = ForecastRequest {
            lat: location.latitude,
            long: location.longitude,
        };
        let response = post_json(&self.client, &self.url, &request, "forecast").await?;
        let payload: ForecastResponse = response
            .json()
            .await
            .context("failed to parse forecast payload")?;

        Ok(into_bundle(location, payload))
    }
}

fn into_bundle(location: Location, payload: ForecastResponse) -> ForecastBundle {
    let current = payload.currently.unwrap_or_default();
    let daily = payload
        .daily
        .and_then(|block| block.data)
        .unwrap_or_default();

    ForecastBundle {
        location,
        current: CurrentConditions {
            temperature: current.temperature,
            icon: non_blank(current.icon),
            summary: non_blank(current.summary),
        },
        unit: TempUnit::from_flag(payload.flags.and_then(|f| f.units).as_deref()),
        daily: daily.into_iter().map(parse_day).collect(),
    }
}

// A day that is not an object still holds its slot, with every field missing.
fn parse_day(raw: serde_json::Value) -> DailyForecast {
    let day: DayBlock = serde_json::from_value(raw).unwrap_or_default();
    DailyForecast {
        time: day.time,
        sunrise_time: day.sunrise_time,
        sunset_time: day.sunset_time,
        apparent_temperature_max: day.apparent_temperature_max,
        apparent_temperature_min: day.apparent_temperature_min,
        icon: non_blank(day.icon),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads a field as `T`, treating a value of the wrong type like a missing one.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default, deserialize_with = "lenient")]
    currently: Option<CurrentBlock>,
    #[serde(default, deserialize_with = "lenient")]
    flags: Option<FlagsBlock>,
    #[serde(default, deserialize_with = "lenient")]
    daily: Option<DailyBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct CurrentBlock {
    #[serde(default, deserialize_with = "lenient")]
    temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    icon: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlagsBlock {
    #[serde(default, deserialize_with = "lenient")]
    units: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    #[serde(default, deserialize_with = "lenient")]
    data: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayBlock {
    #[serde(default, deserialize_with = "lenient")]
    time: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    sunrise_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    sunset_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    apparent_temperature_max: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    apparent_temperature_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    icon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::temp_label;

    fn location() -> Location {
        Location::new(chrono_tz::Asia::Hong_Kong, 22.28, 114.17)
    }

    #[test]
    fn missing_blocks_fall_back_to_empty_fields() {
        let payload: ForecastResponse = serde_json::from_str("{}").expect("json");
        let bundle = into_bundle(location(), payload);
        assert!(bundle.current.temperature.is_none());
        assert!(bundle.daily.is_empty());
        assert_eq!(bundle.unit, TempUnit::Degree);
    }

    #[test]
    fn reads_camel_case_daily_fields() {
        let payload: ForecastResponse = serde_json::from_value(serde_json::json!({
            "currently": { "temperature": 27.4, "icon": "clear-day", "summary": "Clear" },
            "flags": { "units": "us" },
            "daily": { "data": [
                {
                    "time": 1_773_417_600,
                    "sunriseTime": 1_773_439_200,
                    "sunsetTime": 1_773_482_400,
                    "apparentTemperatureMax": 29.1,
                    "apparentTemperatureMin": 21.7,
                    "icon": "partly-cloudy-day"
                }
            ]}
        }))
        .expect("json");

        let bundle = into_bundle(location(), payload);
        assert_eq!(bundle.unit, TempUnit::Fahrenheit);
        assert_eq!(bundle.current.summary.as_deref(), Some("Clear"));
        let today = bundle.today().expect("today");
        assert_eq!(today.sunrise_time, Some(1_773_439_200));
        assert_eq!(today.apparent_temperature_min, Some(21.7));
    }

    #[test]
    fn mistyped_fields_become_placeholders() {
        let payload: ForecastResponse = serde_json::from_value(serde_json::json!({
            "currently": { "temperature": "warm", "icon": 7, "summary": "Clear" },
            "flags": "si",
            "daily": { "data": [
                { "time": 1_773_417_600, "sunriseTime": 1_773_439_200, "sunsetTime": 1_773_482_400 },
                {
                    "time": 1_773_504_000,
                    "apparentTemperatureMax": "n/a",
                    "apparentTemperatureMin": 20.2,
                    "icon": "rain"
                },
                "not a day",
                { "time": 1_773_676_800, "apparentTemperatureMax": 30.6 }
            ]}
        }))
        .expect("json");

        let bundle = into_bundle(location(), payload);
        assert_eq!(bundle.current_temp_label(), "--");
        assert!(bundle.current.icon.is_none());
        assert_eq!(bundle.current.summary.as_deref(), Some("Clear"));
        assert_eq!(bundle.unit, TempUnit::Degree);
        assert_eq!(bundle.daily.len(), 4);

        let second = &bundle.daily[1];
        assert_eq!(temp_label(second.apparent_temperature_max, bundle.unit), "--");
        assert_eq!(temp_label(second.apparent_temperature_min, bundle.unit), "20º");
        assert_eq!(second.icon.as_deref(), Some("rain"));
        assert!(bundle.daily[2].time.is_none());
        assert_eq!(bundle.daily[3].apparent_temperature_max, Some(30.6));
        assert!(bundle.sun_window(chrono::Duration::minutes(10)).is_some());
    }

    #[test]
    fn blank_strings_are_treated_as_missing() {
        let payload: ForecastResponse = serde_json::from_value(serde_json::json!({
            "currently": { "icon": " ", "summary": "" },
            "daily": { "data": [ {} ] }
        }))
        .expect("json");

        let bundle = into_bundle(location(), payload);
        assert!(bundle.current.icon.is_none());
        assert!(bundle.current.summary.is_none());
        assert_eq!(bundle.daily.len(), 1);
    }
}
