use std::time::Duration;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    data::{build_client, endpoint, post_json},
    domain::weather::Location,
};

const LOCATION_PATH: &str = "/v1/location";

#[derive(Debug, Clone)]
pub struct LocationClient {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
struct LocationRequest<'a> {
    ip: &'a str,
}

#[derive(Debug, Deserialize)]
struct LocationResponse {
    time_zone: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    region_name: Option<String>,
    country_name: Option<String>,
}

impl LocationClient {
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            url: endpoint(base_url, LOCATION_PATH),
        })
    }

    pub async fn resolve(&self, ip: &str) -> Result<Location> {
        let response = post_json(&self.client, &self.url, &LocationRequest { ip }, "location")
            .await?;
        let payload: LocationResponse = response
            .json()
            .await
            .context("failed to decode location payload")?;
        into_location(payload)
    }
}

fn into_location(payload: LocationResponse) -> Result<Location> {
    let zone = payload
        .time_zone
        .context("location payload has no time_zone")?;
    let time_zone: Tz = zone
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown time zone {zone:?}"))?;
    let latitude = payload
        .latitude
        .filter(|lat| lat.is_finite() && (-90.0..=90.0).contains(lat))
        .context("location payload has no usable latitude")?;
    let longitude = payload
        .longitude
        .filter(|lon| lon.is_finite() && (-180.0..=180.0).contains(lon))
        .context("location payload has no usable longitude")?;

    Ok(Location {
        time_zone,
        latitude,
        longitude,
        region_name: payload.region_name,
        country_name: payload.country_name,
    })
}
