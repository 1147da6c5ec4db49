//! Two-stage fetch: resolve the location from an IP, then load its forecast.
//!
//! The forecast stage takes the location stage's typed result, so a failed
//! lookup ends the chain instead of requesting weather for unknown coordinates.

use std::time::Duration;

use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    app::events::AppEvent,
    cli::Cli,
    data::{forecast::ForecastClient, location::LocationClient},
    domain::weather::{ForecastBundle, Location},
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not set up backend client: {0:#}")]
    Setup(anyhow::Error),
    #[error("location lookup failed: {0:#}")]
    Location(anyhow::Error),
    #[error("forecast fetch failed: {0:#}")]
    Forecast(anyhow::Error),
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub backend_url: String,
    pub ip: String,
    pub timeout: Duration,
}

impl PipelineConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            backend_url: cli.backend_url.clone(),
            ip: cli.ip.clone(),
            timeout: cli.request_timeout(),
        }
    }

    pub fn clients(&self) -> Result<(LocationClient, ForecastClient), PipelineError> {
        let locations = LocationClient::with_base_url(&self.backend_url, self.timeout)
            .map_err(PipelineError::Setup)?;
        let forecasts = ForecastClient::with_base_url(&self.backend_url, self.timeout)
            .map_err(PipelineError::Setup)?;
        Ok((locations, forecasts))
    }
}

/// Owns the spawned fetch chain; dropping it does not cancel, [`abort`](Self::abort) does.
#[derive(Debug)]
pub struct PipelineHandle {
    task: JoinHandle<()>,
}

impl PipelineHandle {
    pub fn abort(&self) {
        self.task.abort();
    }
}

pub async fn resolve_location(client: &LocationClient, ip: &str) -> Result<Location, PipelineError> {
    client.resolve(ip).await.map_err(PipelineError::Location)
}

pub async fn fetch_forecast(
    client: &ForecastClient,
    location: Location,
) -> Result<ForecastBundle, PipelineError> {
    client.fetch(location).await.map_err(PipelineError::Forecast)
}

pub async fn run_pipeline(config: &PipelineConfig) -> Result<ForecastBundle, PipelineError> {
    let (locations, forecasts) = config.clients()?;
    let location = resolve_location(&locations, &config.ip).await?;
    fetch_forecast(&forecasts, location).await
}

pub fn start_pipeline(tx: &mpsc::Sender<AppEvent>, config: PipelineConfig) -> PipelineHandle {
    let tx = tx.clone();
    let task = tokio::spawn(async move {
        let event = match run_stages(&tx, &config).await {
            Ok(bundle) => AppEvent::ForecastLoaded(bundle),
            Err(err) => {
                log::error!("{err}");
                AppEvent::PipelineFailed(err.to_string())
            }
        };
        let _ = tx.send(event).await;
    });
    PipelineHandle { task }
}

async fn run_stages(
    tx: &mpsc::Sender<AppEvent>,
    config: &PipelineConfig,
) -> Result<ForecastBundle, PipelineError> {
    let (locations, forecasts) = config.clients()?;

    log::info!("resolving location for {}", config.ip);
    let location = resolve_location(&locations, &config.ip).await?;
    log::info!(
        "location resolved to {} ({})",
        location.display_name(),
        location.time_zone
    );
    let _ = tx.send(AppEvent::LocationResolved(location.clone())).await;

    let bundle = fetch_forecast(&forecasts, location).await?;
    log::info!("forecast loaded with {} daily entries", bundle.daily.len());
    Ok(bundle)
}
