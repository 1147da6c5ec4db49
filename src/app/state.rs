use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::AppEvent,
        pipeline::{PipelineConfig, PipelineHandle, start_pipeline},
        ticker::{
            ClockReading, DayPhaseClock, SystemTimeSource, TickerHandle, TimeSource, start_ticker,
        },
    },
    cli::{Cli, IconMode},
    domain::{
        phase::Phase,
        weather::{ForecastBundle, Location},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub location: Option<Location>,
    pub weather: Option<ForecastBundle>,
    pub clock_face: Option<DayPhaseClock>,
    pub reading: Option<ClockReading>,
    pub icon_mode: IconMode,
    pub time_source: Arc<dyn TimeSource>,
    pipeline: Option<PipelineHandle>,
    ticker: Option<TickerHandle>,
    ticker_generation: u64,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self::with_time_source(cli, Arc::new(SystemTimeSource))
    }

    pub fn with_time_source(cli: &Cli, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            mode: AppMode::Loading,
            running: true,
            loading_message: "Initializing...".to_string(),
            last_error: None,
            location: None,
            weather: None,
            clock_face: None,
            reading: None,
            icon_mode: cli.icon_mode(),
            time_source,
            pipeline: None,
            ticker: None,
            ticker_generation: 0,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        self.reading.as_ref().and_then(|reading| reading.phase)
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_stopped())
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.handle_bootstrap(tx, cli)?,
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::LocationResolved(location) => self.handle_location_resolved(location),
            AppEvent::ForecastLoaded(bundle) => self.handle_forecast_loaded(bundle, tx, cli),
            AppEvent::PipelineFailed(err) => self.handle_pipeline_failed(err),
            AppEvent::Tick(generation, reading) => self.handle_tick(generation, reading),
            AppEvent::Quit => self.shutdown(),
        }
        Ok(())
    }

    pub(crate) fn handle_bootstrap(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        cli.validate()?;
        if let Some(previous) = self.pipeline.take() {
            previous.abort();
        }
        self.mode = AppMode::Loading;
        self.loading_message = "Detecting location...".to_string();
        self.pipeline = Some(start_pipeline(tx, PipelineConfig::from_cli(cli)));
        Ok(())
    }

    pub(crate) fn handle_location_resolved(&mut self, location: Location) {
        self.loading_message = format!("Fetching weather for {}...", location.display_name());
        self.location = Some(location);
    }

    pub(crate) fn handle_forecast_loaded(
        &mut self,
        bundle: ForecastBundle,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) {
        let window = bundle.sun_window(cli.transition());
        if window.is_none() {
            log::warn!("forecast has no usable sunrise/sunset; day phase disabled");
        }
        let face = DayPhaseClock::new(bundle.location.time_zone, window);

        self.location = Some(bundle.location.clone());
        self.weather = Some(bundle);
        self.mode = AppMode::Ready;
        self.last_error = None;
        self.pipeline = None;
        self.clock_face = Some(face);
        self.reading = Some(face.reading_at(self.time_source.now()));

        self.stop_ticker();
        self.ticker_generation += 1;
        self.ticker = Some(start_ticker(
            face,
            Arc::clone(&self.time_source),
            cli.tick_period(),
            self.ticker_generation,
            tx.clone(),
        ));
    }

    pub(crate) fn handle_pipeline_failed(&mut self, err: String) {
        self.pipeline = None;
        self.mode = AppMode::Error;
        self.last_error = Some(err);
    }

    pub(crate) fn handle_tick(&mut self, generation: u64, reading: ClockReading) {
        // ticks still queued from a stopped ticker
        if self.ticker.as_ref().map(TickerHandle::generation) != Some(generation) {
            log::trace!(
                "dropping tick {} from ticker generation {generation}",
                reading.time_label
            );
            return;
        }

        let previous = self.phase();
        if previous != reading.phase
            && let Some(phase) = reading.phase
        {
            log::debug!(
                "day phase changed to {} ({}) at {}",
                phase.label(),
                phase.background_class(),
                reading.time_label
            );
        }
        self.reading = Some(reading);
    }

    pub(crate) async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        {
            tx.send(AppEvent::Quit).await?;
        }
        Ok(())
    }

    pub fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    pub fn shutdown(&mut self) {
        self.stop_ticker();
        if let Some(pipeline) = self.pipeline.take() {
            pipeline.abort();
        }
        self.mode = AppMode::Quit;
    }
}
