//! Periodic clock driving the `HH:mm` label and the day-phase backdrop.
//!
//! The ticker owns an immutable [`DayPhaseClock`] (timezone plus sun window)
//! and reads wall time through a [`TimeSource`], so tests can swap in a
//! [`ManualTimeSource`] and step the clock without waiting.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::{
    app::events::AppEvent,
    domain::phase::{ClockTime, Phase, SunWindow, classify_phase},
};

pub const DEFAULT_TICK: Duration = Duration::from_millis(1000);

pub trait TimeSource: Send + Sync + std::fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualTimeSource {
    current: Mutex<DateTime<Utc>>,
}

impl ManualTimeSource {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += by;
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub time_label: String,
    pub phase: Option<Phase>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPhaseClock {
    pub time_zone: Tz,
    pub window: Option<SunWindow>,
}

impl DayPhaseClock {
    pub fn new(time_zone: Tz, window: Option<SunWindow>) -> Self {
        Self { time_zone, window }
    }

    pub fn reading_at(&self, instant: DateTime<Utc>) -> ClockReading {
        let local = instant.with_timezone(&self.time_zone);
        let now = ClockTime::of(&local);
        ClockReading {
            time_label: now.label(),
            phase: self.window.as_ref().map(|window| classify_phase(now, window)),
        }
    }
}

#[derive(Debug)]
pub struct TickerHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Cancels the periodic task; no further ticks are sent once this returns
    /// and the task has been dropped at its next await point.
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Fires immediately, then once per `period`, until stopped or until the
/// receiving side of `tx` goes away. Every tick carries `generation`.
pub fn start_ticker(
    face: DayPhaseClock,
    source: Arc<dyn TimeSource>,
    period: Duration,
    generation: u64,
    tx: mpsc::Sender<AppEvent>,
) -> TickerHandle {
    let task = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let reading = face.reading_at(source.now());
            if tx.send(AppEvent::Tick(generation, reading)).await.is_err() {
                break;
            }
        }
    });
    TickerHandle { generation, task }
}
