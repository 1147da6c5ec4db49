use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::{
    app::ticker::ClockReading,
    domain::weather::{ForecastBundle, Location},
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    LocationResolved(Location),
    ForecastLoaded(ForecastBundle),
    PipelineFailed(String),
    /// A reading from the ticker started as the given generation.
    Tick(u64, ClockReading),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
