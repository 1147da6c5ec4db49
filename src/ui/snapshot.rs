use std::fmt::Write as _;

use crate::{
    app::ticker::ClockReading,
    cli::IconMode,
    domain::weather::ForecastBundle,
    ui::fields::{clock_fields, outlook_days, today_fields},
};

/// Plain-text rendering of the dashboard for `--one-shot`.
pub fn render_text(
    bundle: &ForecastBundle,
    reading: &ClockReading,
    icon_mode: IconMode,
) -> String {
    let today = today_fields(bundle, icon_mode);
    let (time, phase) = clock_fields(Some(reading));
    let background = reading.phase.map_or("bg-none", |p| p.background_class());

    let mut out = String::new();
    let _ = writeln!(out, "{}", today.headline);
    let _ = writeln!(out, "{}  {} {}", today.temperature, today.icon, today.summary);
    let _ = writeln!(out, "{}  {}", today.max, today.min);
    for day in outlook_days(bundle, icon_mode) {
        let _ = writeln!(out, "{:<4} {:<4} {}", day.weekday, day.icon, day.max);
    }
    let _ = write!(out, "{time}  {phase} ({background})");
    out
}
