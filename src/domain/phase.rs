use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

pub const DEFAULT_TRANSITION_MINUTES: i64 = 10;
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Wall-clock time encoded as `hour * 100 + minute` (`0..=2359`).
///
/// Window construction and classification share this one encoding, so
/// `09:05` is always `905` and compares below `14:30` (`1430`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        u16::try_from(hour * 100 + minute).ok().map(Self)
    }

    #[must_use]
    pub fn from_encoded(value: u16) -> Option<Self> {
        Self::from_hm(u32::from(value / 100), u32::from(value % 100))
    }

    #[must_use]
    pub fn of<T: TimeZone>(instant: &DateTime<T>) -> Self {
        // hour() and minute() are always in range
        Self((instant.hour() * 100 + instant.minute()) as u16)
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn hour(self) -> u16 {
        self.0 / 100
    }

    #[must_use]
    pub fn minute(self) -> u16 {
        self.0 % 100
    }

    #[must_use]
    pub fn minute_of_day(self) -> u32 {
        u32::from(self.hour()) * 60 + u32::from(self.minute())
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Sunrise,
    Day,
    Sunset,
    Night,
}

impl Phase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Day => "Day",
            Self::Sunset => "Sunset",
            Self::Night => "Night",
        }
    }

    /// Background style class; sunrise and sunset share one look.
    #[must_use]
    pub fn background_class(self) -> &'static str {
        match self {
            Self::Sunrise | Self::Sunset => "bg-sunset",
            Self::Day => "bg-day",
            Self::Night => "bg-night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunWindow {
    pub sunrise_start: ClockTime,
    pub sunrise_end: ClockTime,
    pub sunset_start: ClockTime,
    pub sunset_end: ClockTime,
}

/// Local-time boundaries of today's sunrise and sunset transitions.
///
/// Returns `None` when either epoch (or epoch + transition) falls outside the
/// range chrono can represent.
#[must_use]
pub fn build_sun_window(
    sunrise_epoch_sec: i64,
    sunset_epoch_sec: i64,
    tz: Tz,
    transition: Duration,
) -> Option<SunWindow> {
    let sunrise = local_instant(sunrise_epoch_sec, tz)?;
    let sunset = local_instant(sunset_epoch_sec, tz)?;
    let sunrise_end = sunrise.checked_add_signed(transition)?;
    let sunset_end = sunset.checked_add_signed(transition)?;

    Some(SunWindow {
        sunrise_start: ClockTime::of(&sunrise),
        sunrise_end: ClockTime::of(&sunrise_end),
        sunset_start: ClockTime::of(&sunset),
        sunset_end: ClockTime::of(&sunset_end),
    })
}

/// Classifies `now` against the window; the first matching rule wins.
///
/// Windows whose transitions stay inside one calendar day use the bounds as
/// given. Once a transition runs past midnight, every bound is measured in
/// minutes after `sunrise_start` instead, so the ranges keep their order.
#[must_use]
pub fn classify_phase(now: ClockTime, window: &SunWindow) -> Phase {
    let bounds = [
        window.sunrise_start,
        window.sunrise_end,
        window.sunset_start,
        window.sunset_end,
    ];
    let wraps =
        window.sunrise_end < window.sunrise_start || window.sunset_end < window.sunset_start;
    if !wraps {
        let encoded = |clock: ClockTime| u32::from(clock.value());
        return ordered_rules(encoded(now), bounds.map(encoded));
    }

    let origin = window.sunrise_start.minute_of_day();
    let offset =
        |clock: ClockTime| (clock.minute_of_day() + MINUTES_PER_DAY - origin) % MINUTES_PER_DAY;
    ordered_rules(offset(now), bounds.map(offset))
}

#[must_use]
pub fn local_instant(epoch_sec: i64, tz: Tz) -> Option<DateTime<Tz>> {
    DateTime::<Utc>::from_timestamp(epoch_sec, 0).map(|utc| utc.with_timezone(&tz))
}

fn ordered_rules(
    now: u32,
    [sunrise_start, sunrise_end, sunset_start, sunset_end]: [u32; 4],
) -> Phase {
    if sunrise_start <= now && now <= sunrise_end {
        Phase::Sunrise
    } else if sunrise_end < now && now < sunset_start {
        Phase::Day
    } else if sunset_start <= now && now <= sunset_end {
        Phase::Sunset
    } else {
        Phase::Night
    }
}
