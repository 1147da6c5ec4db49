#![allow(clippy::missing_errors_doc)]

use std::time::Duration;

use clap::Parser;

use crate::domain::phase::DEFAULT_TRANSITION_MINUTES;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_IP: &str = "47.90.96.247";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skyclock",
    version,
    about = "Terminal weather clock with a sunrise/day/sunset/night backdrop"
)]
pub struct Cli {
    /// Base URL of the location/weather backend
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// IP address to resolve the location from
    #[arg(long, default_value = DEFAULT_IP)]
    pub ip: String,

    /// Length of the sunrise and sunset transitions in minutes (1..120)
    #[arg(long, default_value_t = DEFAULT_TRANSITION_MINUTES, value_parser = clap::value_parser!(i64).range(1..=120))]
    pub transition_minutes: i64,

    /// Clock tick period in milliseconds (100..60000)
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(100..=60_000))]
    pub tick_ms: u64,

    /// Per-request timeout in seconds (1..120)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub timeout_secs: u64,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Print a weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ip.trim().is_empty() {
            anyhow::bail!("--ip must not be empty");
        }
        let url = self.backend_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("--backend-url must start with http:// or https://");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }

    #[must_use]
    pub fn transition(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.transition_minutes)
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
