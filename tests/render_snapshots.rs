mod common;

use common::{cli_for, fixture_bundle};
use ratatui::{Terminal, backend::TestBackend, style::Color};
use skyclock::{
    app::{
        state::{AppMode, AppState},
        ticker::ClockReading,
    },
    domain::phase::Phase,
    ui::{self, theme::palette_for},
};

fn ready_state(phase: Option<Phase>) -> AppState {
    let cli = cli_for("http://127.0.0.1:1");
    let mut state = AppState::new(&cli);
    state.weather = Some(fixture_bundle());
    state.mode = AppMode::Ready;
    state.reading = Some(ClockReading {
        time_label: "18:05".to_string(),
        phase,
    });
    state
}

fn draw(state: &AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| ui::render(frame, state)).expect("draw");
    terminal
}

fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let terminal = draw(state, width, height);
    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

#[test]
fn dashboard_shows_today_outlook_and_clock() {
    let rendered = render_to_string(&ready_state(Some(Phase::Sunset)), 60, 16);

    assert!(rendered.contains("Central and Western, Sat 14"));
    assert!(rendered.contains("27º"));
    assert!(rendered.contains("SUN Clear"));
    assert!(rendered.contains("28º max"));
    assert!(rendered.contains("22º min"));
    for weekday in ["Sun", "Mon", "Tue", "Wed"] {
        assert!(rendered.contains(weekday), "missing {weekday}:\n{rendered}");
    }
    assert!(rendered.contains("18:05  Sunset"));
}

#[test]
fn backdrop_follows_phase() {
    for phase in [Phase::Sunrise, Phase::Day, Phase::Sunset, Phase::Night] {
        let terminal = draw(&ready_state(Some(phase)), 60, 16);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, palette_for(Some(phase)).top);
    }
}

#[test]
fn loading_state_shows_message_and_placeholder_clock() {
    let cli = cli_for("http://127.0.0.1:1");
    let state = AppState::new(&cli);
    let rendered = render_to_string(&state, 60, 16);
    assert!(rendered.contains("Initializing..."));
    assert!(rendered.contains("--:--"));
}

#[test]
fn error_state_shows_reason() {
    let mut state = ready_state(None);
    state.mode = AppMode::Error;
    state.last_error = Some("location lookup failed: HTTP 500".to_string());
    let rendered = render_to_string(&state, 80, 16);
    assert!(rendered.contains("Weather unavailable: location lookup failed"));
    assert!(!rendered.contains("28º max"));
}

#[test]
fn tiny_terminal_gets_resize_hint() {
    let rendered = render_to_string(&ready_state(Some(Phase::Day)), 20, 6);
    assert!(rendered.contains("Terminal"));
    let terminal = draw(&ready_state(Some(Phase::Day)), 20, 6);
    assert_ne!(terminal.backend().buffer()[(0, 0)].bg, Color::Rgb(62, 132, 206));
}
