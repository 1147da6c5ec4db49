pub mod backdrop;
pub mod fields;
pub mod snapshot;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::{AppMode, AppState},
    ui::{backdrop::Backdrop, theme::palette_for},
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < 30 || area.height < 10 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 30x10.")
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("skyclock"));
        frame.render_widget(warning, area);
        return;
    }

    let palette = palette_for(state.phase());
    frame.render_widget(
        Backdrop {
            top: palette.top,
            bottom: palette.bottom,
        },
        area,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" skyclock · q to quit ")
        .border_style(Style::default().fg(palette.muted_text))
        .title_style(Style::default().fg(palette.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    match state.weather.as_ref() {
        Some(bundle) if state.mode != AppMode::Error => {
            widgets::today::render(frame, chunks[0], bundle, state.icon_mode, palette);
            widgets::outlook::render(frame, chunks[2], bundle, state.icon_mode, palette);
        }
        _ => render_status(frame, chunks[0], state, palette.text),
    }
    widgets::footer::render(frame, chunks[3], state, palette);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, color: ratatui::style::Color) {
    let (message, style) = match (state.mode, state.last_error.as_deref()) {
        (AppMode::Error, Some(err)) => (
            format!("Weather unavailable: {err}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        _ => (state.loading_message.clone(), Style::default().fg(color)),
    };
    let paragraph = Paragraph::new(Line::from(message))
        .style(style)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
