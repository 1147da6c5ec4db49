use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    ui::{fields::clock_fields, theme::Palette},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let (time, phase) = clock_fields(state.reading.as_ref());
    let line = Line::from(vec![
        Span::styled(
            time,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(phase, Style::default().fg(palette.muted_text)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
