use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    cli::IconMode,
    domain::weather::ForecastBundle,
    ui::{fields::today_fields, theme::Palette},
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    bundle: &ForecastBundle,
    icon_mode: IconMode,
    palette: Palette,
) {
    let fields = today_fields(bundle, icon_mode);
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted_text);

    let lines = vec![
        Line::from(Span::styled(
            fields.headline,
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                fields.temperature,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(fields.icon, text),
            Span::raw(" "),
            Span::styled(fields.summary, text),
        ]),
        Line::from(vec![
            Span::styled(fields.max, muted),
            Span::raw("   "),
            Span::styled(fields.min, muted),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
