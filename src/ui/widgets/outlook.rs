use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    cli::IconMode,
    domain::weather::ForecastBundle,
    ui::{fields::outlook_days, theme::Palette},
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    bundle: &ForecastBundle,
    icon_mode: IconMode,
    palette: Palette,
) {
    let days = outlook_days(bundle, icon_mode);
    if days.is_empty() {
        return;
    }

    let rows = days.into_iter().map(|day| {
        Row::new(vec![
            Cell::from(day.weekday).style(
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from(day.icon).style(Style::default().fg(palette.accent)),
            Cell::from(day.max).style(Style::default().fg(palette.text)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(6),
        ],
    )
    .column_spacing(1);
    frame.render_widget(table, area);
}
