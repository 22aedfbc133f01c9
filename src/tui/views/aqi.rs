// Air quality tab: index gauge, band and pollutant breakdown

use super::panel;
use crate::session::aqi::{breakdown, AQI_MAX};
use crate::session::Dashboard;
use crate::tui::app::App;
use crate::tui::components::form;
use crate::tui::focus::Action;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let aqi = dashboard.aqi();
    let band = aqi.band();
    let color = app.theme.aqi_color(band);

    let [headline, gauge, readings, button] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(form::ROW_HEIGHT),
    ])
    .areas(area);

    let value = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", aqi.value()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(band.label(), Style::default().fg(color)),
    ]))
    .block(panel(app, "Air Quality Index").border_style(Style::default().fg(color)));
    f.render_widget(value, headline);

    let meter = Gauge::default()
        .block(panel(app, &format!("0 - {AQI_MAX}")))
        .gauge_style(Style::default().fg(color).bg(app.theme.selection))
        .ratio(aqi.ratio())
        .label(format!("{} / {AQI_MAX}", aqi.value()));
    f.render_widget(meter, gauge);

    let items: Vec<ListItem> = breakdown(aqi.value())
        .iter()
        .map(|reading| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<8}", reading.name),
                    Style::default().fg(app.theme.foreground),
                ),
                Span::styled(
                    format!("{:>5} {}", reading.value, reading.unit),
                    Style::default().fg(app.theme.muted),
                ),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel(app, "Pollutants")), readings);

    let [button, _] = Layout::horizontal([Constraint::Length(36), Constraint::Min(0)]).areas(button);
    form::button(f, button, app, Action::Simulate);
}
