// Status bar component
//
// Gate stage and uptime always; AQI, alert count and key hints once the
// dashboard is active.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let base = Style::default().fg(app.theme.status_bar);
    let stage = app.session.gate().name();

    let mut spans = vec![Span::styled(format!(" {} │ {stage}", app.uptime()), base)];

    if let Some(dashboard) = app.session.dashboard() {
        let aqi = dashboard.aqi();
        let band = aqi.band();
        spans.push(Span::styled(" │ AQI ", base));
        spans.push(Span::styled(
            format!("{} {}", aqi.value(), band.label()),
            Style::default().fg(app.theme.aqi_color(band)),
        ));
        spans.push(Span::styled(
            format!(" │ ⚠ {}", dashboard.alerts().len()),
            base,
        ));
    }

    if bp.at_least(Breakpoint::Wide) {
        let hint = if app.is_editing() {
            " │ Enter submit · Esc done · Tab next"
        } else {
            " │ Tab focus · 1-7 tabs · ? help · q quit"
        };
        spans.push(Span::styled(hint, Style::default().fg(app.theme.muted)));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(app.theme.border)),
    );

    f.render_widget(status, area);
}
