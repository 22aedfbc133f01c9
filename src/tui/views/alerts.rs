// Alerts tab: current alerts and the report form

use super::panel;
use crate::session::{Dashboard, FieldId};
use crate::tui::app::App;
use crate::tui::components::form;
use crate::tui::focus::Action;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    style::Style,
    widgets::{List, ListItem, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 40;
const FORM_ROWS: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let (list_area, form_area) = if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        let [list, form] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(FORM_WIDTH)]).areas(area);
        (list, form)
    } else {
        let [list, form] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(FORM_ROWS * form::ROW_HEIGHT + 2),
        ])
        .areas(area);
        (list, form)
    };

    if dashboard.alerts().is_empty() {
        let empty = Paragraph::new("No alerts reported")
            .style(Style::default().fg(app.theme.muted))
            .block(panel(app, "Current Alerts"));
        f.render_widget(empty, list_area);
    } else {
        render_list(f, list_area, app, dashboard);
    }

    let block = panel(app, "Report an Alert");
    let inner = block.inner(form_area);
    f.render_widget(block, form_area);

    let rows = form::rows(inner, FORM_ROWS as usize);
    form::text_field(f, rows[0], app, FieldId::AlertKind);
    form::text_field(f, rows[1], app, FieldId::AlertLocation);
    form::severity_selector(f, rows[2], app);
    form::button(f, rows[3], app, Action::AddAlert);
}

fn render_list(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let items: Vec<ListItem> = dashboard
        .alerts()
        .iter()
        .map(|alert| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("#{:<3} ", alert.id)),
                Span::styled(alert.summary(), app.theme.severity_style(alert.severity)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel(app, "Current Alerts")), area);
}
