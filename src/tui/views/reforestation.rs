// Reforestation tab: current suggestion and the active projects

use super::panel;
use crate::session::settings::ACTIVE_PROJECTS;
use crate::session::Dashboard;
use crate::tui::app::App;
use crate::tui::components::form;
use crate::tui::focus::Action;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let [suggestion, button, projects] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(form::ROW_HEIGHT),
        Constraint::Min(3),
    ])
    .areas(area);

    let text = Paragraph::new(dashboard.suggestion())
        .style(Style::default().fg(app.theme.foreground))
        .wrap(Wrap { trim: true })
        .block(panel(app, "Suggested Project"));
    f.render_widget(text, suggestion);

    let [button, hint] =
        Layout::horizontal([Constraint::Length(32), Constraint::Min(0)]).areas(button);
    form::button(f, button, app, Action::Generate);
    let hint_text = vec![
        Line::raw(""),
        Line::styled("  g: new suggestion", Style::default().fg(app.theme.muted)),
    ];
    f.render_widget(Paragraph::new(hint_text), hint);

    let items: Vec<ListItem> = ACTIVE_PROJECTS
        .iter()
        .map(|project| {
            ListItem::new(Line::styled(
                format!("🌲 {project}"),
                Style::default().fg(app.theme.success),
            ))
        })
        .collect();
    f.render_widget(List::new(items).block(panel(app, "Active Projects")), projects);
}
