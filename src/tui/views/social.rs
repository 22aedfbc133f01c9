// Social tab: community messages and the compose box

use super::panel;
use crate::session::{Dashboard, FieldId};
use crate::tui::app::App;
use crate::tui::components::form;
use crate::tui::focus::Action;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let [messages, compose] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(form::ROW_HEIGHT)]).areas(area);

    // newest messages stay visible at the bottom
    let capacity = messages.height.saturating_sub(2) as usize;
    let all = dashboard.messages().as_slice();
    let shown = &all[all.len().saturating_sub(capacity)..];

    let items: Vec<ListItem> = shown
        .iter()
        .map(|message| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}: ", message.user),
                    Style::default()
                        .fg(app.theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(message.content.as_str(), Style::default().fg(app.theme.foreground)),
                Span::styled(
                    format!("  {}", message.timestamp),
                    Style::default().fg(app.theme.muted),
                ),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel(app, "Community")), messages);

    let [field, send] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(12)]).areas(compose);
    form::text_field(f, field, app, FieldId::MessageContent);
    form::button(f, send, app, Action::Send);
}
