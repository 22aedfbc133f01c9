//! Form widgets: text fields, the severity selector and buttons
//!
//! Each widget is three rows tall (bordered) and reads its value straight from
//! the session, so a rejected submit redraws the draft exactly as typed.

use crate::session::FieldId;
use crate::tui::app::App;
use crate::tui::focus::{Action, Target};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const ROW_HEIGHT: u16 = 3;

/// Split `area` into `count` widget rows from the top
pub fn rows(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(ROW_HEIGHT); count];
    constraints.push(Constraint::Min(0));
    Layout::vertical(constraints).split(area)[..count].to_vec()
}

fn frame_block<'a>(app: &App, title: String, focused: bool) -> Block<'a> {
    let border = if focused {
        app.theme.highlight
    } else {
        app.theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(border))
        .title(title)
}

pub fn text_field(f: &mut Frame, area: Rect, app: &App, field: FieldId) {
    let value = app.session.field(field).unwrap_or_default();
    let shown = if field.is_secret() {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let focused = app.is_focused(Target::Field(field));

    let block = frame_block(app, format!(" {} ", field.label()), focused);
    let inner = block.inner(area);

    // keep the cursor end visible once the text outgrows the box
    let width = shown.width() as u16;
    let scroll = width.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = Paragraph::new(shown)
        .style(Style::default().fg(app.theme.foreground))
        .scroll((0, scroll))
        .block(block);
    f.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (width - scroll).min(inner.width - 1);
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

pub fn severity_selector(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.is_focused(Target::Severity);
    let severity = app
        .session
        .dashboard()
        .and_then(|d| d.alert_draft.severity);

    let line = match severity {
        Some(severity) => Line::from(vec![
            Span::styled("◀ ", Style::default().fg(app.theme.muted)),
            Span::styled(severity.as_str(), app.theme.severity_style(severity)),
            Span::styled(" ▶", Style::default().fg(app.theme.muted)),
        ]),
        None => Line::styled("◀ Select Severity ▶", Style::default().fg(app.theme.muted)),
    };

    let paragraph = Paragraph::new(line).block(frame_block(app, " Severity ".to_string(), focused));
    f.render_widget(paragraph, area);
}

pub fn button(f: &mut Frame, area: Rect, app: &App, action: Action) {
    let focused = app.is_focused(Target::Button(action));
    let style = if focused {
        Style::default()
            .fg(app.theme.selection_fg)
            .bg(app.theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.foreground)
    };

    let paragraph = Paragraph::new(action.label())
        .alignment(Alignment::Center)
        .style(style)
        .block(frame_block(app, String::new(), focused));
    f.render_widget(paragraph, area);
}
