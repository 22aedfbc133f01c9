// Views module - screen-level rendering logic
//
// Gate screens (sign in, location) fill the content area until the dashboard
// opens; after that each tab has its own view under the tab bar.

mod alerts;
mod aqi;
mod home;
mod location;
mod login;
mod map;
mod marketplace;
mod modal;
mod reforestation;
mod social;

use super::app::App;
use crate::session::{Stage, Tab};
use crate::tui::components::{logs_panel, status_bar, tab_bar, title_bar};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const TAB_BAR_HEIGHT: u16 = 2;
const LOGS_HEIGHT: u16 = 8;
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(app.theme.block_style());
    f.render_widget(bg_block, f.area());

    let current_tab = app.current_tab();

    let mut constraints = vec![Constraint::Length(TITLE_HEIGHT)];
    if current_tab.is_some() {
        constraints.push(Constraint::Length(TAB_BAR_HEIGHT));
    }
    constraints.push(Constraint::Min(5));
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_HEIGHT));

    let chunks = Layout::vertical(constraints).split(f.area());
    let mut slots = chunks.iter().copied();

    // slot order mirrors the constraint order above
    let mut next = || slots.next().unwrap_or_default();
    title_bar::render(f, next(), app);
    if let Some(tab) = current_tab {
        tab_bar::render(f, next(), app, tab);
    }
    let content = next();
    let logs = app.show_logs.then(&mut next);
    let status = next();

    match app.session.stage() {
        Stage::Unauthenticated(_) => login::render(f, content, app),
        Stage::AwaitingLocation(_) => location::render(f, content, app),
        Stage::Active(dashboard) => match dashboard.tab() {
            Tab::Home => home::render(f, content, app, dashboard),
            Tab::Map => map::render(f, content, app, dashboard),
            Tab::Alerts => alerts::render(f, content, app, dashboard),
            Tab::Reforestation => reforestation::render(f, content, app, dashboard),
            Tab::Marketplace => marketplace::render(f, content, app, dashboard),
            Tab::Social => social::render(f, content, app, dashboard),
            Tab::Aqi => aqi::render(f, content, app, dashboard),
        },
    }

    if let Some(area) = logs {
        logs_panel::render(f, area, &app.log_buffer, &app.theme);
    }
    status_bar::render(f, status, app);

    if let Some(open) = app.modal {
        modal::render(f, open, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

/// Bordered panel in the current theme
fn panel(app: &App, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(Line::styled(
            format!(" {title} "),
            Style::default().fg(app.theme.title),
        ))
}

/// Rect of at most `width` x `height` centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
