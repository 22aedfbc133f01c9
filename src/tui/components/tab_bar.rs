// Tab bar component
//
// Numbered dashboard tabs; narrow terminals get the numbers only.

use crate::session::Tab;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, current: Tab) {
    let compact = !Breakpoint::from_width(area.width).at_least(Breakpoint::Normal);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let number = tab.index() + 1;
            if compact {
                Line::from(format!("{number}"))
            } else {
                Line::from(format!("{number} {}", tab.name()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(Style::default().fg(app.theme.muted))
        .highlight_style(
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(tabs, area);
}
