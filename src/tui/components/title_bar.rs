// Title bar component
//
// App name and current stage; once signed in, the user's initial and name.

use crate::session::GateStage;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let stage = app.session.gate();
    let title_text = match stage {
        GateStage::Unauthenticated => format!(" 🌳 EcoGuard ──── {}", stage.name()),
        _ => {
            let user = app.session.user();
            format!(
                " 🌳 EcoGuard ──── {} ──── ({}) {}",
                stage.name(),
                user.initial(),
                user.name
            )
        }
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
