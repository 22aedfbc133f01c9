// Sign-in screen

use super::{centered_rect, panel};
use crate::session::FieldId;
use crate::tui::app::App;
use crate::tui::components::form;
use crate::tui::focus::Action;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(52, 14, area);
    let block = panel(app, "Sign in to EcoGuard");
    let inner = block.inner(card);
    f.render_widget(block, card);

    let rows = form::rows(inner, 4);
    let hint = Paragraph::new("Any email and password will do.")
        .style(Style::default().fg(app.theme.muted));
    f.render_widget(hint, rows[0]);
    form::text_field(f, rows[1], app, FieldId::Email);
    form::text_field(f, rows[2], app, FieldId::Password);
    form::button(f, rows[3], app, Action::SignIn);
}
