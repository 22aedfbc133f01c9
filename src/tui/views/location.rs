// Location screen
//
// Coordinates are prefilled with the configured default center; "Use GPS"
// asks the location collaborator instead.

use super::{centered_rect, panel};
use crate::session::FieldId;
use crate::tui::app::App;
use crate::tui::components::form;
use crate::tui::focus::Action;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(56, 14, area);
    let block = panel(app, "Where are you monitoring?");
    let inner = block.inner(card);
    f.render_widget(block, card);

    let rows = form::rows(inner, 4);
    let hint = Paragraph::new("Decimal degrees, e.g. -3.4653 / -62.2159")
        .style(Style::default().fg(app.theme.muted));
    f.render_widget(hint, rows[0]);
    form::text_field(f, rows[1], app, FieldId::Latitude);
    form::text_field(f, rows[2], app, FieldId::Longitude);

    let [submit, gps] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(rows[3]);
    form::button(f, submit, app, Action::SubmitLocation);
    form::button(f, gps, app, Action::UseGps);
}
