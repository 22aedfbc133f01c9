// Marketplace tab
//
// Everyone sees the product list. Sellers get the listing form; other users
// get a Buy button for the highlighted product.

use super::panel;
use crate::session::{Dashboard, FieldId};
use crate::tui::app::App;
use crate::tui::components::form;
use crate::tui::focus::Action;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

const SIDE_WIDTH: u16 = 40;

pub fn render(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let seller = app.session.user().is_seller();
    let side_rows: u16 = if seller { 4 } else { 1 };

    let (list_area, side_area) = if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        let [list, side] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(SIDE_WIDTH)]).areas(area);
        (list, side)
    } else {
        let [list, side] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(side_rows * form::ROW_HEIGHT + 2),
        ])
        .areas(area);
        (list, side)
    };

    let items: Vec<ListItem> = dashboard
        .products()
        .iter()
        .map(|product| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    product.name.as_str(),
                    Style::default()
                        .fg(app.theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", product.price_label()),
                    Style::default().fg(app.theme.muted),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !seller {
        state.select(Some(app.selected_product));
    }
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection),
        )
        .highlight_symbol("▶ ")
        .block(panel(app, "Eco-Friendly Products"));
    f.render_stateful_widget(list, list_area, &mut state);

    if seller {
        let block = panel(app, "List a Product");
        let inner = block.inner(side_area);
        f.render_widget(block, side_area);

        let rows = form::rows(inner, 4);
        form::text_field(f, rows[0], app, FieldId::ProductName);
        form::text_field(f, rows[1], app, FieldId::ProductPrice);
        form::text_field(f, rows[2], app, FieldId::ProductSeller);
        form::button(f, rows[3], app, Action::AddProduct);
    } else {
        let block = panel(app, "↑/↓ choose · b buy");
        let inner = block.inner(side_area);
        f.render_widget(block, side_area);
        form::button(f, form::rows(inner, 1)[0], app, Action::Buy);
    }
}
