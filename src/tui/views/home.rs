// Home tab: welcome, stat cards and the searchable news feed

use super::panel;
use crate::session::{Dashboard, FieldId};
use crate::tui::app::App;
use crate::tui::components::form;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let bp = Breakpoint::from_width(area.width);
    let cards_height = if bp.at_least(Breakpoint::Normal) { 4 } else { 8 };

    let [welcome, search, cards, news] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(form::ROW_HEIGHT),
        Constraint::Length(cards_height),
        Constraint::Min(3),
    ])
    .areas(area);

    let greeting = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Welcome back, {}. ", app.session.user().name),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Here is what is happening around you.",
            Style::default().fg(app.theme.muted),
        ),
    ]));
    f.render_widget(greeting, welcome);

    form::text_field(f, search, app, FieldId::NewsSearch);
    render_cards(f, cards, app, dashboard, bp);
    render_news(f, news, app, dashboard);
}

fn render_cards(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard, bp: Breakpoint) {
    let aqi = dashboard.aqi();
    let user = app.session.user();
    let cards = [
        ("Active Alerts", dashboard.alerts().len().to_string(), app.theme.warning),
        ("Air Quality", aqi.value().to_string(), app.theme.aqi_color(aqi.band())),
        ("Trees Planted", user.trees_planted.to_string(), app.theme.success),
        ("EcoScore", user.score.to_string(), app.theme.info),
    ];

    let slots: Vec<Rect> = if bp.at_least(Breakpoint::Normal) {
        Layout::horizontal([Constraint::Ratio(1, 4); 4])
            .split(area)
            .to_vec()
    } else {
        Layout::vertical([Constraint::Ratio(1, 2); 2])
            .split(area)
            .iter()
            .flat_map(|row| Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row).to_vec())
            .collect()
    };

    for ((title, value, color), slot) in cards.into_iter().zip(slots) {
        render_card(f, slot, app, title, value, color);
    }
}

fn render_card(f: &mut Frame, area: Rect, app: &App, title: &str, value: String, color: Color) {
    let card = Paragraph::new(Line::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(panel(app, title));
    f.render_widget(card, area);
}

fn render_news(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let items: Vec<ListItem> = dashboard
        .visible_news()
        .map(|item| {
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(
                        item.title.as_str(),
                        Style::default()
                            .fg(app.theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", item.date), Style::default().fg(app.theme.muted)),
                ]),
                Line::styled(
                    format!("  {}", item.content),
                    Style::default().fg(app.theme.muted),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(format!("No news matches \"{}\"", dashboard.news_search.trim()))
            .style(Style::default().fg(app.theme.muted))
            .block(panel(app, "Environmental News"));
        f.render_widget(empty, area);
        return;
    }

    f.render_widget(List::new(items).block(panel(app, "Environmental News")), area);
}
