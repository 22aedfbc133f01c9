// Map tab: world canvas around the map center with one marker per alert
//
// Alerts have no coordinates of their own, so every marker sits on the center
// point; labels are stacked below it so they stay readable.

use super::panel;
use crate::session::map::MapView;
use crate::session::Dashboard;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        List, ListItem,
    },
    Frame,
};

const SIDEBAR_WIDTH: u16 = 40;

pub fn render(f: &mut Frame, area: Rect, app: &App, dashboard: &Dashboard) {
    let view = dashboard.map_view();

    if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        let [canvas, sidebar] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)]).areas(area);
        render_canvas(f, canvas, app, &view);
        render_markers(f, sidebar, app, &view);
    } else {
        render_canvas(f, area, app, &view);
    }
}

fn render_canvas(f: &mut Frame, area: Rect, app: &App, view: &MapView) {
    let (lon_bounds, lat_bounds) = view.bounds();
    let (_, lat_span) = view.span();
    // one terminal row, in degrees of latitude
    let row = lat_span / f64::from(area.height.saturating_sub(2).max(1));

    let center = view.center;
    let title = format!("Map · {center} · zoom {}", view.zoom);
    let land = app.theme.map_land;
    let marker = app.theme.marker;
    let label_style = Style::default()
        .fg(app.theme.foreground)
        .add_modifier(Modifier::BOLD);

    let canvas = Canvas::default()
        .block(panel(app, &title))
        .background_color(app.theme.background)
        .marker(Marker::Braille)
        .x_bounds(lon_bounds)
        .y_bounds(lat_bounds)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: land,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &[(center.lon, center.lat)],
                color: marker,
            });
            ctx.print(center.lon, center.lat, Line::styled("✖", Style::default().fg(marker)));
            for (i, m) in view.markers.iter().enumerate() {
                let y = m.position.lat - row * (i as f64 + 1.0);
                ctx.print(m.position.lon, y, Line::styled(m.label.clone(), label_style));
            }
        });

    f.render_widget(canvas, area);
}

fn render_markers(f: &mut Frame, area: Rect, app: &App, view: &MapView) {
    let items: Vec<ListItem> = view
        .markers
        .iter()
        .map(|m| {
            ListItem::new(Line::styled(
                format!("✖ {}", m.label),
                Style::default().fg(app.theme.marker),
            ))
        })
        .collect();

    f.render_widget(List::new(items).block(panel(app, "Markers")), area);
}
