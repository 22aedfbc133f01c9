//! Projection handed to the map collaborator
//!
//! Alerts carry a place name but no coordinate, so every marker is placed at
//! the shared map center. The renderer draws what it is given here.

use super::models::{Alert, LatLon};

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: LatLon,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    pub fn new<'a>(center: LatLon, zoom: u8, alerts: impl IntoIterator<Item = &'a Alert>) -> Self {
        let markers = alerts
            .into_iter()
            .map(|alert| MapMarker {
                position: center,
                label: alert.marker_label(),
            })
            .collect();
        Self {
            center,
            zoom,
            markers,
        }
    }

    /// Visible (longitude, latitude) spans in degrees for the zoom level
    ///
    /// Zoom 0 shows the whole world; each level halves both spans.
    pub fn span(&self) -> (f64, f64) {
        let scale = f64::from(1u32 << self.zoom.min(18));
        (360.0 / scale, 180.0 / scale)
    }

    /// `[west, east]` and `[south, north]` bounds around the center
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let (lon_span, lat_span) = self.span();
        (
            [
                self.center.lon - lon_span / 2.0,
                self.center.lon + lon_span / 2.0,
            ],
            [
                self.center.lat - lat_span / 2.0,
                self.center.lat + lat_span / 2.0,
            ],
        )
    }
}
