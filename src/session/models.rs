//! Domain records held by the dashboard
//!
//! Every collection entity carries a `u32` id assigned by its [`Collection`](super::Collection).
//! The `New*` structs are the validated, id-less shapes handed to `add`.

use super::error::SessionError;
use serde::Deserialize;
use std::fmt;

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Coordinate on the globe: latitude within ±90, longitude within ±180
    ///
    /// NaN and infinities fall outside both ranges.
    pub fn checked(lat: f64, lon: f64) -> Result<Self, SessionError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SessionError::invalid(
                "Latitude",
                "must be between -90 and 90",
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(SessionError::invalid(
                "Longitude",
                "must be between -180 and 180",
            ));
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Alerts
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Step through the selector: unset -> Low -> Medium -> High -> unset
    pub fn cycle_forward(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Severity::Low),
            Some(Severity::Low) => Some(Severity::Medium),
            Some(Severity::Medium) => Some(Severity::High),
            Some(Severity::High) => None,
        }
    }

    pub fn cycle_back(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Severity::High),
            Some(Severity::High) => Some(Severity::Medium),
            Some(Severity::Medium) => Some(Severity::Low),
            Some(Severity::Low) => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub kind: String,
    pub location: String,
    pub severity: Severity,
}

impl Alert {
    /// Popup text used by map markers
    pub fn marker_label(&self) -> String {
        format!("{} alert in {}", self.kind, self.location)
    }

    /// Line used by the alerts list
    pub fn summary(&self) -> String {
        format!(
            "{} alert in {} ({} severity)",
            self.kind, self.location, self.severity
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub kind: String,
    pub location: String,
    pub severity: Severity,
}

// ─────────────────────────────────────────────────────────────────────────────
// Marketplace
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub seller: String,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("${:.2} - {}", self.price, self.seller)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub seller: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Social
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u32,
    pub user: String,
    pub content: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub user: String,
    pub content: String,
    pub timestamp: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// News
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub date: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// User profile
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Seller,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Seller => "seller",
        }
    }

    /// Parse a role name; unknown names yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "user" => Some(Role::User),
            "seller" => Some(Role::Seller),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub score: u32,
    pub trees_planted: u32,
}

impl User {
    pub fn is_seller(&self) -> bool {
        self.role == Role::Seller
    }

    /// Avatar fallback: first character of the name
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_coordinates_stay_on_the_globe() {
        assert_eq!(LatLon::checked(90.0, -180.0), Ok(LatLon::new(90.0, -180.0)));
        assert_eq!(
            LatLon::checked(200.0, 0.0),
            Err(SessionError::invalid("Latitude", "must be between -90 and 90"))
        );
        assert_eq!(
            LatLon::checked(0.0, f64::NAN),
            Err(SessionError::invalid("Longitude", "must be between -180 and 180"))
        );
        assert!(LatLon::checked(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn severity_cycle_visits_unset() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = Severity::cycle_forward(current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(Severity::Low),
                Some(Severity::Medium),
                Some(Severity::High),
                None
            ]
        );
        assert_eq!(Severity::cycle_back(None), Some(Severity::High));
    }

    #[test]
    fn alert_labels() {
        let alert = Alert {
            id: 1,
            kind: "Deforestation".into(),
            location: "Amazon Rainforest".into(),
            severity: Severity::High,
        };
        assert_eq!(alert.marker_label(), "Deforestation alert in Amazon Rainforest");
        assert_eq!(
            alert.summary(),
            "Deforestation alert in Amazon Rainforest (High severity)"
        );
    }

    #[test]
    fn product_price_label_uses_two_decimals() {
        let product = Product {
            id: 2,
            name: "Maple Seeds".into(),
            price: 8.5,
            seller: "Forest Friends Co.".into(),
        };
        assert_eq!(product.price_label(), "$8.50 - Forest Friends Co.");
    }

    #[test]
    fn role_parse() {
        assert_eq!(Role::parse("Seller"), Some(Role::Seller));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("admin"), None);
    }
}
