//! Session profile and seed content
//!
//! The profile is resolved from config before the session starts; the seed
//! lists are what a fresh dashboard shows before the user adds anything.

use super::models::{LatLon, Role, Severity, User};

/// Everything a session needs to know up front
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub user: User,
    pub initial_aqi: u32,
    pub map_zoom: u8,
    /// Prefills the location form
    pub default_center: LatLon,
    /// Position reported by the "use GPS" path; `None` makes it unavailable
    pub device_location: Option<LatLon>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            user: default_user(),
            initial_aqi: 150,
            map_zoom: 4,
            default_center: AMAZON_RAINFOREST,
            device_location: Some(LatLon::new(0.0, 0.0)),
        }
    }
}

pub const AMAZON_RAINFOREST: LatLon = LatLon::new(-3.4653, -62.2159);

pub fn default_user() -> User {
    User {
        id: 1,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        role: Role::User,
        score: 750,
        trees_planted: 50,
    }
}

pub(crate) const SEED_ALERTS: [(&str, &str, Severity); 2] = [
    ("Deforestation", "Amazon Rainforest", Severity::High),
    ("Air Quality", "Beijing", Severity::Medium),
];

pub(crate) const SEED_PRODUCTS: [(&str, f64, &str); 2] = [
    ("Oak Saplings", 12.99, "GreenThumb Nursery"),
    ("Maple Seeds", 8.50, "Forest Friends Co."),
];

/// (user, content, timestamp in [`TIMESTAMP_FORMAT`](super::collaborators::TIMESTAMP_FORMAT))
pub(crate) const SEED_MESSAGES: [(&str, &str, &str); 2] = [
    (
        "EcoWarrior",
        "We need to act fast to save our forests!",
        "2023-06-10 14:30",
    ),
    (
        "GreenThumb",
        "I agree! Let's organize a tree planting event.",
        "2023-06-10 14:35",
    ),
];

pub(crate) const SEED_NEWS: [(&str, &str, &str); 2] = [
    (
        "Alarming Deforestation Rates in Amazon",
        "Recent satellite images show...",
        "2023-06-09",
    ),
    (
        "New Reforestation Initiative in Africa",
        "A group of NGOs have joined forces...",
        "2023-06-08",
    ),
];

/// Static list shown under the reforestation suggestion
pub const ACTIVE_PROJECTS: [&str; 2] = [
    "California Redwood Restoration - 10,000 trees planted",
    "Amazon Rainforest Recovery Initiative - 50,000 trees planted",
];
