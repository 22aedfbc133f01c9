//! [session] section: profile, starting metrics and the simulated device

use serde::Deserialize;

use crate::session::aqi::AQI_MAX;
use crate::session::models::{LatLon, Role, User};
use crate::session::settings::{default_user, SessionSettings, AMAZON_RAINFOREST};

/// Deepest zoom the map canvas can usefully show
const MAX_ZOOM: u8 = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub user_name: String,
    pub user_email: String,
    pub role: Role,
    pub score: u32,
    pub trees_planted: u32,
    pub initial_aqi: u32,
    pub map_zoom: u8,
    /// Prefills the location form
    pub default_center: LatLon,
    /// When false, "use GPS" reports the location as unavailable
    pub gps_enabled: bool,
    pub device_location: LatLon,
    /// Fixed RNG seed for reproducible suggestions and simulations
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let settings = SessionSettings::default();
        let user = settings.user;
        Self {
            user_name: user.name,
            user_email: user.email,
            role: user.role,
            score: user.score,
            trees_planted: user.trees_planted,
            initial_aqi: settings.initial_aqi,
            map_zoom: settings.map_zoom,
            default_center: AMAZON_RAINFOREST,
            gps_enabled: settings.device_location.is_some(),
            device_location: settings.device_location.unwrap_or(LatLon::new(0.0, 0.0)),
            seed: None,
        }
    }
}

/// Session settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSession {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub role: Option<Role>,
    pub score: Option<u32>,
    pub trees_planted: Option<u32>,
    pub initial_aqi: Option<u32>,
    pub map_zoom: Option<u8>,
    pub default_lat: Option<f64>,
    pub default_lon: Option<f64>,
    pub gps_enabled: Option<bool>,
    pub device_lat: Option<f64>,
    pub device_lon: Option<f64>,
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSession>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            user_name: file.user_name.unwrap_or(defaults.user_name),
            user_email: file.user_email.unwrap_or(defaults.user_email),
            role: file.role.unwrap_or(defaults.role),
            score: file.score.unwrap_or(defaults.score),
            trees_planted: file.trees_planted.unwrap_or(defaults.trees_planted),
            initial_aqi: file.initial_aqi.unwrap_or(defaults.initial_aqi),
            map_zoom: file.map_zoom.unwrap_or(defaults.map_zoom),
            default_center: LatLon::new(
                file.default_lat.unwrap_or(defaults.default_center.lat),
                file.default_lon.unwrap_or(defaults.default_center.lon),
            ),
            gps_enabled: file.gps_enabled.unwrap_or(defaults.gps_enabled),
            device_location: LatLon::new(
                file.device_lat.unwrap_or(defaults.device_location.lat),
                file.device_lon.unwrap_or(defaults.device_location.lon),
            ),
            seed: file.seed.or(defaults.seed),
        }
    }

    /// Settings handed to a new session; out-of-range values are clamped
    pub fn to_settings(&self) -> SessionSettings {
        let user = User {
            name: self.user_name.clone(),
            email: self.user_email.clone(),
            role: self.role,
            score: self.score,
            trees_planted: self.trees_planted,
            ..default_user()
        };
        let initial_aqi = self.initial_aqi.min(AQI_MAX);
        if initial_aqi != self.initial_aqi {
            tracing::warn!(
                configured = self.initial_aqi,
                used = initial_aqi,
                "initial_aqi above scale, clamped"
            );
        }

        SessionSettings {
            user,
            initial_aqi,
            map_zoom: self.map_zoom.min(MAX_ZOOM),
            default_center: self.default_center,
            device_location: self.gps_enabled.then_some(self.device_location),
        }
    }
}
