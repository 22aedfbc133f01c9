//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Seed line: active when set, a commented example otherwise
    fn seed_to_toml(&self) -> String {
        match self.session.seed {
            Some(seed) => format!("seed = {seed}"),
            None => "# seed = 42".to_string(),
        }
    }

    /// Render the full config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let session = &self.session;
        let logging = &self.logging;

        format!(
            r#"# ecoguard configuration

# Theme: Forest, Ocean, Ember, Terminal
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Show the log panel at startup (toggle with 'l')
show_logs = {show_logs}

# Profile and starting state for each run
[session]
user_name = "{user_name}"
user_email = "{user_email}"
role = "{role}"  # user, seller (sellers can list products)
score = {score}
trees_planted = {trees}
initial_aqi = {aqi}  # clamped to 0-500
map_zoom = {zoom}
# Coordinate prefilled on the location screen
default_lat = {default_lat:?}
default_lon = {default_lon:?}
# Simulated GPS; set gps_enabled = false to make "use GPS" fail
gps_enabled = {gps}
device_lat = {device_lat:?}
device_lon = {device_lon:?}
# Fixed RNG seed for reproducible suggestions and simulations
{seed}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON log files (in addition to the in-app log panel)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            show_logs = self.show_logs,
            user_name = session.user_name,
            user_email = session.user_email,
            role = session.role.as_str(),
            score = session.score,
            trees = session.trees_planted,
            aqi = session.initial_aqi,
            zoom = session.map_zoom,
            default_lat = session.default_center.lat,
            default_lon = session.default_center.lon,
            gps = session.gps_enabled,
            device_lat = session.device_location.lat,
            device_lon = session.device_location.lon,
            seed = self.seed_to_toml(),
            log_level = logging.level,
            log_file_enabled = logging.file_enabled,
            log_file_dir = logging.file_dir.display(),
            log_file_rotation = logging.file_rotation.as_str(),
            log_file_prefix = logging.file_prefix,
        )
    }
}
