//! External collaborators the session depends on
//!
//! Credential checks, geolocation and the wall clock sit behind small traits so
//! the session can run against the stubs below or against scripted test doubles.

use super::error::SessionError;
use super::models::LatLon;
use chrono::Local;

/// Validates login credentials
pub trait CredentialValidator {
    fn validate(&self, email: &str, password: &str) -> Result<(), SessionError>;
}

/// Resolves the device position for the "use GPS" path
pub trait LocationProvider {
    fn resolve_current_position(&self) -> Result<LatLon, SessionError>;
}

/// Source of formatted wall-clock timestamps for new messages
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Accepts any credentials; there is no account backend
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAnyCredentials;

impl CredentialValidator for AcceptAnyCredentials {
    fn validate(&self, _email: &str, _password: &str) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Reports a configured position, or unavailability when none is set
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    position: Option<LatLon>,
}

impl FixedLocation {
    pub fn at(position: LatLon) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn unavailable() -> Self {
        Self { position: None }
    }
}

impl LocationProvider for FixedLocation {
    fn resolve_current_position(&self) -> Result<LatLon, SessionError> {
        self.position.ok_or(SessionError::LocationUnavailable)
    }
}

/// Message timestamp format, shared with the seeded messages
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Clock that always reports the same instant
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

#[cfg(test)]
impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_location_reports_unavailable() {
        assert_eq!(
            FixedLocation::unavailable().resolve_current_position(),
            Err(SessionError::LocationUnavailable)
        );
        let here = LatLon::new(51.5, -0.12);
        assert_eq!(FixedLocation::at(here).resolve_current_position(), Ok(here));
    }

    #[test]
    fn system_clock_matches_seed_format() {
        let stamp = SystemClock.timestamp();
        assert!(
            chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok(),
            "unexpected timestamp {stamp}"
        );
    }
}
