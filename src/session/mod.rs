//! Session core: gate, dashboard and the intent reducer
//!
//! A [`Session`] owns every piece of per-run state. Front-ends read it through
//! accessors and change it only by sending an [`Intent`] to [`Session::apply`].
//! A rejected intent leaves the session exactly as it was.
//!
//! The gate is a type state: sign-in and location screens own their drafts, and
//! the [`Dashboard`] only comes into existence when the gate reaches `Active`.

pub mod aqi;
pub mod collaborators;
pub mod collection;
pub mod dashboard;
pub mod drafts;
pub mod error;
pub mod gate;
pub mod map;
pub mod models;
pub mod settings;
pub mod simulation;

pub use dashboard::Dashboard;
pub use drafts::{FieldEdit, FieldId};
pub use error::SessionError;
pub use gate::{GateStage, Tab};
pub use settings::SessionSettings;

use collaborators::{
    AcceptAnyCredentials, Clock, CredentialValidator, FixedLocation, LocationProvider, SystemClock,
};
use drafts::{CredentialsDraft, LocationDraft};
use models::{LatLon, Severity, User};
use simulation::{RandomSource, RngSource};

/// Collaborators injected into a session
pub struct Services {
    pub credentials: Box<dyn CredentialValidator>,
    pub location: Box<dyn LocationProvider>,
    pub random: Box<dyn RandomSource>,
    pub clock: Box<dyn Clock>,
}

impl Services {
    /// Stub credentials, configured device position, `rand` and the local clock
    pub fn standard(device_location: Option<LatLon>, seed: Option<u64>) -> Self {
        let location = match device_location {
            Some(position) => FixedLocation::at(position),
            None => FixedLocation::unavailable(),
        };
        Self {
            credentials: Box::new(AcceptAnyCredentials),
            location: Box::new(location),
            random: Box::new(RngSource::new(seed)),
            clock: Box::new(SystemClock),
        }
    }
}

/// Where the gate is, together with the state owned by that screen
#[derive(Debug, Clone)]
pub enum Stage {
    Unauthenticated(CredentialsDraft),
    AwaitingLocation(LocationDraft),
    Active(Box<Dashboard>),
}

impl Stage {
    pub fn gate(&self) -> GateStage {
        match self {
            Stage::Unauthenticated(_) => GateStage::Unauthenticated,
            Stage::AwaitingLocation(_) => GateStage::AwaitingLocation,
            Stage::Active(_) => GateStage::Active,
        }
    }
}

/// Everything a front-end can ask the session to do
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Edit { field: FieldId, edit: FieldEdit },
    /// `None` clears the selector back to the placeholder
    SetSeverity(Option<Severity>),
    SubmitCredentials,
    SubmitLocation,
    UseDeviceLocation,
    SelectTab(Tab),
    SubmitAlert,
    SubmitProduct,
    SubmitMessage,
    GenerateSuggestion,
    SimulateImpact,
}

impl Intent {
    /// Short human name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Edit { .. } => "edit field",
            Intent::SetSeverity(_) => "set severity",
            Intent::SubmitCredentials => "sign in",
            Intent::SubmitLocation => "submit location",
            Intent::UseDeviceLocation => "use device location",
            Intent::SelectTab(_) => "select tab",
            Intent::SubmitAlert => "add alert",
            Intent::SubmitProduct => "add product",
            Intent::SubmitMessage => "send message",
            Intent::GenerateSuggestion => "generate suggestion",
            Intent::SimulateImpact => "simulate impact",
        }
    }
}

/// What an accepted intent changed
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Edited,
    SignedIn,
    Activated { center: LatLon },
    TabSelected { tab: Tab, changed: bool },
    AlertAdded { id: u32 },
    ProductAdded { id: u32 },
    MessageAdded { id: u32 },
    SuggestionGenerated,
    ImpactSimulated { improvement: u32, aqi: u32 },
}

impl Outcome {
    /// One-line confirmation for the front-end, if the outcome deserves one
    pub fn notice(&self) -> Option<String> {
        match self {
            Outcome::Edited | Outcome::TabSelected { .. } => None,
            Outcome::SignedIn => Some("Signed in".to_string()),
            Outcome::Activated { center } => Some(format!("Location set to {center}")),
            Outcome::AlertAdded { id } => Some(format!("Alert #{id} added")),
            Outcome::ProductAdded { id } => Some(format!("Product #{id} listed")),
            Outcome::MessageAdded { .. } => Some("Message sent".to_string()),
            Outcome::SuggestionGenerated => Some("New suggestion generated".to_string()),
            Outcome::ImpactSimulated { improvement, aqi } => {
                Some(format!("AQI improved by {improvement} to {aqi}"))
            }
        }
    }
}

pub struct Session {
    stage: Stage,
    settings: SessionSettings,
    services: Services,
}

impl Session {
    pub fn new(settings: SessionSettings, services: Services) -> Self {
        tracing::debug!(user = %settings.user.name, "Session created");
        Self {
            stage: Stage::Unauthenticated(CredentialsDraft::default()),
            settings,
            services,
        }
    }

    // ─── Read side ───────────────────────────────────────────

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn gate(&self) -> GateStage {
        self.stage.gate()
    }

    pub fn user(&self) -> &User {
        &self.settings.user
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.stage {
            Stage::Active(dashboard) => Some(&**dashboard),
            _ => None,
        }
    }

    fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        match &mut self.stage {
            Stage::Active(dashboard) => Some(&mut **dashboard),
            _ => None,
        }
    }

    /// Current text of a field, if the current screen owns it
    pub fn field(&self, field: FieldId) -> Option<&str> {
        let value = match (&self.stage, field) {
            (Stage::Unauthenticated(d), FieldId::Email) => &d.email,
            (Stage::Unauthenticated(d), FieldId::Password) => &d.password,
            (Stage::AwaitingLocation(d), FieldId::Latitude) => &d.latitude,
            (Stage::AwaitingLocation(d), FieldId::Longitude) => &d.longitude,
            (Stage::Active(d), FieldId::AlertKind) => &d.alert_draft.kind,
            (Stage::Active(d), FieldId::AlertLocation) => &d.alert_draft.location,
            (Stage::Active(d), FieldId::ProductName) => &d.product_draft.name,
            (Stage::Active(d), FieldId::ProductPrice) => &d.product_draft.price,
            (Stage::Active(d), FieldId::ProductSeller) => &d.product_draft.seller,
            (Stage::Active(d), FieldId::MessageContent) => &d.message_draft.content,
            (Stage::Active(d), FieldId::NewsSearch) => &d.news_search,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, field: FieldId) -> Option<&mut String> {
        let value = match (&mut self.stage, field) {
            (Stage::Unauthenticated(d), FieldId::Email) => &mut d.email,
            (Stage::Unauthenticated(d), FieldId::Password) => &mut d.password,
            (Stage::AwaitingLocation(d), FieldId::Latitude) => &mut d.latitude,
            (Stage::AwaitingLocation(d), FieldId::Longitude) => &mut d.longitude,
            (Stage::Active(d), FieldId::AlertKind) => &mut d.alert_draft.kind,
            (Stage::Active(d), FieldId::AlertLocation) => &mut d.alert_draft.location,
            (Stage::Active(d), FieldId::ProductName) => &mut d.product_draft.name,
            (Stage::Active(d), FieldId::ProductPrice) => &mut d.product_draft.price,
            (Stage::Active(d), FieldId::ProductSeller) => &mut d.product_draft.seller,
            (Stage::Active(d), FieldId::MessageContent) => &mut d.message_draft.content,
            (Stage::Active(d), FieldId::NewsSearch) => &mut d.news_search,
            _ => return None,
        };
        Some(value)
    }

    // ─── Reducer ─────────────────────────────────────────────

    /// Apply one intent
    ///
    /// On error nothing has changed; the error names why the intent was refused.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, SessionError> {
        let name = intent.name();
        let result = self.dispatch(intent);
        if let Err(ref err) = result {
            tracing::warn!(intent = name, stage = ?self.gate(), error = %err, "Intent rejected");
        }
        result
    }

    fn dispatch(&mut self, intent: Intent) -> Result<Outcome, SessionError> {
        let refused = SessionError::NotAvailable {
            intent: intent.name(),
            stage: self.gate(),
        };

        match intent {
            Intent::Edit { field, edit } => {
                let target = self.field_mut(field).ok_or(refused)?;
                edit.apply(target);
                tracing::trace!(field = ?field, "Field edited");
                Ok(Outcome::Edited)
            }
            Intent::SetSeverity(severity) => {
                let dashboard = self.dashboard_mut().ok_or(refused)?;
                dashboard.alert_draft.severity = severity;
                Ok(Outcome::Edited)
            }
            Intent::SubmitCredentials => {
                let Stage::Unauthenticated(draft) = &self.stage else {
                    return Err(refused);
                };
                let (email, password) = draft.validate()?;
                self.submit_credentials(&email, &password)
            }
            Intent::SubmitLocation => {
                let Stage::AwaitingLocation(draft) = &self.stage else {
                    return Err(refused);
                };
                let center = draft.validate()?;
                self.submit_location(center)
            }
            Intent::UseDeviceLocation => self.use_device_location(),
            Intent::SelectTab(tab) => {
                let dashboard = self.dashboard_mut().ok_or(refused)?;
                let changed = dashboard.select_tab(tab);
                tracing::debug!(tab = %tab, changed, "Tab selected");
                Ok(Outcome::TabSelected { tab, changed })
            }
            Intent::SubmitAlert => {
                let dashboard = self.dashboard_mut().ok_or(refused)?;
                let new = dashboard.alert_draft.validate()?;
                let alert = dashboard.add_alert(new);
                tracing::info!(id = alert.id, kind = %alert.kind, severity = %alert.severity, "Alert added");
                Ok(Outcome::AlertAdded { id: alert.id })
            }
            Intent::SubmitProduct => {
                let dashboard = self.dashboard_mut().ok_or(refused)?;
                let new = dashboard.product_draft.validate()?;
                let product = dashboard.add_product(new);
                tracing::info!(id = product.id, name = %product.name, price = product.price, "Product listed");
                Ok(Outcome::ProductAdded { id: product.id })
            }
            Intent::SubmitMessage => {
                let Stage::Active(dashboard) = &mut self.stage else {
                    return Err(refused);
                };
                let new = dashboard
                    .message_draft
                    .validate(&self.settings.user.name, self.services.clock.timestamp())?;
                let message = dashboard.add_message(new);
                tracing::info!(id = message.id, user = %message.user, "Message sent");
                Ok(Outcome::MessageAdded { id: message.id })
            }
            Intent::GenerateSuggestion => {
                let Stage::Active(dashboard) = &mut self.stage else {
                    return Err(refused);
                };
                let suggestion =
                    dashboard.generate_reforestation_suggestion(self.services.random.as_mut());
                tracing::debug!(suggestion, "Suggestion generated");
                Ok(Outcome::SuggestionGenerated)
            }
            Intent::SimulateImpact => {
                let Stage::Active(dashboard) = &mut self.stage else {
                    return Err(refused);
                };
                let improvement =
                    dashboard.simulate_reforestation_impact(self.services.random.as_mut());
                let aqi = dashboard.aqi().value();
                tracing::info!(improvement, aqi, "Reforestation impact simulated");
                Ok(Outcome::ImpactSimulated { improvement, aqi })
            }
        }
    }

    // ─── Gate transitions ────────────────────────────────────

    /// Check credentials and move on to the location step
    pub fn submit_credentials(&mut self, email: &str, password: &str) -> Result<Outcome, SessionError> {
        let GateStage::Unauthenticated = self.gate() else {
            return Err(SessionError::NotAvailable {
                intent: "sign in",
                stage: self.gate(),
            });
        };
        self.services.credentials.validate(email, password)?;
        tracing::info!(email, "Signed in");
        self.stage = Stage::AwaitingLocation(LocationDraft::prefilled(self.settings.default_center));
        Ok(Outcome::SignedIn)
    }

    /// Set the map center and open the dashboard
    pub fn submit_location(&mut self, center: LatLon) -> Result<Outcome, SessionError> {
        let GateStage::AwaitingLocation = self.gate() else {
            return Err(SessionError::NotAvailable {
                intent: "submit location",
                stage: self.gate(),
            });
        };
        Ok(self.activate(center))
    }

    /// Ask the location collaborator for a position, then open the dashboard
    pub fn use_device_location(&mut self) -> Result<Outcome, SessionError> {
        let GateStage::AwaitingLocation = self.gate() else {
            return Err(SessionError::NotAvailable {
                intent: "use device location",
                stage: self.gate(),
            });
        };
        let position = self.services.location.resolve_current_position()?;
        // Providers are outside the form boundary, so their fix is checked here
        let center = LatLon::checked(position.lat, position.lon).map_err(|err| {
            tracing::warn!(position = ?position, error = %err, "Device position rejected");
            SessionError::LocationUnavailable
        })?;
        Ok(self.activate(center))
    }

    /// Build the dashboard and run both generators once
    fn activate(&mut self, center: LatLon) -> Outcome {
        let mut dashboard = Dashboard::new(center, self.settings.map_zoom, self.settings.initial_aqi);
        dashboard.generate_reforestation_suggestion(self.services.random.as_mut());
        let improvement = dashboard.simulate_reforestation_impact(self.services.random.as_mut());
        tracing::info!(
            center = %center,
            aqi = dashboard.aqi().value(),
            improvement,
            "Dashboard active"
        );
        self.stage = Stage::Active(Box::new(dashboard));
        Outcome::Activated { center }
    }
}
