// Focus targets for the current screen
//
// Every screen exposes an ordered list of focusable widgets. Tab and
// Shift+Tab walk the list; the App stores only an index into it, so the list
// is rebuilt from session state whenever it is needed.

use crate::session::gate::Tab;
use crate::session::{FieldId, Intent, Session, Stage};

/// Buttons the user can activate with Enter or a shortcut key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SignIn,
    SubmitLocation,
    UseGps,
    AddAlert,
    Generate,
    AddProduct,
    Buy,
    Send,
    Simulate,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::SignIn => "Sign In",
            Action::SubmitLocation => "Use This Location",
            Action::UseGps => "Use GPS",
            Action::AddAlert => "Add Alert",
            Action::Generate => "Generate New Suggestion",
            Action::AddProduct => "Add Product",
            Action::Buy => "Buy",
            Action::Send => "Send",
            Action::Simulate => "Simulate Reforestation Impact",
        }
    }

    /// Session intent behind the button; `None` for front-end-only actions
    pub fn intent(&self) -> Option<Intent> {
        let intent = match self {
            Action::SignIn => Intent::SubmitCredentials,
            Action::SubmitLocation => Intent::SubmitLocation,
            Action::UseGps => Intent::UseDeviceLocation,
            Action::AddAlert => Intent::SubmitAlert,
            Action::Generate => Intent::GenerateSuggestion,
            Action::AddProduct => Intent::SubmitProduct,
            Action::Send => Intent::SubmitMessage,
            Action::Simulate => Intent::SimulateImpact,
            Action::Buy => return None,
        };
        Some(intent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Field(FieldId),
    /// Alert severity selector
    Severity,
    Button(Action),
}

impl Target {
    pub fn is_text(&self) -> bool {
        matches!(self, Target::Field(_))
    }
}

/// Focus order for whatever the session is currently showing
pub fn targets(session: &Session) -> Vec<Target> {
    use Target::{Button, Field};

    match session.stage() {
        Stage::Unauthenticated(_) => vec![
            Field(FieldId::Email),
            Field(FieldId::Password),
            Button(Action::SignIn),
        ],
        Stage::AwaitingLocation(_) => vec![
            Field(FieldId::Latitude),
            Field(FieldId::Longitude),
            Button(Action::SubmitLocation),
            Button(Action::UseGps),
        ],
        Stage::Active(dashboard) => match dashboard.tab() {
            Tab::Home => vec![Field(FieldId::NewsSearch)],
            Tab::Map => vec![],
            Tab::Alerts => vec![
                Field(FieldId::AlertKind),
                Field(FieldId::AlertLocation),
                Target::Severity,
                Button(Action::AddAlert),
            ],
            Tab::Reforestation => vec![Button(Action::Generate)],
            Tab::Marketplace if session.user().is_seller() => vec![
                Field(FieldId::ProductName),
                Field(FieldId::ProductPrice),
                Field(FieldId::ProductSeller),
                Button(Action::AddProduct),
            ],
            Tab::Marketplace => vec![Button(Action::Buy)],
            Tab::Social => vec![Field(FieldId::MessageContent), Button(Action::Send)],
            Tab::Aqi => vec![Button(Action::Simulate)],
        },
    }
}

/// Action that Enter on a text field submits
pub fn submit_action(field: FieldId) -> Option<Action> {
    match field {
        FieldId::Email | FieldId::Password => Some(Action::SignIn),
        FieldId::Latitude | FieldId::Longitude => Some(Action::SubmitLocation),
        FieldId::AlertKind | FieldId::AlertLocation => Some(Action::AddAlert),
        FieldId::ProductName | FieldId::ProductPrice | FieldId::ProductSeller => {
            Some(Action::AddProduct)
        }
        FieldId::MessageContent => Some(Action::Send),
        // search filters live
        FieldId::NewsSearch => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::models::{LatLon, Role};
    use crate::session::{Services, SessionSettings};

    fn active(role: Role) -> Session {
        let mut settings = SessionSettings::default();
        settings.user.role = role;
        let mut session = Session::new(settings, Services::standard(None, Some(1)));
        session.submit_credentials("a@b.com", "x").unwrap();
        session.submit_location(LatLon::new(0.0, 0.0)).unwrap();
        session
    }

    #[test]
    fn gate_screens_start_with_fields() {
        let session = Session::new(SessionSettings::default(), Services::standard(None, Some(1)));
        assert_eq!(targets(&session)[0], Target::Field(FieldId::Email));
    }

    #[test]
    fn marketplace_form_only_for_sellers() {
        let mut user = active(Role::User);
        user.apply(Intent::SelectTab(Tab::Marketplace)).unwrap();
        assert_eq!(targets(&user), vec![Target::Button(Action::Buy)]);

        let mut seller = active(Role::Seller);
        seller.apply(Intent::SelectTab(Tab::Marketplace)).unwrap();
        assert!(targets(&seller).contains(&Target::Button(Action::AddProduct)));
    }

    #[test]
    fn every_button_but_buy_maps_to_an_intent() {
        assert_eq!(Action::Buy.intent(), None);
        assert_eq!(Action::Simulate.intent(), Some(Intent::SimulateImpact));
        assert_eq!(submit_action(FieldId::ProductPrice), Some(Action::AddProduct));
        assert_eq!(submit_action(FieldId::NewsSearch), None);
    }
}
