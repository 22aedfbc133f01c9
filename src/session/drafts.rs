//! Uncommitted form state
//!
//! Drafts hold raw text exactly as typed. `validate` is the form boundary: it
//! turns the text into a typed `New*` record or reports the first bad field,
//! and never mutates the draft.

use super::error::SessionError;
use super::models::{LatLon, NewAlert, NewMessage, NewProduct, Severity};

/// Every editable text field across all screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Password,
    Latitude,
    Longitude,
    AlertKind,
    AlertLocation,
    ProductName,
    ProductPrice,
    ProductSeller,
    MessageContent,
    NewsSearch,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Email => "Email address",
            FieldId::Password => "Password",
            FieldId::Latitude => "Latitude",
            FieldId::Longitude => "Longitude",
            FieldId::AlertKind => "Alert Type",
            FieldId::AlertLocation => "Location",
            FieldId::ProductName => "Product Name",
            FieldId::ProductPrice => "Price",
            FieldId::ProductSeller => "Seller Name",
            FieldId::MessageContent => "Message",
            FieldId::NewsSearch => "Search news",
        }
    }

    /// Rendered masked
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldId::Password)
    }
}

/// One edit applied to a text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Push(char),
    Pop,
    Clear,
}

impl FieldEdit {
    pub fn apply(self, target: &mut String) {
        match self {
            FieldEdit::Push(c) => target.push(c),
            FieldEdit::Pop => {
                target.pop();
            }
            FieldEdit::Clear => target.clear(),
        }
    }
}

fn required(field: FieldId, value: &str) -> Result<String, SessionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SessionError::required(field.label()));
    }
    Ok(trimmed.to_string())
}

/// Like [`required`], but keeps the text exactly as typed
fn non_blank(field: FieldId, value: &str) -> Result<String, SessionError> {
    if value.trim().is_empty() {
        return Err(SessionError::required(field.label()));
    }
    Ok(value.to_string())
}

fn number(field: FieldId, value: &str) -> Result<f64, SessionError> {
    let text = required(field, value)?;
    let parsed: f64 = text
        .parse()
        .map_err(|_| SessionError::invalid(field.label(), "must be a number"))?;
    if !parsed.is_finite() {
        return Err(SessionError::invalid(field.label(), "must be a number"));
    }
    Ok(parsed)
}

// ─────────────────────────────────────────────────────────────────────────────
// Gating drafts
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialsDraft {
    pub email: String,
    pub password: String,
}

impl CredentialsDraft {
    pub fn validate(&self) -> Result<(String, String), SessionError> {
        let email = required(FieldId::Email, &self.email)?;
        if !email.contains('@') {
            return Err(SessionError::invalid(
                FieldId::Email.label(),
                "must contain '@'",
            ));
        }
        // Passwords are not trimmed; only emptiness is rejected
        if self.password.is_empty() {
            return Err(SessionError::required(FieldId::Password.label()));
        }
        Ok((email, self.password.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationDraft {
    pub latitude: String,
    pub longitude: String,
}

impl LocationDraft {
    /// Draft prefilled with a suggested coordinate
    pub fn prefilled(center: LatLon) -> Self {
        Self {
            latitude: center.lat.to_string(),
            longitude: center.lon.to_string(),
        }
    }

    pub fn validate(&self) -> Result<LatLon, SessionError> {
        let lat = number(FieldId::Latitude, &self.latitude)?;
        let lon = number(FieldId::Longitude, &self.longitude)?;
        LatLon::checked(lat, lon)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard drafts
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertDraft {
    pub kind: String,
    pub location: String,
    pub severity: Option<Severity>,
}

impl AlertDraft {
    pub fn validate(&self) -> Result<NewAlert, SessionError> {
        Ok(NewAlert {
            kind: required(FieldId::AlertKind, &self.kind)?,
            location: required(FieldId::AlertLocation, &self.location)?,
            severity: self
                .severity
                .ok_or_else(|| SessionError::required("Severity"))?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub seller: String,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<NewProduct, SessionError> {
        let name = required(FieldId::ProductName, &self.name)?;
        let price = number(FieldId::ProductPrice, &self.price)?;
        if price < 0.0 {
            return Err(SessionError::invalid(
                FieldId::ProductPrice.label(),
                "must not be negative",
            ));
        }
        let seller = required(FieldId::ProductSeller, &self.seller)?;
        Ok(NewProduct {
            name,
            price,
            seller,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDraft {
    pub content: String,
}

impl MessageDraft {
    /// Author and timestamp are supplied by the session at send time
    pub fn validate(&self, user: &str, timestamp: String) -> Result<NewMessage, SessionError> {
        Ok(NewMessage {
            user: user.to_string(),
            content: non_blank(FieldId::MessageContent, &self.content)?,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_edits() {
        let mut text = String::from("Oa");
        FieldEdit::Push('k').apply(&mut text);
        assert_eq!(text, "Oak");
        FieldEdit::Pop.apply(&mut text);
        assert_eq!(text, "Oa");
        FieldEdit::Clear.apply(&mut text);
        assert!(text.is_empty());
        FieldEdit::Pop.apply(&mut text);
        assert!(text.is_empty());
    }

    #[test]
    fn credentials_require_both_fields() {
        let mut draft = CredentialsDraft::default();
        assert_eq!(
            draft.validate(),
            Err(SessionError::required("Email address"))
        );
        draft.email = "a@b.com".into();
        assert_eq!(draft.validate(), Err(SessionError::required("Password")));
        draft.password = "x".into();
        assert_eq!(draft.validate(), Ok(("a@b.com".into(), "x".into())));
    }

    #[test]
    fn credentials_reject_malformed_email() {
        let draft = CredentialsDraft {
            email: "not-an-email".into(),
            password: "x".into(),
        };
        assert!(matches!(
            draft.validate(),
            Err(SessionError::Validation { field: "Email address", .. })
        ));
    }

    #[test]
    fn location_parses_and_checks_range() {
        let draft = LocationDraft {
            latitude: " 48.85 ".into(),
            longitude: "2.35".into(),
        };
        assert_eq!(draft.validate(), Ok(LatLon::new(48.85, 2.35)));

        let bad = LocationDraft {
            latitude: "91".into(),
            longitude: "0".into(),
        };
        assert!(bad.validate().is_err());

        let text = LocationDraft {
            latitude: "north".into(),
            longitude: "0".into(),
        };
        assert_eq!(
            text.validate(),
            Err(SessionError::invalid("Latitude", "must be a number"))
        );

        let nan = LocationDraft {
            latitude: "NaN".into(),
            longitude: "0".into(),
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn prefilled_location_validates_to_same_point() {
        let center = LatLon::new(-3.4653, -62.2159);
        assert_eq!(LocationDraft::prefilled(center).validate(), Ok(center));
    }

    #[test]
    fn alert_requires_severity() {
        let mut draft = AlertDraft {
            kind: "Wildfire".into(),
            location: "Sierra Nevada".into(),
            severity: None,
        };
        assert_eq!(draft.validate(), Err(SessionError::required("Severity")));
        draft.severity = Some(Severity::High);
        let alert = draft.validate().unwrap();
        assert_eq!(alert.kind, "Wildfire");
        assert_eq!(alert.severity, Severity::High);
    }

    #[test]
    fn alert_rejects_blank_kind() {
        let draft = AlertDraft {
            kind: "   ".into(),
            location: "Borneo".into(),
            severity: Some(Severity::Low),
        };
        assert_eq!(draft.validate(), Err(SessionError::required("Alert Type")));
    }

    #[test]
    fn product_price_must_be_non_negative_number() {
        let mut draft = ProductDraft {
            name: "Pine".into(),
            price: "-1".into(),
            seller: "Acme".into(),
        };
        assert_eq!(
            draft.validate(),
            Err(SessionError::invalid("Price", "must not be negative"))
        );

        draft.price = "free".into();
        assert_eq!(
            draft.validate(),
            Err(SessionError::invalid("Price", "must be a number"))
        );

        draft.price = "0".into();
        assert_eq!(draft.validate().map(|p| p.price), Ok(0.0));

        draft.price = "9.99".into();
        let product = draft.validate().unwrap();
        assert_eq!(product.name, "Pine");
        assert!((product.price - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn message_takes_author_from_caller() {
        let draft = MessageDraft {
            content: "Plant more oaks".into(),
        };
        let message = draft.validate("John Doe", "2024-04-22 09:00".into()).unwrap();
        assert_eq!(message.user, "John Doe");
        assert_eq!(message.timestamp, "2024-04-22 09:00");

        let empty = MessageDraft::default();
        assert_eq!(
            empty.validate("John Doe", String::new()),
            Err(SessionError::required("Message"))
        );
    }

    #[test]
    fn message_content_is_sent_as_typed() {
        let draft = MessageDraft {
            content: "  spaced  ".into(),
        };
        let message = draft.validate("John Doe", String::new()).unwrap();
        assert_eq!(message.content, "  spaced  ");

        let blank = MessageDraft {
            content: " \t ".into(),
        };
        assert_eq!(
            blank.validate("John Doe", String::new()),
            Err(SessionError::required("Message"))
        );
    }
}
