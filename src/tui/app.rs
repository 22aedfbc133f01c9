// TUI application state
//
// App wraps the session with everything that only matters on screen: focus,
// theme, overlays and the log panel. Session state changes go through
// `App::apply`, which turns the outcome (or the refusal) into a toast.

use super::components::Toast;
use super::focus::{self, Action, Target};
use super::input::InputHandler;
use super::modal::Modal;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::session::models::Severity;
use crate::session::{FieldEdit, GateStage, Intent, Outcome, Session, Tab};
use crate::theme::Theme;
use crossterm::event::KeyCode;
use std::time::Instant;

pub struct App {
    pub session: Session,
    pub theme: Theme,
    use_theme_background: bool,

    /// Index into [`focus::targets`]; `None` is browse mode
    focus: Option<usize>,

    /// Highlighted row in the marketplace list
    pub selected_product: usize,

    pub show_logs: bool,
    pub log_buffer: LogBuffer,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    pub should_quit: bool,
    pub start_time: Instant,

    input_handler: InputHandler,
}

impl App {
    pub fn new(session: Session, config: &Config, log_buffer: LogBuffer) -> Self {
        let mut app = Self {
            session,
            theme: Theme::by_name(&config.theme, config.use_theme_background),
            use_theme_background: config.use_theme_background,
            focus: None,
            selected_product: 0,
            show_logs: config.show_logs,
            log_buffer,
            modal: None,
            toast: None,
            should_quit: false,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
        };
        app.reset_focus();
        app
    }

    // ─── Focus ───────────────────────────────────────────────

    pub fn targets(&self) -> Vec<Target> {
        focus::targets(&self.session)
    }

    pub fn focused(&self) -> Option<Target> {
        let index = self.focus?;
        self.targets().get(index).copied()
    }

    pub fn is_focused(&self, target: Target) -> bool {
        self.focused() == Some(target)
    }

    /// A text field has focus; printable keys go into it
    pub fn is_editing(&self) -> bool {
        self.focused().is_some_and(|t| t.is_text())
    }

    pub fn focus_next(&mut self) {
        let count = self.targets().len();
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn focus_prev(&mut self) {
        let count = self.targets().len();
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Focus the first text field on screen, if any
    pub fn focus_first_field(&mut self) {
        self.focus = self.targets().iter().position(Target::is_text);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    /// Gate screens are forms, so they open with the first field focused
    fn reset_focus(&mut self) {
        self.focus = match self.session.gate() {
            GateStage::Active => None,
            _ => Some(0),
        };
    }

    // ─── Session ─────────────────────────────────────────────

    /// Send an intent; returns true if the session accepted it
    pub fn apply(&mut self, intent: Intent) -> bool {
        let before = self.session.gate();
        match self.session.apply(intent) {
            Ok(outcome) => {
                if self.session.gate() != before {
                    self.reset_focus();
                }
                if let Outcome::TabSelected { changed: true, .. } = outcome {
                    self.focus = None;
                    self.selected_product = 0;
                }
                if let Some(notice) = outcome.notice() {
                    self.show_toast(Toast::info(notice));
                }
                true
            }
            Err(err) => {
                self.show_toast(Toast::error(capitalize(&err.to_string())));
                false
            }
        }
    }

    /// Run a button's action
    pub fn activate(&mut self, action: Action) {
        if action == Action::Buy {
            self.buy_selected();
            return;
        }
        if action == Action::AddProduct && !self.session.user().is_seller() {
            self.show_toast(Toast::error("Only sellers can list products"));
            return;
        }
        if let Some(intent) = action.intent() {
            self.apply(intent);
        }
    }

    /// Enter on whatever has focus
    pub fn activate_focused(&mut self) {
        match self.focused() {
            Some(Target::Button(action)) => self.activate(action),
            Some(Target::Severity) => self.activate(Action::AddAlert),
            Some(Target::Field(field)) => match focus::submit_action(field) {
                Some(action) => self.activate(action),
                None => self.blur(),
            },
            None => self.focus_next(),
        }
    }

    /// Checkout is not part of the marketplace; say so instead of failing silently
    fn buy_selected(&mut self) {
        let Some(dashboard) = self.session.dashboard() else {
            return;
        };
        let Some(product) = dashboard.products().as_slice().get(self.selected_product) else {
            return;
        };
        tracing::info!(id = product.id, name = %product.name, "Purchase requested");
        let message = format!("Purchasing {} is not available yet", product.name);
        self.show_toast(Toast::info(message));
    }

    pub fn edit_focused(&mut self, edit: FieldEdit) {
        if let Some(Target::Field(field)) = self.focused() {
            self.apply(Intent::Edit { field, edit });
        }
    }

    pub fn cycle_severity(&mut self, forward: bool) {
        let Some(dashboard) = self.session.dashboard() else {
            return;
        };
        let current = dashboard.alert_draft.severity;
        let next = if forward {
            Severity::cycle_forward(current)
        } else {
            Severity::cycle_back(current)
        };
        self.apply(Intent::SetSeverity(next));
    }

    pub fn current_tab(&self) -> Option<Tab> {
        self.session.dashboard().map(|d| d.tab())
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.apply(Intent::SelectTab(tab));
    }

    pub fn next_tab(&mut self) {
        if let Some(tab) = self.current_tab() {
            self.select_tab(tab.next());
        }
    }

    pub fn prev_tab(&mut self) {
        if let Some(tab) = self.current_tab() {
            self.select_tab(tab.prev());
        }
    }

    pub fn move_product_selection(&mut self, down: bool) {
        let count = self
            .session
            .dashboard()
            .map_or(0, |d| d.products().len());
        if count == 0 {
            return;
        }
        self.selected_product = if down {
            (self.selected_product + 1).min(count - 1)
        } else {
            self.selected_product.saturating_sub(1)
        };
    }

    // ─── Chrome ──────────────────────────────────────────────

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn cycle_theme(&mut self) {
        let next = self.theme.next_name();
        self.theme = Theme::by_name(next, self.use_theme_background);
        tracing::debug!(theme = next, "Theme changed");
        self.show_toast(Toast::info(format!("Theme: {next}")));
    }

    /// Open `modal`, or close it if it is already showing
    pub fn toggle_modal(&mut self, modal: Modal) {
        self.modal = match self.modal {
            Some(open) if open == modal => None,
            _ => Some(modal),
        };
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Formatted as HH:MM:SS
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            elapsed / 3600,
            (elapsed % 3600) / 60,
            elapsed % 60
        )
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::session::models::{LatLon, Role};
    use crate::session::{FieldId, Services, SessionSettings};

    pub(crate) fn app_with_role(role: Role) -> App {
        let mut settings = SessionSettings::default();
        settings.user.role = role;
        let session = Session::new(settings, Services::standard(Some(LatLon::new(1.0, 2.0)), Some(7)));
        App::new(session, &Config::default(), LogBuffer::new())
    }

    pub(crate) fn active_app(role: Role) -> App {
        let mut app = app_with_role(role);
        app.session.submit_credentials("a@b.com", "x").unwrap();
        app.session.use_device_location().unwrap();
        app.blur();
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.edit_focused(FieldEdit::Push(c));
        }
    }

    #[test]
    fn sign_in_flow_moves_focus_with_the_gate() {
        let mut app = app_with_role(Role::User);
        assert!(app.is_editing());
        type_text(&mut app, "a@b.com");
        app.focus_next();
        type_text(&mut app, "secret");
        app.activate_focused();

        assert_eq!(app.session.gate(), GateStage::AwaitingLocation);
        assert_eq!(app.focused(), Some(Target::Field(FieldId::Latitude)));
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("Signed in"));
    }

    #[test]
    fn rejected_intent_shows_error_toast() {
        let mut app = app_with_role(Role::User);
        app.activate(Action::SignIn);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, super::super::components::toast::ToastKind::Error);
        assert!(toast.message.starts_with("Email"));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = active_app(Role::User);
        app.select_tab(Tab::Social);
        assert_eq!(app.focused(), None);
        app.focus_prev();
        assert_eq!(app.focused(), Some(Target::Button(Action::Send)));
        app.focus_next();
        assert_eq!(app.focused(), Some(Target::Field(FieldId::MessageContent)));
    }

    #[test]
    fn tab_change_clears_focus() {
        let mut app = active_app(Role::User);
        app.focus_first_field();
        assert!(app.is_editing());
        app.next_tab();
        assert_eq!(app.current_tab(), Some(Tab::Map));
        assert_eq!(app.focused(), None);
    }

    #[test]
    fn users_cannot_list_products() {
        let mut app = active_app(Role::User);
        app.activate(Action::AddProduct);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Only sellers can list products")
        );
        assert_eq!(app.session.dashboard().unwrap().products().len(), 2);
    }

    #[test]
    fn sellers_list_products() {
        let mut app = active_app(Role::Seller);
        app.select_tab(Tab::Marketplace);
        app.focus_first_field();
        assert_eq!(app.focused(), Some(Target::Field(FieldId::ProductName)));
        type_text(&mut app, "Pine");
        app.focus_next();
        type_text(&mut app, "9.99");
        app.focus_next();
        type_text(&mut app, "Acme");
        app.activate(Action::AddProduct);

        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Product #3 listed")
        );
        let dashboard = app.session.dashboard().unwrap();
        let product = &dashboard.products().as_slice()[2];
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Pine");
        assert_eq!(product.seller, "Acme");
        assert!(dashboard.product_draft.name.is_empty());
    }

    #[test]
    fn buy_reports_unavailable() {
        let mut app = active_app(Role::User);
        app.select_tab(Tab::Marketplace);
        app.move_product_selection(true);
        app.move_product_selection(true);
        assert_eq!(app.selected_product, 1);
        app.activate(Action::Buy);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Purchasing Maple Seeds is not available yet")
        );
    }

    #[test]
    fn severity_selector_cycles() {
        let mut app = active_app(Role::User);
        app.cycle_severity(true);
        app.cycle_severity(true);
        let draft = &app.session.dashboard().unwrap().alert_draft;
        assert_eq!(draft.severity, Some(Severity::Medium));
    }

    #[test]
    fn theme_cycles_and_modals_toggle() {
        let mut app = active_app(Role::User);
        app.cycle_theme();
        assert_eq!(app.theme.name, "Ocean");
        app.toggle_modal(Modal::Help);
        assert_eq!(app.modal, Some(Modal::Help));
        app.toggle_modal(Modal::Help);
        assert_eq!(app.modal, None);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("invalid email or password"), "Invalid email or password");
        assert_eq!(capitalize(""), "");
    }
}
