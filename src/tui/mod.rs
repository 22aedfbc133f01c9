// TUI module - Terminal User Interface
//
// Sets up the terminal, runs the event loop and turns key presses into
// session intents. Rendering lives in `views`; state in `app`.

pub mod app;
pub mod components;
pub mod focus;
pub mod input;
pub mod layout;
pub mod modal;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::session::{FieldEdit, Session, Tab};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use focus::{Action, Target};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI until the user quits
pub async fn run_tui(session: Session, log_buffer: LogBuffer, config: &Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(session, config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Redraw on every key and on a timer, so uptime, toasts and the log panel
/// stay current without input.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(uptime = %app.uptime(), "Session ended");
    Ok(())
}

/// Layered dispatch: Release → Ctrl → Modal → Text field → Global → Screen
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key);
        return;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('u') if app.is_editing() => app.edit_focused(FieldEdit::Clear),
            _ => {}
        }
        return;
    }

    if handle_modal_input(app, key) {
        return;
    }

    if app.is_editing() {
        handle_text_input(app, key);
        return;
    }

    if !app.handle_key_press(key) {
        return;
    }

    if handle_global_keys(app, key) {
        return;
    }

    handle_screen_keys(app, key);
}

fn handle_modal_input(app: &mut App, key: KeyCode) -> bool {
    let Some(mut open) = app.modal else {
        return false;
    };
    if app.handle_key_press(key) && open.handle_input(key) == ModalAction::Close {
        app.modal = None;
    }
    true
}

/// Typing bypasses the debounce; only the keys that leave or submit the
/// field go through it.
fn handle_text_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.edit_focused(FieldEdit::Push(c)),
        KeyCode::Backspace => app.edit_focused(FieldEdit::Pop),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => {
            if !app.handle_key_press(key) {
                return;
            }
            match key {
                KeyCode::Esc => app.blur(),
                KeyCode::Enter => app.activate_focused(),
                KeyCode::Tab => app.focus_next(),
                _ => app.focus_prev(),
            }
        }
        _ => {}
    }
}

fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_modal(Modal::Help),
        KeyCode::Char('p') if app.current_tab().is_some() => app.toggle_modal(Modal::Profile),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Esc => app.blur(),
        KeyCode::Char('/') => app.focus_first_field(),
        _ => return false,
    }
    true
}

fn handle_screen_keys(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.activate_focused();
        return;
    }

    if app.focused() == Some(Target::Severity) {
        let forward = match key {
            KeyCode::Up | KeyCode::Char(' ') => Some(true),
            KeyCode::Down => Some(false),
            _ => None,
        };
        if let Some(forward) = forward {
            app.cycle_severity(forward);
            return;
        }
    }

    let Some(tab) = app.current_tab() else {
        return;
    };

    match key {
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            if let Some(target) = Tab::from_index(index) {
                app.select_tab(target);
            }
        }
        KeyCode::Left => app.prev_tab(),
        KeyCode::Right => app.next_tab(),
        KeyCode::Char('g') if tab == Tab::Reforestation => app.activate(Action::Generate),
        KeyCode::Char('s') if tab == Tab::Aqi => app.activate(Action::Simulate),
        KeyCode::Char('b') if tab == Tab::Marketplace && !app.session.user().is_seller() => {
            app.activate(Action::Buy)
        }
        KeyCode::Up if tab == Tab::Marketplace => app.move_product_selection(false),
        KeyCode::Down if tab == Tab::Marketplace => app.move_product_selection(true),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::models::{Role, Severity};
    use crate::session::{FieldId, GateStage};
    use app::tests::{active_app, app_with_role};
    use crossterm::event::KeyEventState;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        // every press is released, so the debounce never swallows the next one
        handle_key_event(
            app,
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Release,
                state: KeyEventState::NONE,
            },
        );
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn full_gate_by_keyboard() {
        let mut app = app_with_role(Role::User);
        type_str(&mut app, "quinn@example.org");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "pw");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.gate(), GateStage::AwaitingLocation);

        // prefilled coordinates are accepted as they are
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.gate(), GateStage::Active);
        assert_eq!(app.current_tab(), Some(Tab::Home));
    }

    #[test]
    fn q_types_into_fields_but_quits_in_browse_mode() {
        let mut app = app_with_role(Role::User);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.session.field(FieldId::Email), Some("q"));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = app_with_role(Role::User);
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_u_clears_the_focused_field() {
        let mut app = app_with_role(Role::User);
        type_str(&mut app, "typo@example.org");
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.session.field(FieldId::Email), Some(""));
        assert!(!app.should_quit);
    }

    #[test]
    fn number_keys_select_tabs() {
        let mut app = active_app(Role::User);
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.current_tab(), Some(Tab::Aqi));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.current_tab(), Some(Tab::Home));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.current_tab(), Some(Tab::Aqi));
    }

    #[test]
    fn report_alert_by_keyboard() {
        let mut app = active_app(Role::User);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "Flood");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Delta");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), Some(Target::Severity));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        let dashboard = app.session.dashboard().unwrap();
        let alert = dashboard.alerts().get(3).unwrap();
        assert_eq!(alert.severity, Severity::High);
        assert_eq!(alert.summary(), "Flood alert in Delta (High severity)");
    }

    #[test]
    fn modal_swallows_keys() {
        let mut app = active_app(Role::User);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current_tab(), Some(Tab::Home));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, None);
    }

    #[test]
    fn shortcuts_only_on_their_tab() {
        let mut app = active_app(Role::User);
        let aqi = app.session.dashboard().unwrap().aqi();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.toast.is_none());
        assert_eq!(app.session.dashboard().unwrap().aqi(), aqi);

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("New suggestion generated")
        );
    }

    #[test]
    fn profile_needs_the_dashboard() {
        let mut app = app_with_role(Role::User);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.modal, None);

        let mut app = active_app(Role::User);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.modal, Some(Modal::Profile));
    }
}
