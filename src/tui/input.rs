// Key debouncing for command keys
//
// Terminals without keyboard enhancement never send Release events, so a held
// key arrives as a stream of presses. Command keys fire once per press (with a
// short debounce); navigation keys repeat after a delay. Characters typed into
// a focused text field never pass through here.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Fire once per press; Enter, Tab, shortcuts
    StateChange,

    /// Fire on press, then repeat while held; arrows
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn release(&mut self) {
        *self = Self::default();
    }
}

pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Returns true if the press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_default();

        if !state.is_pressed {
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        let (Some(press_start), Some(last)) = (state.press_started, state.last_triggered) else {
            return false;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(press_start) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };
        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right],
            KeyBehavior::navigation(),
        );

        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Char(' '),
                KeyCode::Char('q'),
                KeyCode::Char('?'),
                // dashboard shortcuts
                KeyCode::Char('g'),
                KeyCode::Char('s'),
                KeyCode::Char('b'),
                // panels and themes
                KeyCode::Char('l'),
                KeyCode::Char('t'),
                KeyCode::Char('p'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_change_no_repeat() {
        let mut handler = InputHandler::new();
        handler.configure_key(KeyCode::Enter, KeyBehavior::StateChange);
        let start = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Enter, start));
        assert!(!handler.handle_key_press_at(KeyCode::Enter, start + Duration::from_millis(20)));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press_at(KeyCode::Enter, start + Duration::from_millis(40)));
    }

    #[test]
    fn test_held_key_fires_again_after_debounce() {
        let mut handler = InputHandler::with_default_config();
        let start = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Char('s'), start));
        assert!(!handler.handle_key_press_at(KeyCode::Char('s'), start + Duration::from_millis(100)));
        assert!(handler.handle_key_press_at(KeyCode::Char('s'), start + Duration::from_millis(160)));
    }

    #[test]
    fn test_repeatable_with_delay() {
        let mut handler = InputHandler::new();
        handler.configure_key(
            KeyCode::Down,
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );
        let start = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Down, start));
        assert!(!handler.handle_key_press_at(KeyCode::Down, start + Duration::from_millis(10)));
        assert!(handler.handle_key_press_at(KeyCode::Down, start + Duration::from_millis(110)));
        assert!(!handler.handle_key_press_at(KeyCode::Down, start + Duration::from_millis(130)));
        assert!(handler.handle_key_press_at(KeyCode::Down, start + Duration::from_millis(170)));
    }
}
