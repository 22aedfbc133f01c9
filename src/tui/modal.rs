// Modal overlays
//
// App holds Option<Modal>; input routing acts on the returned ModalAction.

use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed
    None,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Signed-in user's profile card
    Profile,
}

impl Modal {
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        let toggle = match self {
            Modal::Help => KeyCode::Char('?'),
            Modal::Profile => KeyCode::Char('p'),
        };
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
            k if k == toggle => ModalAction::Close,
            _ => ModalAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modals_close_on_their_own_key() {
        assert_eq!(Modal::Help.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(Modal::Help.handle_input(KeyCode::Char('p')), ModalAction::None);
        assert_eq!(Modal::Profile.handle_input(KeyCode::Char('p')), ModalAction::Close);
        assert_eq!(Modal::Profile.handle_input(KeyCode::Esc), ModalAction::Close);
    }
}
