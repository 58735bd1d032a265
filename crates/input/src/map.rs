//! Key mapping from terminal events to game intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use retris_types::GameAction;

/// Map a key event to a game intent.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::RotateCw),

        // Restart (only honored by the engine after a game over)
        KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Whether the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_intents() {
        assert_eq!(handle_key_event(key(KeyCode::Left)), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Right)), Some(GameAction::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Down)), Some(GameAction::SoftDrop));
        assert_eq!(handle_key_event(key(KeyCode::Up)), Some(GameAction::RotateCw));
    }

    #[test]
    fn vi_and_wasd_aliases() {
        assert_eq!(handle_key_event(key(KeyCode::Char('h'))), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Char('d'))), Some(GameAction::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Char('k'))), Some(GameAction::RotateCw));
    }

    #[test]
    fn space_requests_a_reset() {
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Some(GameAction::Reset));
        assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Some(GameAction::Reset));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(handle_key_event(key(KeyCode::Tab)), None);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }
}
