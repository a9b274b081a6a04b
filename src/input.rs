use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use model::Side;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Swipe(Side),
    Continue,
    Reset,
    Quit,
}

pub fn command_from_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Swipe(Side::Left)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Swipe(Side::Right))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Swipe(Side::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Swipe(Side::Down)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Continue),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd() {
        assert_eq!(
            command_from_key(press(KeyCode::Left)),
            Some(Command::Swipe(Side::Left))
        );
        assert_eq!(
            command_from_key(press(KeyCode::Char('w'))),
            Some(Command::Swipe(Side::Up))
        );
        assert_eq!(
            command_from_key(press(KeyCode::Char('S'))),
            Some(Command::Swipe(Side::Down))
        );
        assert_eq!(
            command_from_key(press(KeyCode::Right)),
            Some(Command::Swipe(Side::Right))
        );
    }

    #[test]
    fn ctrl_c_quits_plain_c_continues() {
        assert_eq!(
            command_from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(
            command_from_key(press(KeyCode::Char('c'))),
            Some(Command::Continue)
        );
    }

    #[test]
    fn releases_and_unknown_keys_are_ignored() {
        let mut release = press(KeyCode::Left);
        release.kind = KeyEventKind::Release;
        assert_eq!(command_from_key(release), None);
        assert_eq!(command_from_key(press(KeyCode::Char('x'))), None);
    }
}
