use crate::app::ReaderKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key press in Reading mode to a reader action.
pub fn reader_key(key: KeyEvent) -> Option<ReaderKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(ReaderKey::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(ReaderKey::TogglePause),
        KeyCode::Left => Some(ReaderKey::SeekBack),
        KeyCode::Right => Some(ReaderKey::SeekForward),
        KeyCode::Up => Some(ReaderKey::Faster),
        KeyCode::Down => Some(ReaderKey::Slower),
        KeyCode::Char('s') => Some(ReaderKey::Stop),
        KeyCode::Esc => Some(ReaderKey::Leave),
        KeyCode::Char('q') => Some(ReaderKey::Quit),
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
    fn test_playback_keys() {
        assert_eq!(reader_key(press(KeyCode::Char(' '))), Some(ReaderKey::TogglePause));
        assert_eq!(reader_key(press(KeyCode::Left)), Some(ReaderKey::SeekBack));
        assert_eq!(reader_key(press(KeyCode::Right)), Some(ReaderKey::SeekForward));
        assert_eq!(reader_key(press(KeyCode::Up)), Some(ReaderKey::Faster));
        assert_eq!(reader_key(press(KeyCode::Down)), Some(ReaderKey::Slower));
        assert_eq!(reader_key(press(KeyCode::Char('s'))), Some(ReaderKey::Stop));
    }

    #[test]
    fn test_leave_and_quit() {
        assert_eq!(reader_key(press(KeyCode::Esc)), Some(ReaderKey::Leave));
        assert_eq!(reader_key(press(KeyCode::Char('q'))), Some(ReaderKey::Quit));
        assert_eq!(
            reader_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(ReaderKey::Quit)
        );
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(reader_key(press(KeyCode::Char('x'))), None);
        assert_eq!(reader_key(press(KeyCode::Enter)), None);
    }
}
