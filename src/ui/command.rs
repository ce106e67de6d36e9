//! Command deck parsing
//!
//! Parses a submitted line in Command mode:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:wpm N` → set the reading speed
//! - `:stop` → stop playback and rewind
//! - `@path` → load a text or Markdown file
//! - `@@` → load the clipboard
//! - anything else → read the line itself

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    SetSpeed(String),
    Stop,
    ReadText(String),
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };
        match (name, arg) {
            ("q" | "quit", "") => Command::Quit,
            ("h" | "help", "") => Command::Help,
            ("stop", "") => Command::Stop,
            ("wpm" | "speed", arg) if !arg.is_empty() => Command::SetSpeed(arg.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::ReadText(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::SetSpeed(value) => AppEvent::SetSpeed(value),
        Command::Stop => AppEvent::Stop,
        Command::ReadText(text) => AppEvent::LoadText(text),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@notes.md"),
            Command::LoadFile("notes.md".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  notes.md"),
            Command::LoadFile("notes.md".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_command(":wpm 450"), Command::SetSpeed("450".to_string()));
        assert_eq!(parse_command(":speed  fast"), Command::SetSpeed("fast".to_string()));
        assert!(matches!(parse_command(":wpm"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_stop() {
        assert_eq!(parse_command(":stop"), Command::Stop);
    }

    #[test]
    fn test_parse_plain_text_is_read() {
        assert_eq!(
            parse_command("美丽的花"),
            Command::ReadText("美丽的花".to_string())
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command(":nope"), Command::Unknown(_)));
        assert!(matches!(parse_command(":q now"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(command_to_app_event(Command::Help), AppEvent::Help);
        assert_eq!(
            command_to_app_event(Command::LoadFile("a.txt".to_string())),
            AppEvent::LoadFile("a.txt".to_string())
        );
        assert_eq!(
            command_to_app_event(Command::LoadClipboard),
            AppEvent::LoadClipboard
        );
        assert_eq!(
            command_to_app_event(Command::ReadText("你好".to_string())),
            AppEvent::LoadText("你好".to_string())
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
