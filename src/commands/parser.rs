//! Command-line tokenizing and command lookup.

use std::fmt;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Save,
    Exit,
}

impl Command {
    /// Look up a command by its (lower-case) keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let command = match keyword {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "save" => Self::Save,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::RemovePhone => "remove-phone",
            Self::Delete => "delete",
            Self::Save => "save",
            Self::Exit => "exit",
        }
    }

    /// Argument names, as shown in usage messages.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Add => "<name> <phone>",
            Self::Change => "<name> <old phone> <new phone>",
            Self::Phone | Self::ShowBirthday | Self::Delete => "<name>",
            Self::AddBirthday => "<name> <DD.MM.YYYY>",
            Self::RemovePhone => "<name> <phone>",
            Self::Hello | Self::All | Self::Birthdays | Self::Save | Self::Exit => "no arguments",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Split a raw input line into a lower-cased keyword and its arguments.
///
/// Blank input yields an empty keyword and no arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(keyword) => (
            keyword.to_lowercase(),
            parts.map(str::to_string).collect(),
        ),
        None => (String::new(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let (keyword, args) = parse_input("  ADD Ann 0501234567 ");
        assert_eq!(keyword, "add");
        assert_eq!(args, vec!["Ann", "0501234567"]);
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (_, args) = parse_input("phone ANN");
        assert_eq!(args, vec!["ANN"]);
    }

    #[test]
    fn test_parse_blank_input() {
        assert_eq!(parse_input("   \t"), (String::new(), Vec::new()));
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(Command::from_keyword("add-birthday"), Some(Command::AddBirthday));
        assert_eq!(Command::from_keyword("close"), Some(Command::Exit));
        assert_eq!(Command::from_keyword("exit"), Some(Command::Exit));
        assert_eq!(Command::from_keyword("fly"), None);
        assert_eq!(Command::from_keyword(""), None);
    }

    #[test]
    fn test_keyword_round_trip() {
        let all = [
            Command::Hello,
            Command::Add,
            Command::Change,
            Command::Phone,
            Command::All,
            Command::AddBirthday,
            Command::ShowBirthday,
            Command::Birthdays,
            Command::RemovePhone,
            Command::Delete,
            Command::Save,
            Command::Exit,
        ];
        for command in all {
            assert_eq!(Command::from_keyword(command.keyword()), Some(command));
        }
    }
}
