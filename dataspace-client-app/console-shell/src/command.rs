//! Input line grammar

/// One line read from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/some/path` or `go /some/path`
    Navigate(String),
    /// `top <menu id>`
    SelectTop(String),
    /// `click <menu id>`
    Click(String),
    Toggle,
    Show,
    /// `list <store>`
    List(String),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.starts_with('/') {
            return Ok(Command::Navigate(line.to_string()));
        }

        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(format!("Too many arguments: {}", line));
        }

        match (verb, arg) {
            ("go", Some(path)) => Ok(Command::Navigate(path)),
            ("top", Some(id)) => Ok(Command::SelectTop(id)),
            ("click", Some(id)) => Ok(Command::Click(id)),
            ("list", Some(store)) => Ok(Command::List(store)),
            ("toggle", None) => Ok(Command::Toggle),
            ("show" | "", None) => Ok(Command::Show),
            ("quit" | "exit", None) => Ok(Command::Quit),
            (verb, _) => Err(format!("Unknown command: {}", verb)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            Command::parse("/system/users\n"),
            Ok(Command::Navigate("/system/users".into()))
        );
        assert_eq!(Command::parse("click data-assets"), Ok(Command::Click("data-assets".into())));
        assert_eq!(Command::parse("  toggle "), Ok(Command::Toggle));
        assert_eq!(Command::parse(""), Ok(Command::Show));
        assert!(Command::parse("click").is_err());
        assert!(Command::parse("top a b").is_err());
    }
}
