//! Interactive reachability queries against a built graph.

mod session;

pub use session::{Session, SessionSummary, DEFAULT_PROMPT};

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    Quit,
    Pair { src: String, dest: String },
    /// Anything that is neither `quit` nor exactly two names.
    Usage,
}

impl QueryCommand {
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["quit", ..] => QueryCommand::Quit,
            [src, dest] => QueryCommand::Pair {
                src: (*src).to_string(),
                dest: (*dest).to_string(),
            },
            _ => QueryCommand::Usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit() {
        assert_eq!(QueryCommand::parse("quit"), QueryCommand::Quit);
        assert_eq!(QueryCommand::parse("  quit  \n"), QueryCommand::Quit);
        assert_eq!(QueryCommand::parse("quit now"), QueryCommand::Quit);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            QueryCommand::parse("UME  LLA\n"),
            QueryCommand::Pair {
                src: "UME".to_string(),
                dest: "LLA".to_string()
            }
        );
    }

    #[test]
    fn test_parse_usage() {
        assert_eq!(QueryCommand::parse(""), QueryCommand::Usage);
        assert_eq!(QueryCommand::parse("A"), QueryCommand::Usage);
        assert_eq!(QueryCommand::parse("A B C"), QueryCommand::Usage);
        // Case matters: only the lowercase word ends the session.
        assert_eq!(QueryCommand::parse("QUIT"), QueryCommand::Usage);
    }
}
