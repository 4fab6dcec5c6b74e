//! Command grammar for the serial console.
//!
//! One whitespace-trimmed line holds one command: the first space-delimited
//! token is the verb (case-insensitive), the remainder is the argument string.
//! A [`Command`] borrows the input line and lives only for one dispatch call.

mod parser;
mod verb;

pub use parser::{parse_int, parse_steps, SCRATCH_LEN};
pub use verb::Verb;

/// One parsed input line, split into verb token and argument string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    /// The raw verb token, as received.
    pub verb_token: &'a str,
    /// Everything after the first space (may be empty).
    pub args: &'a str,
}

impl<'a> Command<'a> {
    /// Split one input line. Returns `None` for empty (or all-whitespace)
    /// lines, which produce no reply.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match line.find(' ') {
            Some(sp) => Some(Self {
                verb_token: &line[..sp],
                args: &line[sp + 1..],
            }),
            None => Some(Self {
                verb_token: line,
                args: "",
            }),
        }
    }

    /// Look up the verb, if it is in the table.
    pub fn verb(&self) -> Option<Verb> {
        Verb::parse(self.verb_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lines_ignored() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("\r\n"), None);
    }

    #[test]
    fn test_verb_only() {
        let cmd = Command::parse("STOP\n").unwrap();
        assert_eq!(cmd.verb_token, "STOP");
        assert_eq!(cmd.args, "");
        assert_eq!(cmd.verb(), Some(Verb::Stop));
    }

    #[test]
    fn test_verb_and_args() {
        let cmd = Command::parse("  AB 100 50  ").unwrap();
        assert_eq!(cmd.verb_token, "AB");
        assert_eq!(cmd.args, "100 50");
    }

    #[test]
    fn test_unknown_verb() {
        let cmd = Command::parse("FROBNICATE 1").unwrap();
        assert_eq!(cmd.verb(), None);
    }
}
