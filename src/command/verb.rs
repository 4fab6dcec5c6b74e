//! The console verb table.

use crate::axis::AxisId;

/// One recognized console verb.
///
/// Verbs are matched case-insensitively. Anything else is an unknown command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verb {
    /// HELP / H / ? - print the command reference.
    Help,
    /// SPEED <rpm> - set the speed of every axis.
    Speed,
    /// A / B / C <steps> - single-axis relative move.
    Move(AxisId),
    /// AB <a> <b> - synchronized move on A and B.
    MoveAb,
    /// ABC <a> <b> <c> - synchronized move on all axes.
    MoveAbc,
    /// S / STOP - disable stepping and release coils.
    Stop,
    /// R / RESUME - re-enable stepping.
    Resume,
    /// RELEASE - release coils without changing the run flag.
    Release,
    /// DEMO [ON|OFF|1|0] - set or toggle the demo sweep.
    Demo,
    /// TARGET - aim macro on axis C.
    Target,
}

impl Verb {
    /// Look up a verb token, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        let t = token;
        if t.eq_ignore_ascii_case("HELP") || t.eq_ignore_ascii_case("H") || t == "?" {
            Some(Verb::Help)
        } else if t.eq_ignore_ascii_case("SPEED") {
            Some(Verb::Speed)
        } else if t.eq_ignore_ascii_case("A") {
            Some(Verb::Move(AxisId::A))
        } else if t.eq_ignore_ascii_case("B") {
            Some(Verb::Move(AxisId::B))
        } else if t.eq_ignore_ascii_case("C") {
            Some(Verb::Move(AxisId::C))
        } else if t.eq_ignore_ascii_case("AB") {
            Some(Verb::MoveAb)
        } else if t.eq_ignore_ascii_case("ABC") {
            Some(Verb::MoveAbc)
        } else if t.eq_ignore_ascii_case("S") || t.eq_ignore_ascii_case("STOP") {
            Some(Verb::Stop)
        } else if t.eq_ignore_ascii_case("R") || t.eq_ignore_ascii_case("RESUME") {
            Some(Verb::Resume)
        } else if t.eq_ignore_ascii_case("RELEASE") {
            Some(Verb::Release)
        } else if t.eq_ignore_ascii_case("DEMO") {
            Some(Verb::Demo)
        } else if t.eq_ignore_ascii_case("TARGET") {
            Some(Verb::Target)
        } else {
            None
        }
    }

    /// The canonical verb name used in reply lines.
    pub const fn name(self) -> &'static str {
        match self {
            Verb::Help => "HELP",
            Verb::Speed => "SPEED",
            Verb::Move(axis) => axis.as_str(),
            Verb::MoveAb => "AB",
            Verb::MoveAbc => "ABC",
            Verb::Stop => "STOP",
            Verb::Resume => "RESUME",
            Verb::Release => "RELEASE",
            Verb::Demo => "DEMO",
            Verb::Target => "TARGET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Verb::parse("speed"), Some(Verb::Speed));
        assert_eq!(Verb::parse("Speed"), Some(Verb::Speed));
        assert_eq!(Verb::parse("SPEED"), Some(Verb::Speed));
        assert_eq!(Verb::parse("abc"), Some(Verb::MoveAbc));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Verb::parse("h"), Some(Verb::Help));
        assert_eq!(Verb::parse("?"), Some(Verb::Help));
        assert_eq!(Verb::parse("s"), Some(Verb::Stop));
        assert_eq!(Verb::parse("stop"), Some(Verb::Stop));
        assert_eq!(Verb::parse("r"), Some(Verb::Resume));
        assert_eq!(Verb::parse("resume"), Some(Verb::Resume));
    }

    #[test]
    fn test_axis_verbs() {
        assert_eq!(Verb::parse("a"), Some(Verb::Move(AxisId::A)));
        assert_eq!(Verb::parse("B"), Some(Verb::Move(AxisId::B)));
        assert_eq!(Verb::parse("c"), Some(Verb::Move(AxisId::C)));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(Verb::parse("XYZ"), None);
        assert_eq!(Verb::parse("ABCD"), None);
        assert_eq!(Verb::parse(""), None);
    }

    #[test]
    fn test_reply_names() {
        assert_eq!(Verb::Stop.name(), "STOP");
        assert_eq!(Verb::Move(AxisId::B).name(), "B");
        assert_eq!(Verb::MoveAbc.name(), "ABC");
    }
}
