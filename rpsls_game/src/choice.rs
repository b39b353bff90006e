use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Choice {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

/// Result of reading one line of user input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Normalized {
    Valid(Choice),
    Invalid,
    Quit,
}

lazy_static! {
    // One named group per choice, keyed by `Choice::name`
    static ref CHOICE_GRAMMAR: Regex = Regex::new(concat!(
        r"^(?:(?P<quit>q(?:uit)?)",
        r"|(?P<rock>r(?:ock)?)",
        r"|(?P<paper>p(?:aper)?)",
        r"|(?P<scissors>s(?:cissors)?)",
        r"|(?P<lizard>l(?:izard)?)",
        r"|(?P<spock>(?:spoc)?k))$"
    ))
    .unwrap();
}

impl Choice {
    /// Canonical ordering, also the row/column order of the dominance table.
    pub const ALL: [Choice; 5] = [
        Choice::Rock,
        Choice::Paper,
        Choice::Scissors,
        Choice::Lizard,
        Choice::Spock,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Lizard => "lizard",
            Choice::Spock => "spock",
        }
    }

    pub fn capitalized(&self) -> String {
        let mut chars = self.name().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.capitalized())
    }
}

/// Maps a raw line of input to a choice, a quit request, or nothing.
///
/// Matching is case-sensitive and anchored: only a full name or its one-letter
/// abbreviation is accepted (`k` for spock). A trailing line terminator is
/// ignored, any other surrounding text is not.
pub fn normalize(raw: &str) -> Normalized {
    let raw = raw.trim_end_matches(|c| c == '\n' || c == '\r');
    let caps = match CHOICE_GRAMMAR.captures(raw) {
        Some(caps) => caps,
        None => return Normalized::Invalid,
    };

    if caps.name("quit").is_some() {
        return Normalized::Quit;
    }

    Choice::ALL
        .iter()
        .find(|choice| caps.name(choice.name()).is_some())
        .map(|choice| Normalized::Valid(*choice))
        .unwrap_or(Normalized::Invalid)
}
