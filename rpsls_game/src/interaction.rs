#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InteractionResult {
    Win = 1,
    Tie = 0,
    Lose = -1,
}

impl InteractionResult {
    /// Signed result from the user's point of view.
    pub fn sign(&self) -> i8 {
        *self as i8
    }
}

/// A single cell of the dominance table.
///
/// `verb` describes what the winning choice does to the losing one and is
/// empty on a tie.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Outcome {
    pub result: InteractionResult,
    pub verb: &'static str,
}

impl Outcome {
    pub const fn win(verb: &'static str) -> Self {
        Self {
            result: InteractionResult::Win,
            verb,
        }
    }

    pub const fn lose(verb: &'static str) -> Self {
        Self {
            result: InteractionResult::Lose,
            verb,
        }
    }

    pub const fn tie() -> Self {
        Self {
            result: InteractionResult::Tie,
            verb: "",
        }
    }

    pub fn sign(&self) -> i8 {
        self.result.sign()
    }
}
