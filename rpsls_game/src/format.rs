use crate::choice::Choice;
use crate::interaction::{InteractionResult, Outcome};

/// Renders a resolved round as a sentence from the user's point of view.
///
/// The verb is taken from `outcome` as given, so the caller must pass the cell
/// for this exact (user, computer) ordering.
pub fn format_outcome(user: Choice, computer: Choice, outcome: &Outcome) -> String {
    match outcome.result {
        InteractionResult::Lose => format!(
            "Loss! Computer's {} {} your {}.",
            computer, outcome.verb, user
        ),
        InteractionResult::Tie => format!("Tie! You and the computer each chose '{}'.", user),
        InteractionResult::Win => format!(
            "Win! Your {} {} computer's {}.",
            user, outcome.verb, computer
        ),
    }
}

pub fn welcome_banner() -> String {
    let names: Vec<String> = Choice::ALL.iter().map(|c| c.capitalized()).collect();
    format!("Welcome to {}!", names.join(", "))
}
