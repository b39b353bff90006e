use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use rpsls_game::Choice;

/// Supplies the computer's choice for each round.
pub trait ChoiceSource {
    fn draw(&mut self) -> Choice;
}

/// Uniform draw backed by the operating system's CSPRNG, so earlier rounds
/// reveal nothing about later ones.
pub struct SecureDraw;

impl ChoiceSource for SecureDraw {
    fn draw(&mut self) -> Choice {
        // ALL is never empty
        *Choice::ALL.choose(&mut OsRng).unwrap_or(&Choice::Rock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draws_every_choice() {
        let mut source = SecureDraw;
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(source.draw());
        }
        assert_eq!(seen.len(), Choice::ALL.len());
    }
}
