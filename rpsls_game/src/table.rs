use crate::choice::Choice;
use crate::interaction::Outcome;

/// Outcome of every (user, computer) pairing, indexed in `Choice::ALL` order.
///
/// Verbs belong to the winning choice of each pair and are written out per
/// cell rather than derived.
#[rustfmt::skip]
pub static DOMINANCE_TABLE: [[Outcome; 5]; 5] = [
    //             rock                          paper                         scissors                       lizard                          spock
    /* rock */     [Outcome::tie(),              Outcome::lose("covers"),      Outcome::win("smashes"),       Outcome::win("crushes"),        Outcome::lose("vaporizes")],
    /* paper */    [Outcome::win("covers"),      Outcome::tie(),               Outcome::lose("cut"),          Outcome::lose("eats"),          Outcome::win("disproves")],
    /* scissors */ [Outcome::lose("crushes"),    Outcome::win("cut"),          Outcome::tie(),                Outcome::win("decapitate"),     Outcome::lose("smashes")],
    /* lizard */   [Outcome::lose("crushes"),    Outcome::win("eats"),         Outcome::lose("decapitate"),   Outcome::tie(),                 Outcome::win("poisons")],
    /* spock */    [Outcome::win("vaporizes"),   Outcome::lose("disproves"),   Outcome::win("smashes"),       Outcome::lose("poisons"),       Outcome::tie()],
];

pub fn resolve(user: Choice, computer: Choice) -> Outcome {
    DOMINANCE_TABLE[user.index()][computer.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::InteractionResult;

    #[test]
    fn antisymmetric() {
        for a in Choice::ALL.iter() {
            for b in Choice::ALL.iter() {
                let forward = resolve(*a, *b);
                let backward = resolve(*b, *a);
                assert_eq!(forward.sign(), -backward.sign(), "{:?} vs {:?}", a, b);
                // Both directions describe the same action
                assert_eq!(forward.verb, backward.verb);
            }
        }
    }

    #[test]
    fn diagonal_is_tie() {
        for a in Choice::ALL.iter() {
            assert_eq!(resolve(*a, *a), Outcome::tie());
        }
    }

    #[test]
    fn each_choice_beats_two() {
        for a in Choice::ALL.iter() {
            let wins = Choice::ALL
                .iter()
                .filter(|b| resolve(*a, **b).result == InteractionResult::Win)
                .count();
            let losses = Choice::ALL
                .iter()
                .filter(|b| resolve(*a, **b).result == InteractionResult::Lose)
                .count();
            assert_eq!(wins, 2, "{:?}", a);
            assert_eq!(losses, 2, "{:?}", a);
        }
    }

    #[test]
    fn non_ties_carry_a_verb() {
        for a in Choice::ALL.iter() {
            for b in Choice::ALL.iter().filter(|b| *b != a) {
                assert!(!resolve(*a, *b).verb.is_empty());
            }
        }
    }

    #[test]
    #[rustfmt::skip]
    fn exact_cells() {
        use crate::choice::Choice::*;
        let cases = vec![
            (Rock, Scissors, Outcome::win("smashes")),
            (Rock, Lizard, Outcome::win("crushes")),
            (Paper, Rock, Outcome::win("covers")),
            (Paper, Spock, Outcome::win("disproves")),
            (Paper, Scissors, Outcome::lose("cut")),
            (Scissors, Paper, Outcome::win("cut")),
            (Scissors, Lizard, Outcome::win("decapitate")),
            (Lizard, Paper, Outcome::win("eats")),
            (Lizard, Spock, Outcome::win("poisons")),
            (Lizard, Rock, Outcome::lose("crushes")),
            (Spock, Scissors, Outcome::win("smashes")),
            (Spock, Rock, Outcome::win("vaporizes")),
        ];

        for (user, computer, expected) in cases {
            assert_eq!(resolve(user, computer), expected, "{:?} vs {:?}", user, computer);
        }
    }
}
