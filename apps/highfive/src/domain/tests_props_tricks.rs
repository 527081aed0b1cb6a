use proptest::prelude::*;

use crate::domain::scoring::trick_points;
use crate::domain::test_gens;
use crate::domain::Trick;

proptest! {
    /// The winner's card beats, or equals, every other card under the trick's
    /// trump and lead.
    #[test]
    fn winner_is_unbeaten((leader, trump, cards) in test_gens::complete_trick()) {
        let trick = Trick::from_cards(leader, &cards).unwrap();
        let lead = trick.lead_suit();
        let (_, best) = trick.winner(trump).unwrap();
        for (_, card) in trick.cards() {
            prop_assert!(!card.beats(best, trump, lead) || card == best);
        }
    }

    /// A trump card, when present, always takes the trick.
    #[test]
    fn trump_present_means_trump_wins((leader, trump, cards) in test_gens::complete_trick()) {
        let trick = Trick::from_cards(leader, &cards).unwrap();
        let (_, best) = trick.winner(trump).unwrap();
        if cards.iter().any(|c| c.is_suit(trump)) {
            prop_assert!(best.is_suit(trump));
        } else {
            prop_assert_eq!(best.suit, trick.lead_suit());
        }
    }

    /// Trick points are shared by the winning partnership and nobody else.
    #[test]
    fn points_stay_with_the_winning_team((leader, trump, cards) in test_gens::complete_trick()) {
        let trick = Trick::from_cards(leader, &cards).unwrap();
        let (winner, _) = trick.winner(trump).unwrap();
        let points = trick_points(std::slice::from_ref(&trick), trump);
        prop_assert_eq!(points[winner as usize], trick.points(trump));
        prop_assert_eq!(points[winner.partner() as usize], trick.points(trump));
        prop_assert_eq!(points[winner.next() as usize], 0);
        prop_assert_eq!(points[winner.prev() as usize], 0);
    }
}
