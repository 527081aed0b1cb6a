use tracing::debug;

use super::Request;
use crate::domain::rules::MAX_HAND_SIZE;
use crate::domain::{Hand, State};
use crate::errors::domain::DomainError;

/// Bring every non-winner to exactly six trump-first cards, then hand the
/// rest of the deck to the bid winner.
///
/// A seat short of six is topped up from the deck. If the deck runs dry the
/// seat keeps what it has and plays short; the play phase copes with uneven
/// hands. A seat holding more than six trump sheds eligible cards one at a
/// time.
pub(super) fn redeal(state: &State) -> Result<(State, Request), DomainError> {
    let (winner, _) = state.require_winning_bid("redeal")?;
    let trump = state.require_trump("redeal")?;
    let mut next = state.clone();

    for seat in next.dealer.next().rotation().filter(|s| *s != winner) {
        let hand = next.hands[seat as usize]
            .take()
            .ok_or_else(|| DomainError::invariant(format!("redeal: {seat} holds no hand")))?;
        let (trump_cards, others): (Vec<_>, Vec<_>) =
            hand.into_cards().into_iter().partition(|c| c.is_suit(trump));
        next.discarded.extend(others);
        let mut kept = Hand::from(trump_cards);

        if kept.len() < MAX_HAND_SIZE {
            let wanted = MAX_HAND_SIZE - kept.len();
            let available = wanted.min(next.deck.len());
            if available < wanted {
                debug!(%seat, wanted, available, "Deck ran short during redeal");
            }
            kept.add(next.deck.deal(available)?);
        }

        while kept.len() > MAX_HAND_SIZE {
            let Some(&position) = kept.discards(trump).first() else {
                return Err(DomainError::invariant(format!(
                    "redeal: {seat} cannot shed {} more cards",
                    kept.len() - MAX_HAND_SIZE
                )));
            };
            let card = kept.remove(position)?;
            next.discarded.push(card);
        }

        next.hands[seat as usize] = Some(kept);
    }

    let rest = next.deck.deal_rest();
    next.require_hand_mut(winner, "redeal")?.add(rest);
    for hand in next.hands.iter_mut().flatten() {
        hand.sort();
    }

    let hand = next.require_hand(winner, "redeal")?;
    let expect = hand.len().saturating_sub(MAX_HAND_SIZE);
    let options = hand.discards(trump);
    if options.len() < expect {
        return Err(DomainError::invariant(format!(
            "redeal: {winner} must shed {expect} cards but only {} are eligible",
            options.len()
        )));
    }

    debug!(%winner, expect, "Transition: ReDeal -> Discard");
    Ok((
        next,
        Request::Discard {
            seat: winner,
            options,
            expect,
        },
    ))
}
