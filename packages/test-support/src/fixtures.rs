//! Stacked decks for scripted deals.

use highfive::domain::rules::{CARDS_PER_PACKET, DECK_SIZE, PACKETS_PER_HAND};
use highfive::domain::try_parse_cards;
use highfive::{Card, Deck, DomainError, Seat, ValidationKind};

/// Parse whitespace-separated card tokens (`"AS 5H jX"`).
pub fn tokens(s: &str) -> Result<Vec<Card>, DomainError> {
    try_parse_cards(s.split_whitespace())
}

/// A deck that deals `hands` (indexed by seat) when `dealer` deals, followed
/// by `tail` as the rest of the deck.
///
/// Packets go out three at a time starting left of `dealer`, so the deck is
/// laid out packet by packet in that order.
pub fn stacked_deck(dealer: Seat, hands: [&str; 4], tail: &str) -> Result<Deck, DomainError> {
    let hands = hands
        .iter()
        .map(|h| tokens(h))
        .collect::<Result<Vec<_>, _>>()?;
    let dealt = CARDS_PER_PACKET * PACKETS_PER_HAND;
    if let Some(short) = hands.iter().find(|h| h.len() != dealt) {
        return Err(DomainError::validation(
            ValidationKind::SelectionCount,
            format!("every hand needs {dealt} cards, got {}", short.len()),
        ));
    }

    let mut cards = Vec::with_capacity(DECK_SIZE);
    for packet in 0..PACKETS_PER_HAND {
        for seat in dealer.next().rotation() {
            let start = packet * CARDS_PER_PACKET;
            cards.extend_from_slice(&hands[seat.index()][start..start + CARDS_PER_PACKET]);
        }
    }
    cards.extend(tokens(tail)?);
    Ok(Deck::from_cards(cards))
}
