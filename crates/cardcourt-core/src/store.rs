//! Card Store - ordered in-memory deck
//!
//! Owns the list of committed cards and derives new card numbers.
//! Insertion order is display order; replacing a card keeps its slot.

use crate::card::{seed_cards, Card, CardFields, CardNumber};
use crate::error::{BoardError, BoardResult};

/// The ordered deck
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Empty deck
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck holding the fixture cards
    pub fn seeded() -> Self {
        Self::from_cards(seed_cards())
    }

    /// Build a deck from existing cards.
    ///
    /// Later cards whose number is already taken are dropped so the
    /// identity invariant holds from the start.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut store = Self::new();
        for card in cards {
            if store.contains(card.number) {
                tracing::warn!(number = card.number, "Dropping card with duplicate number");
                continue;
            }
            store.cards.push(card);
        }
        store
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, number: CardNumber) -> Option<&Card> {
        self.cards.iter().find(|card| card.number == number)
    }

    pub fn contains(&self, number: CardNumber) -> bool {
        self.get(number).is_some()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number the next added card will get: highest live number plus one,
    /// or 1 for an empty deck.
    ///
    /// `None` once the highest live number is `CardNumber::MAX`.
    pub fn next_number(&self) -> Option<CardNumber> {
        match self.cards.iter().map(|card| card.number).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append a new card with a fresh number
    pub fn insert(&mut self, fields: CardFields) -> BoardResult<Card> {
        let number = self.next_number().ok_or(BoardError::DeckFull)?;
        let card = fields.into_card(number);
        self.cards.push(card.clone());
        Ok(card)
    }

    /// Replace the card with `number` in place, keeping its identity.
    ///
    /// Returns `None` (and changes nothing) if no such card exists.
    pub fn replace(&mut self, number: CardNumber, fields: CardFields) -> Option<Card> {
        let slot = self.cards.iter_mut().find(|card| card.number == number)?;
        *slot = fields.into_card(number);
        Some(slot.clone())
    }

    /// Remove the card with `number`, preserving the order of the rest.
    ///
    /// Unknown numbers are a no-op.
    pub fn remove(&mut self, number: CardNumber) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.number == number)?;
        Some(self.cards.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> CardFields {
        CardFields {
            name: name.to_string(),
            kind: "Armador".to_string(),
            attack: 10,
            defense: 20,
            life: 30,
            description: "desc".to_string(),
            image: "https://example.com/a.png".to_string(),
        }
    }

    #[test]
    fn test_next_number_empty() {
        assert_eq!(CardStore::new().next_number(), Some(1));
    }

    #[test]
    fn test_next_number_exhausted() {
        let mut store = CardStore::from_cards(vec![fields("Tope").into_card(CardNumber::MAX)]);
        assert_eq!(store.next_number(), None);

        let before = store.clone();
        assert_eq!(store.insert(fields("Uno mas")), Err(BoardError::DeckFull));
        assert_eq!(store, before);
    }

    #[test]
    fn test_next_number_uses_max_not_len() {
        let mut store = CardStore::seeded();
        store.remove(1);
        store.remove(2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_number(), Some(4));
    }

    #[test]
    fn test_insert_appends() {
        let mut store = CardStore::seeded();
        let card = store.insert(fields("Asahi Azumane")).unwrap();
        assert_eq!(card.number, 4);
        assert_eq!(store.cards().last(), Some(&card));
    }

    #[test]
    fn test_replace_keeps_position_and_number() {
        let mut store = CardStore::seeded();
        let updated = store.replace(2, fields("X")).unwrap();
        assert_eq!(updated.number, 2);
        assert_eq!(store.cards()[1].name, "X");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replace_unknown_is_none() {
        let mut store = CardStore::seeded();
        let before = store.clone();
        assert!(store.replace(9, fields("X")).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = CardStore::seeded();
        assert!(store.remove(42).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_removed_number_not_reused_while_higher_exists() {
        let mut store = CardStore::seeded();
        store.remove(2);
        let card = store.insert(fields("Daichi Sawamura")).unwrap();
        assert_eq!(card.number, 4);
    }

    #[test]
    fn test_from_cards_drops_duplicates() {
        let mut cards = seed_cards();
        let mut dup = cards[0].clone();
        dup.name = "Impostor".to_string();
        cards.push(dup);

        let store = CardStore::from_cards(cards);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(1).map(|c| c.name.as_str()), Some("Shōyō Hinata"));
    }
}
