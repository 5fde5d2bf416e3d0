//! Card Grid Component
//!
//! Lays out every card in the deck as a tile. Tiles flow right to left.

use cardcourt_core::Card;
use dioxus::prelude::*;

use super::{CardActions, CardDetail};

/// Grid of card tiles
#[component]
pub fn CardGrid(
    /// Cards in deck order
    cards: Vec<Card>,
    /// Intents forwarded from every tile
    actions: CardActions,
) -> Element {
    if cards.is_empty() {
        return rsx! {
            p { class: "card-grid__empty", "No hay cartas en la cancha." }
        };
    }

    rsx! {
        div { class: "card-grid",
            for card in cards {
                CardDetail {
                    key: "{card.number}",
                    card: card.clone(),
                    actions: actions,
                }
            }
        }
    }
}
