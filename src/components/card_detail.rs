//! Card Detail - presentation of a single card
//!
//! Pure renderer: the card and its render mode come in as props, user
//! intents go out through [`CardActions`]. Nothing here touches the board.

use cardcourt_core::{Card, CardNumber};
use cardcourt_ui::{Button, ButtonVariant, CloseButton, FallbackImage};
use dioxus::prelude::*;

use crate::theme::colors;

/// The three intents a card forwards to its container
#[derive(Clone, Copy, PartialEq)]
pub struct CardActions {
    /// Open the detail overlay on a card, or close it with `None`
    pub on_select: EventHandler<Option<CardNumber>>,
    /// Open the editor on a card
    pub on_edit: EventHandler<CardNumber>,
    /// Delete a card
    pub on_delete: EventHandler<CardNumber>,
}

/// Mutually exclusive ways of drawing a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView {
    /// Image and name only; clicking selects the card
    Tile,
    /// Full stat block inline; the body is inert
    Flipped,
    /// Full stat block in the overlay, with a close control
    Modal,
}

impl CardView {
    /// Map the container's two flags onto a render mode.
    ///
    /// `is_modal_view` wins over `is_flipped`.
    pub fn from_flags(is_flipped: bool, is_modal_view: bool) -> Self {
        match (is_flipped, is_modal_view) {
            (_, true) => CardView::Modal,
            (true, false) => CardView::Flipped,
            (false, false) => CardView::Tile,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            CardView::Tile => "card-face card-face--tile interactive",
            CardView::Flipped => "card-face card-face--flipped",
            CardView::Modal => "card-face card-face--modal",
        }
    }
}

/// One card in one of its three render modes
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardDetail {
///         card: card.clone(),
///         is_flipped: true,
///         is_modal_view: true,
///         actions: actions,
///     }
/// }
/// ```
#[component]
pub fn CardDetail(
    card: Card,
    #[props(default = false)] is_flipped: bool,
    #[props(default = false)] is_modal_view: bool,
    actions: CardActions,
) -> Element {
    let view = CardView::from_flags(is_flipped, is_modal_view);
    let number = card.number;

    if view == CardView::Tile {
        return rsx! {
            div {
                class: view.class(),
                onclick: move |_| actions.on_select.call(Some(number)),

                div { class: "card-face__tile-body",
                    FallbackImage {
                        src: card.image.clone(),
                        alt: card.name.clone(),
                        class: "card-face__img card-face__img--tile".to_string(),
                    }
                    p { class: "card-face__name", "{card.name}" }
                }
            }
        };
    }

    let img_class = if view == CardView::Modal {
        "card-face__img card-face__img--modal"
    } else {
        "card-face__img card-face__img--flipped"
    };

    rsx! {
        div {
            class: view.class(),

            if view == CardView::Modal {
                CloseButton {
                    class: "close-btn--light".to_string(),
                    onclick: move |_| actions.on_select.call(None),
                }
            }

            h3 { class: "card-face__title",
                "{card.name} "
                span { class: "card-face__number", "— #{number}" }
            }

            FallbackImage {
                src: card.image.clone(),
                alt: card.name.clone(),
                class: img_class.to_string(),
            }

            div { class: "card-face__stats",
                StatLine { label: "Tipo", value: card.kind.clone() }
                StatLine { label: "Ataque", value: card.attack.to_string(), color: colors::ATTACK }
                StatLine { label: "Defensa", value: card.defense.to_string(), color: colors::DEFENSE }
                StatLine { label: "Vida", value: card.life.to_string(), color: colors::DEFENSE }
            }

            p { class: "card-face__description",
                span { class: "card-face__description-label", "Descripción:" }
                " {card.description}"
            }

            div { class: "card-face__actions",
                Button {
                    variant: ButtonVariant::Primary,
                    stop_propagation: true,
                    onclick: move |_| actions.on_edit.call(number),
                    "Editar"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    stop_propagation: true,
                    onclick: move |_| actions.on_delete.call(number),
                    "Borrar"
                }
            }
        }
    }
}

/// Labelled stat row
#[component]
fn StatLine(
    label: &'static str,
    value: String,
    #[props(default = colors::COFFEE)] color: &'static str,
) -> Element {
    rsx! {
        p { class: "card-face__stat",
            span {
                class: "card-face__stat-label",
                style: "color: {color};",
                "{label}:"
            }
            " {value}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_from_flags() {
        assert_eq!(CardView::from_flags(false, false), CardView::Tile);
        assert_eq!(CardView::from_flags(true, false), CardView::Flipped);
        assert_eq!(CardView::from_flags(true, true), CardView::Modal);
        assert_eq!(CardView::from_flags(false, true), CardView::Modal);
    }

    #[test]
    fn only_tiles_are_interactive() {
        assert!(CardView::Tile.class().contains("interactive"));
        assert!(!CardView::Flipped.class().contains("interactive"));
        assert!(!CardView::Modal.class().contains("interactive"));
    }
}
