use cardcourt_core::CardNumber;
use cardcourt_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::components::{CardActions, CardForm, CardGrid, DetailOverlay};
use crate::context::initial_board;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the board, provides it by context, and wires card intents to
/// board operations.
#[component]
pub fn App() -> Element {
    let mut board = use_signal(initial_board);
    use_context_provider(|| board);

    // Same three intents for grid tiles and the detail overlay
    let actions = CardActions {
        on_select: use_callback(move |number: Option<CardNumber>| {
            board.write().select(number);
        }),
        on_edit: use_callback(move |number: CardNumber| {
            board.write().begin_edit(number);
        }),
        on_delete: use_callback(move |number: CardNumber| {
            board.write().remove(number);
        }),
    };

    let cards = board.read().cards().to_vec();

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "court",
            header { class: "court-header",
                h1 { class: "page-title", "¡El Vuelo de Haikyuu: Cartas de la Cancha!" }
                hr { class: "court-header__rule" }
            }

            CardGrid { cards: cards, actions: actions }

            div { class: "court-actions",
                Button {
                    variant: ButtonVariant::Pill,
                    onclick: move |_| board.write().open_editor(None),
                    "Agregar Nueva Carta"
                }
            }

            CardForm {}
            DetailOverlay { actions: actions }
        }
    }
}
