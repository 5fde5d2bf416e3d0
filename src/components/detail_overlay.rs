//! Detail Overlay Component
//!
//! Centered overlay showing the selected card in modal view. Clicking the
//! translucent backdrop closes it.

use dioxus::prelude::*;

use super::{CardActions, CardDetail};
use crate::context::use_board;

/// Overlay for the board's current selection; renders nothing when no
/// card is selected.
#[component]
pub fn DetailOverlay(actions: CardActions) -> Element {
    let board = use_board();
    let Some(card) = board.read().selected_card().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "detail-overlay",
            onclick: move |_| actions.on_select.call(None),

            div {
                class: "detail-overlay__frame",
                onclick: move |e| e.stop_propagation(),

                CardDetail {
                    card: card,
                    is_flipped: true,
                    is_modal_view: true,
                    actions: actions,
                }
            }
        }
    }
}
