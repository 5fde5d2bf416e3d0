//! Board context provider for Card Court.
//!
//! The root component owns the one `BoardState`; containers reach it
//! through these hooks instead of threading it through props.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let board = use_signal(initial_board);
//! use_context_provider(|| board);
//!
//! // In child components
//! let mut board = use_board();
//! board.write().close_editor();
//! ```

use cardcourt_core::BoardState;
use dioxus::prelude::*;

/// Board the window starts with, honouring `--blank`.
pub fn initial_board() -> BoardState {
    if crate::start_blank() {
        BoardState::blank()
    } else {
        BoardState::seeded()
    }
}

/// Hook to access the board from context.
///
/// Returns the signal holding the shared board state. Reading it
/// subscribes the calling component to every board change.
pub fn use_board() -> Signal<BoardState> {
    use_context::<Signal<BoardState>>()
}
