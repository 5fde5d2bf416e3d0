//! Card Court Core Library
//!
//! In-memory card deck with draft validation and board state.
//!
//! ## Overview
//!
//! Card Court shows a themed set of volleyball "cards" and lets the user
//! view, add, edit and delete them. Nothing is persisted: the deck lives
//! for as long as the window is open.
//!
//! - [`CardStore`] owns the ordered list of cards and assigns numbers.
//! - [`CardDraft`] is the in-progress form, with last-valid-wins
//!   coercion for the numeric stats.
//! - [`BoardState`] is the single owner of everything the UI shows:
//!   the store, the selected card and the open editor.
//!
//! ## Quick Start
//!
//! ```
//! use cardcourt_core::{BoardState, DraftField};
//!
//! let mut board = BoardState::seeded();
//!
//! board.open_editor(None);
//! board.update_field(DraftField::Name, "Kei Tsukishima");
//! board.update_field(DraftField::Kind, "Bloqueador");
//! board.update_field(DraftField::Attack, "150");
//! board.update_field(DraftField::Defense, "300");
//! board.update_field(DraftField::Life, "100");
//! board.update_field(DraftField::Description, "Central de Karasuno.");
//! board.update_field(DraftField::Image, "https://example.com/kei.png");
//!
//! let card = board.submit().unwrap();
//! assert_eq!(card.number, 4);
//! assert!(board.editor().is_none());
//! ```

pub mod board;
pub mod card;
pub mod draft;
pub mod error;
pub mod store;

// Re-exports
pub use board::{BoardState, Editor, EditorMode};
pub use card::{seed_cards, Card, CardFields, CardNumber};
pub use draft::{is_valid_url, CardDraft, DraftField, StatInput};
pub use error::{BoardError, BoardResult, ValidationError};
pub use store::CardStore;
