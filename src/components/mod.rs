//! UI Components for Card Court.
//!
//! `CardDetail` is a pure renderer; the overlay and form read the board
//! from context.

mod card_detail;
mod card_form;
mod card_grid;
mod detail_overlay;

pub use card_detail::{CardActions, CardDetail, CardView};
pub use card_form::CardForm;
pub use card_grid::CardGrid;
pub use detail_overlay::DetailOverlay;
