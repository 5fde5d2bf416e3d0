//! Board State - single owner of the deck and all transient UI state
//!
//! The UI never mutates cards directly. Every user intent goes through
//! one of the operations here, so selection, editor and deck can't drift
//! out of sync.
//!
//! ## Views
//!
//! At most one card is selected (shown in the detail overlay) and at most
//! one editor is open. The editor is either adding a new card or editing
//! an existing one by number.
//!
//! ## Example
//!
//! ```
//! use cardcourt_core::{BoardState, DraftField};
//!
//! let mut board = BoardState::seeded();
//!
//! board.select(Some(1));
//! board.begin_edit(1);
//! assert!(board.selected_card().is_none());
//!
//! board.update_field(DraftField::Name, "X");
//! let card = board.submit().unwrap();
//! assert_eq!((card.number, card.name.as_str()), (1, "X"));
//! assert_eq!(board.cards()[0].name, "X");
//! ```

use crate::card::{Card, CardNumber};
use crate::draft::{CardDraft, DraftField};
use crate::error::{BoardError, BoardResult, ValidationError};
use crate::store::CardStore;

/// What the open editor will do on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Append a new card
    Add,
    /// Replace the card with this number
    Edit(CardNumber),
}

/// The add/edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub mode: EditorMode,
    pub draft: CardDraft,
    /// Last failed submit, cleared on the next field change
    pub error: Option<ValidationError>,
}

impl Editor {
    fn new(mode: EditorMode, draft: CardDraft) -> Self {
        Self {
            mode,
            draft,
            error: None,
        }
    }

    /// Form heading
    pub fn title(&self) -> String {
        match self.mode {
            EditorMode::Add => "Agregar Nueva Carta".to_string(),
            EditorMode::Edit(number) => format!("Editar Carta #{}", number),
        }
    }

    /// Submit button text
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Add => "Agregar Carta",
            EditorMode::Edit(_) => "Guardar Cambios",
        }
    }
}

/// Deck plus selection plus editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    store: CardStore,
    selected: Option<CardNumber>,
    editor: Option<Editor>,
}

impl BoardState {
    pub fn new(store: CardStore) -> Self {
        Self {
            store,
            selected: None,
            editor: None,
        }
    }

    /// Board over the fixture deck
    pub fn seeded() -> Self {
        Self::new(CardStore::seeded())
    }

    /// Board over an empty deck
    pub fn blank() -> Self {
        Self::new(CardStore::new())
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn cards(&self) -> &[Card] {
        self.store.cards()
    }

    /// The card shown in the detail overlay, if any
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.and_then(|number| self.store.get(number))
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    /// Show a card in the detail overlay, or close it with `None`.
    ///
    /// Selecting a number that is not in the deck clears the selection.
    pub fn select(&mut self, number: Option<CardNumber>) {
        self.selected = match number {
            Some(n) if self.store.contains(n) => Some(n),
            Some(n) => {
                tracing::warn!(number = n, "Ignoring selection of unknown card");
                None
            }
            None => None,
        };
        tracing::debug!(selected = ?self.selected, "Selection changed");
    }

    /// Open the form. `Some(number)` edits that card with a pre-filled
    /// draft; `None` (or an unknown number) starts a blank add.
    pub fn open_editor(&mut self, number: Option<CardNumber>) {
        let editor = match number.and_then(|n| self.store.get(n)) {
            Some(card) => Editor::new(EditorMode::Edit(card.number), CardDraft::from_card(card)),
            None => {
                if let Some(n) = number {
                    tracing::warn!(number = n, "Edit requested for unknown card, opening blank form");
                }
                Editor::new(EditorMode::Add, CardDraft::blank())
            }
        };
        tracing::debug!(mode = ?editor.mode, "Editor opened");
        self.editor = Some(editor);
    }

    /// The detail view's Edit intent: open the editor on the card and
    /// close the overlay.
    pub fn begin_edit(&mut self, number: CardNumber) {
        self.open_editor(Some(number));
        self.select(None);
    }

    /// Cancel the form, discarding the draft
    pub fn close_editor(&mut self) {
        if self.editor.take().is_some() {
            tracing::debug!("Editor closed");
        }
    }

    /// Apply one keystroke to the open draft and clear any error.
    ///
    /// No-op when no editor is open.
    pub fn update_field(&mut self, field: DraftField, raw: &str) {
        if let Some(editor) = self.editor.as_mut() {
            editor.draft.set_field(field, raw);
            editor.error = None;
        }
    }

    /// Validate and commit the open draft.
    ///
    /// On success the card is appended (add mode) or replaced in place
    /// (edit mode) and the editor closes. On a validation failure the
    /// error is stored on the editor, the draft is kept, and the deck is
    /// untouched. Any other failure also leaves the deck and editor as
    /// they were.
    pub fn submit(&mut self) -> BoardResult<Card> {
        let editor = self.editor.as_mut().ok_or(BoardError::EditorClosed)?;

        let fields = match editor.draft.validate() {
            Ok(fields) => fields,
            Err(err) => {
                tracing::debug!(error = %err, "Draft rejected");
                editor.error = Some(err.clone());
                return Err(err.into());
            }
        };

        let mode = editor.mode;
        let card = match mode {
            EditorMode::Add => {
                let card = match self.store.insert(fields) {
                    Ok(card) => card,
                    Err(err) => {
                        tracing::warn!(error = %err, "Card add rejected");
                        return Err(err);
                    }
                };
                tracing::info!(number = card.number, name = %card.name, "Card added");
                card
            }
            EditorMode::Edit(number) => match self.store.replace(number, fields) {
                Some(card) => {
                    tracing::info!(number, name = %card.name, "Card updated");
                    card
                }
                None => {
                    tracing::warn!(number, "Edit target vanished before submit");
                    return Err(BoardError::CardNotFound(number));
                }
            },
        };

        self.editor = None;
        Ok(card)
    }

    /// Delete a card. Unknown numbers are ignored; deleting the selected
    /// card clears the selection.
    pub fn remove(&mut self, number: CardNumber) {
        match self.store.remove(number) {
            Some(card) => {
                tracing::info!(number, name = %card.name, "Card deleted");
                if self.selected == Some(number) {
                    self.selected = None;
                }
            }
            None => tracing::debug!(number, "Delete of unknown card ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut BoardState) {
        board.update_field(DraftField::Name, "Kei Tsukishima");
        board.update_field(DraftField::Kind, "Bloqueador");
        board.update_field(DraftField::Attack, "150");
        board.update_field(DraftField::Defense, "300");
        board.update_field(DraftField::Life, "100");
        board.update_field(DraftField::Description, "Central.");
        board.update_field(DraftField::Image, "https://example.com/kei.png");
    }

    #[test]
    fn test_add_appends_and_closes() {
        let mut board = BoardState::seeded();
        board.open_editor(None);
        fill(&mut board);

        let card = board.submit().unwrap();
        assert_eq!(card.number, 4);
        assert_eq!(board.cards().last(), Some(&card));
        assert!(board.editor().is_none());
    }

    #[test]
    fn test_add_to_blank_board_starts_at_one() {
        let mut board = BoardState::blank();
        board.open_editor(None);
        fill(&mut board);
        assert_eq!(board.submit().unwrap().number, 1);
    }

    #[test]
    fn test_add_with_numbers_exhausted_is_rejected() {
        let mut top = crate::card::seed_cards().remove(0);
        top.number = CardNumber::MAX;
        let mut board = BoardState::new(CardStore::from_cards(vec![top]));
        board.open_editor(None);
        fill(&mut board);

        assert_eq!(board.submit(), Err(BoardError::DeckFull));
        assert_eq!(board.cards().len(), 1);
        assert_eq!(board.editor().map(|e| e.mode), Some(EditorMode::Add));
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut board = BoardState::seeded();
        board.open_editor(None);
        board.update_field(DraftField::Name, "Solo nombre");

        let err = board.submit().unwrap_err();
        assert!(matches!(
            err,
            BoardError::Validation(ValidationError::MissingFields(_))
        ));

        let editor = board.editor().unwrap();
        assert_eq!(editor.draft.name, "Solo nombre");
        assert!(editor.error.is_some());
        assert_eq!(board.cards().len(), 3);
    }

    #[test]
    fn test_field_change_clears_error() {
        let mut board = BoardState::seeded();
        board.open_editor(None);
        let _ = board.submit();
        assert!(board.editor().unwrap().error.is_some());

        board.update_field(DraftField::Kind, "L");
        assert!(board.editor().unwrap().error.is_none());
    }

    #[test]
    fn test_reopen_clears_error() {
        let mut board = BoardState::seeded();
        board.open_editor(None);
        let _ = board.submit();
        board.open_editor(None);
        assert!(board.editor().unwrap().error.is_none());
    }

    #[test]
    fn test_submit_without_editor() {
        let mut board = BoardState::seeded();
        assert_eq!(board.submit(), Err(BoardError::EditorClosed));
    }

    #[test]
    fn test_open_editor_prefills() {
        let mut board = BoardState::seeded();
        board.open_editor(Some(3));
        let editor = board.editor().unwrap();
        assert_eq!(editor.mode, EditorMode::Edit(3));
        assert_eq!(editor.draft.name, "Tobio Kageyama");
        assert_eq!(editor.title(), "Editar Carta #3");
        assert_eq!(editor.submit_label(), "Guardar Cambios");
    }

    #[test]
    fn test_open_editor_unknown_number_is_add() {
        let mut board = BoardState::seeded();
        board.open_editor(Some(99));
        let editor = board.editor().unwrap();
        assert_eq!(editor.mode, EditorMode::Add);
        assert_eq!(editor.draft, CardDraft::blank());
        assert_eq!(editor.title(), "Agregar Nueva Carta");
    }

    #[test]
    fn test_edit_target_removed_before_submit() {
        let mut board = BoardState::seeded();
        board.open_editor(Some(2));
        board.remove(2);

        assert_eq!(board.submit(), Err(BoardError::CardNotFound(2)));
        assert!(board.editor().is_some());
        assert_eq!(board.cards().len(), 2);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut board = BoardState::seeded();
        board.select(Some(2));
        board.remove(2);
        assert!(board.selected_card().is_none());
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let mut board = BoardState::seeded();
        board.select(Some(1));
        board.remove(3);
        assert_eq!(board.selected_card().map(|c| c.number), Some(1));
    }

    #[test]
    fn test_select_unknown_clears() {
        let mut board = BoardState::seeded();
        board.select(Some(1));
        board.select(Some(77));
        assert!(board.selected_card().is_none());
    }

    #[test]
    fn test_update_without_editor_is_noop() {
        let mut board = BoardState::seeded();
        board.update_field(DraftField::Name, "x");
        assert!(board.editor().is_none());
    }
}
