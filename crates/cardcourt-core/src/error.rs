//! Error types for Card Court

use thiserror::Error;

use crate::card::CardNumber;
use crate::draft::DraftField;

/// A draft that cannot be committed.
///
/// The display text is what the editor shows in its error banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty (or a stat has no number)
    #[error("Por favor, rellene todos los campos.")]
    MissingFields(Vec<DraftField>),

    /// The image field does not parse as an absolute URL
    #[error("El campo 'URL Imagen' debe ser un URL válido.")]
    InvalidImageUrl(String),
}

/// Main error type for board operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The open draft failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Submit was requested with no editor open
    #[error("No editor is open")]
    EditorClosed,

    /// The card being edited is no longer in the deck
    #[error("Card not found: #{0}")]
    CardNotFound(CardNumber),

    /// The highest card number is taken, so no new card can be numbered
    #[error("No card numbers left")]
    DeckFull,
}

/// Result type alias using BoardError
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::MissingFields(vec![DraftField::Name]);
        assert_eq!(format!("{}", err), "Por favor, rellene todos los campos.");

        let err = ValidationError::InvalidImageUrl("not a url".to_string());
        assert_eq!(
            format!("{}", err),
            "El campo 'URL Imagen' debe ser un URL válido."
        );
    }

    #[test]
    fn test_board_error_from_validation() {
        let err: BoardError = ValidationError::InvalidImageUrl("x".to_string()).into();
        assert!(matches!(err, BoardError::Validation(_)));
        assert_eq!(
            format!("{}", err),
            "El campo 'URL Imagen' debe ser un URL válido."
        );
    }

    #[test]
    fn test_card_not_found_display() {
        assert_eq!(format!("{}", BoardError::CardNotFound(7)), "Card not found: #7");
        assert_eq!(format!("{}", BoardError::DeckFull), "No card numbers left");
    }
}
