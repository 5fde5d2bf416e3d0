//! Card Draft - the editor's in-progress copy of a card
//!
//! Text fields hold whatever the user typed. Numeric stats go through
//! [`StatInput::apply`], which keeps the last valid number when a
//! keystroke does not parse, so a touched stat never holds garbage.

use url::Url;

use crate::card::{Card, CardFields};
use crate::error::ValidationError;

/// Editable fields of a card, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Kind,
    Attack,
    Defense,
    Life,
    Image,
    Description,
}

impl DraftField {
    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::Name,
            DraftField::Kind,
            DraftField::Attack,
            DraftField::Defense,
            DraftField::Life,
            DraftField::Image,
            DraftField::Description,
        ]
    }

    /// Stats are entered through number inputs and coerced to integers
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DraftField::Attack | DraftField::Defense | DraftField::Life
        )
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Nombre",
            DraftField::Kind => "Tipo",
            DraftField::Attack => "Ataque",
            DraftField::Defense => "Defensa",
            DraftField::Life => "Vida",
            DraftField::Image => "URL Imagen (Obligatorio URL)",
            DraftField::Description => "Descripción",
        }
    }

    /// DOM id of the field's input, also used for label association
    pub fn input_id(&self) -> &'static str {
        match self {
            DraftField::Name => "nombre",
            DraftField::Kind => "tipo",
            DraftField::Attack => "ataque",
            DraftField::Defense => "defensa",
            DraftField::Life => "vida",
            DraftField::Image => "imagen",
            DraftField::Description => "descripcion",
        }
    }
}

/// A numeric stat as typed into the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatInput {
    /// Never filled, or cleared by the user
    #[default]
    Empty,
    Value(i64),
}

impl StatInput {
    /// Fold one input event into the stat.
    ///
    /// An empty string clears it, a leading integer replaces it, and
    /// anything else leaves the previous value in place.
    pub fn apply(&mut self, raw: &str) {
        if raw.is_empty() {
            *self = StatInput::Empty;
        } else if let Some(n) = parse_leading_int(raw) {
            *self = StatInput::Value(n);
        }
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            StatInput::Empty => None,
            StatInput::Value(n) => Some(*n),
        }
    }

    /// Text to put back into the input element
    pub fn display(&self) -> String {
        match self {
            StatInput::Empty => String::new(),
            StatInput::Value(n) => n.to_string(),
        }
    }
}

impl From<i64> for StatInput {
    fn from(n: i64) -> Self {
        StatInput::Value(n)
    }
}

/// Parse the integer prefix of `raw`: optional whitespace, optional sign,
/// then decimal digits. Trailing characters are ignored ("12px" is 12,
/// "3.7" is 3). Returns `None` when there are no digits or on overflow.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    format!("{}{}", sign, &rest[..digits]).parse().ok()
}

/// True when `candidate` parses as an absolute URL
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

/// Transient, possibly incomplete card being composed in the editor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDraft {
    pub name: String,
    pub kind: String,
    pub attack: StatInput,
    pub defense: StatInput,
    pub life: StatInput,
    pub description: String,
    pub image: String,
}

impl CardDraft {
    /// Empty draft for add mode
    pub fn blank() -> Self {
        Self::default()
    }

    /// Pre-filled draft for edit mode
    pub fn from_card(card: &Card) -> Self {
        Self {
            name: card.name.clone(),
            kind: card.kind.clone(),
            attack: card.attack.into(),
            defense: card.defense.into(),
            life: card.life.into(),
            description: card.description.clone(),
            image: card.image.clone(),
        }
    }

    /// Apply one input event to the matching field
    pub fn set_field(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Name => self.name = raw.to_string(),
            DraftField::Kind => self.kind = raw.to_string(),
            DraftField::Attack => self.attack.apply(raw),
            DraftField::Defense => self.defense.apply(raw),
            DraftField::Life => self.life.apply(raw),
            DraftField::Image => self.image = raw.to_string(),
            DraftField::Description => self.description = raw.to_string(),
        }
    }

    /// Current value of a field as the form should render it
    pub fn display_value(&self, field: DraftField) -> String {
        match field {
            DraftField::Name => self.name.clone(),
            DraftField::Kind => self.kind.clone(),
            DraftField::Attack => self.attack.display(),
            DraftField::Defense => self.defense.display(),
            DraftField::Life => self.life.display(),
            DraftField::Image => self.image.clone(),
            DraftField::Description => self.description.clone(),
        }
    }

    fn is_filled(&self, field: DraftField) -> bool {
        match field {
            DraftField::Name => !self.name.is_empty(),
            DraftField::Kind => !self.kind.is_empty(),
            DraftField::Attack => self.attack.value().is_some(),
            DraftField::Defense => self.defense.value().is_some(),
            DraftField::Life => self.life.value().is_some(),
            DraftField::Image => !self.image.is_empty(),
            DraftField::Description => !self.description.is_empty(),
        }
    }

    /// Check the draft and produce committable fields.
    ///
    /// Missing fields are reported before a malformed image URL.
    pub fn validate(&self) -> Result<CardFields, ValidationError> {
        let missing: Vec<DraftField> = DraftField::all()
            .iter()
            .copied()
            .filter(|field| !self.is_filled(*field))
            .collect();
        match (self.attack.value(), self.defense.value(), self.life.value()) {
            (Some(attack), Some(defense), Some(life)) if missing.is_empty() => {
                if !is_valid_url(&self.image) {
                    return Err(ValidationError::InvalidImageUrl(self.image.clone()));
                }
                Ok(CardFields {
                    name: self.name.clone(),
                    kind: self.kind.clone(),
                    attack,
                    defense,
                    life,
                    description: self.description.clone(),
                    image: self.image.clone(),
                })
            }
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }

    /// Image URL for the live preview, if it is already a valid URL
    pub fn preview_image(&self) -> Option<&str> {
        if !self.image.is_empty() && is_valid_url(&self.image) {
            Some(&self.image)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::seed_cards;

    fn filled_draft() -> CardDraft {
        CardDraft {
            name: "Kei Tsukishima".to_string(),
            kind: "Bloqueador".to_string(),
            attack: StatInput::Value(150),
            defense: StatInput::Value(300),
            life: StatInput::Value(100),
            description: "Central de Karasuno.".to_string(),
            image: "https://example.com/x.png".to_string(),
        }
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  -7"), Some(-7));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("12px"), Some(12));
        assert_eq!(parse_leading_int("3.7"), Some(3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_stat_keeps_last_valid_value() {
        let mut stat = StatInput::Empty;
        stat.apply("12");
        assert_eq!(stat, StatInput::Value(12));

        stat.apply("e");
        assert_eq!(stat, StatInput::Value(12));

        stat.apply("");
        assert_eq!(stat, StatInput::Empty);

        stat.apply("x");
        assert_eq!(stat, StatInput::Empty);
    }

    #[test]
    fn test_stat_accepts_zero() {
        let mut stat = StatInput::Value(9);
        stat.apply("0");
        assert_eq!(stat, StatInput::Value(0));
    }

    #[test]
    fn test_valid_draft_passes() {
        let fields = filled_draft().validate().unwrap();
        assert_eq!(fields.name, "Kei Tsukishima");
        assert_eq!(fields.attack, 150);
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let mut draft = filled_draft();
        draft.name.clear();
        draft.life = StatInput::Empty;

        match draft.validate() {
            Err(ValidationError::MissingFields(missing)) => {
                assert_eq!(missing, vec![DraftField::Name, DraftField::Life]);
            }
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_draft_misses_everything() {
        match CardDraft::blank().validate() {
            Err(ValidationError::MissingFields(missing)) => {
                assert_eq!(missing.len(), DraftField::all().len());
            }
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut draft = filled_draft();
        draft.image = "not a url".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidImageUrl("not a url".to_string()))
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(!is_valid_url("/images/x.png"));
        assert!(!is_valid_url("example.com/x.png"));
        assert!(is_valid_url("https://example.com/x.png"));
    }

    #[test]
    fn test_missing_reported_before_bad_url() {
        let mut draft = filled_draft();
        draft.image = "nope".to_string();
        draft.kind.clear();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::MissingFields(_))
        ));
    }

    #[test]
    fn test_from_card_roundtrips_display() {
        let card = seed_cards().remove(0);
        let draft = CardDraft::from_card(&card);
        assert_eq!(draft.display_value(DraftField::Attack), "270");
        assert_eq!(draft.display_value(DraftField::Name), card.name);
        assert_eq!(draft.validate().unwrap(), CardFields::from(card));
    }

    #[test]
    fn test_set_field_routes_numeric_through_coercion() {
        let mut draft = CardDraft::blank();
        draft.set_field(DraftField::Defense, "80");
        draft.set_field(DraftField::Defense, "8a0");
        assert_eq!(draft.defense, StatInput::Value(8));
        draft.set_field(DraftField::Defense, "--");
        assert_eq!(draft.defense, StatInput::Value(8));
    }

    #[test]
    fn test_preview_image() {
        let mut draft = CardDraft::blank();
        assert_eq!(draft.preview_image(), None);
        draft.image = "https://ex".to_string();
        assert_eq!(draft.preview_image(), Some("https://ex"));
        draft.image = "ex".to_string();
        assert_eq!(draft.preview_image(), None);
    }

    #[test]
    fn test_numeric_fields() {
        let numeric: Vec<_> = DraftField::all()
            .iter()
            .filter(|f| f.is_numeric())
            .collect();
        assert_eq!(
            numeric,
            vec![&DraftField::Attack, &DraftField::Defense, &DraftField::Life]
        );
    }
}
