//! Card Type - the stat sheet shown on the board
//!
//! Also holds the three fixture cards every session starts with.

/// Identity of a card inside a deck.
///
/// Assigned by the store and never reused while the card is alive.
pub type CardNumber = u32;

/// A committed card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Deck-unique number, acts as identity
    pub number: CardNumber,

    /// Player name
    pub name: String,

    /// Play style (e.g. "Atacante y Salto")
    pub kind: String,

    pub attack: i64,
    pub defense: i64,
    pub life: i64,

    /// Free-form description shown in the detail view
    pub description: String,

    /// Absolute image URL
    pub image: String,
}

/// Validated card content without an identity.
///
/// Only [`crate::CardDraft::validate`] produces these, so a `CardFields`
/// always satisfies the deck's field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    pub name: String,
    pub kind: String,
    pub attack: i64,
    pub defense: i64,
    pub life: i64,
    pub description: String,
    pub image: String,
}

impl CardFields {
    /// Attach an identity, producing a storable card
    pub fn into_card(self, number: CardNumber) -> Card {
        Card {
            number,
            name: self.name,
            kind: self.kind,
            attack: self.attack,
            defense: self.defense,
            life: self.life,
            description: self.description,
            image: self.image,
        }
    }
}

impl From<Card> for CardFields {
    fn from(card: Card) -> Self {
        Self {
            name: card.name,
            kind: card.kind,
            attack: card.attack,
            defense: card.defense,
            life: card.life,
            description: card.description,
            image: card.image,
        }
    }
}

/// The fixture deck: Karasuno's first three cards.
pub fn seed_cards() -> Vec<Card> {
    vec![
        Card {
            number: 1,
            name: "Shōyō Hinata".to_string(),
            kind: "Atacante y Salto".to_string(),
            attack: 270,
            defense: 100,
            life: 100,
            description: "Atacante central (middle blocker) de Karasuno, a pesar de su corta \
                estatura. Es el protagonista de la serie y es conocido por su increíble \
                agilidad, saltos sobrehumanos y su determinación inquebrantable."
                .to_string(),
            image: "https://i.redd.it/p9ovxh9mtcw51.jpg".to_string(),
        },
        Card {
            number: 2,
            name: "Yū Nishinoya".to_string(),
            kind: "Defensor y Rapidez".to_string(),
            attack: 60,
            defense: 450,
            life: 100,
            description: "Libero del equipo de voleibol de Karasuno. Es famoso por sus \
                increíbles reflejos, su velocidad y su habilidad para salvar cualquier balón \
                (guardián de Karasuno). Es una persona muy energética y ruidosa."
                .to_string(),
            image: "https://i.pinimg.com/originals/57/50/f8/5750f89c92db4b576a4b73be419d17bf.jpg"
                .to_string(),
        },
        Card {
            number: 3,
            name: "Tobio Kageyama".to_string(),
            kind: "Armador Y Sacador".to_string(),
            attack: 280,
            defense: 380,
            life: 100,
            description: "Armador/colocador genio de Karasuno. Inicialmente conocido como el \
                Rey de la Cancha por su actitud autoritaria, destaca por su precisión técnica \
                inigualable y su fuerte potencial atlético. Forma un dúo increíble con Hinata, \
                creando ataques rápidos y revolucionarios."
                .to_string(),
            image: "https://i.pinimg.com/736x/a2/d8/10/a2d810489524f93d25da8f6e45a50b5f.jpg"
                .to_string(),
        },
    ]
}
