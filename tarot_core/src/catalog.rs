use std::fmt;

use thiserror::Error;

/// The 22 major arcana, in canonical order. Index into this table is the
/// catalog id of the card.
pub const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

pub const SUITS: [&str; 4] = ["Mind", "Heart", "Body", "World"];

pub const RANKS: [&str; 14] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Page", "Knight", "Queen", "King",
];

/// Total deck size: 22 major + 4 suits x 14 ranks.
pub const DECK_SIZE: usize = MAJOR_ARCANA.len() + SUITS.len() * RANKS.len();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The name is neither a major arcana nor a "<Rank> of <Suit>" form.
    #[error("invalid card name: {0:?}")]
    InvalidCardName(String),
}

/// One of the 78 cards. Built once at startup; `id` is a dense index into
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardIdentity {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub asset_path: String,
}

impl fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The full 78-card deck catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<CardIdentity>,
}

impl Catalog {
    /// Build the catalog, attaching line i of `descriptions_text` to card i.
    /// A missing or short descriptions file degrades to blank descriptions;
    /// construction never fails.
    pub fn build(descriptions_text: &str) -> Self {
        let descriptions: Vec<&str> = descriptions_text.lines().collect();
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for (i, name) in MAJOR_ARCANA.iter().enumerate() {
            cards.push(Self::identity(i, name.to_string(), &descriptions));
        }
        let offset = MAJOR_ARCANA.len();
        for (s, suit) in SUITS.iter().enumerate() {
            for (r, rank) in RANKS.iter().enumerate() {
                let id = offset + s * RANKS.len() + r;
                cards.push(Self::identity(id, format!("{} of {}", rank, suit), &descriptions));
            }
        }

        Self { cards }
    }

    fn identity(id: usize, name: String, descriptions: &[&str]) -> CardIdentity {
        // All built-in names satisfy the naming rule, so this cannot fail.
        let asset_path = file_name_for(&name).unwrap_or_default();
        CardIdentity {
            id,
            description: descriptions.get(id).unwrap_or(&"").trim().to_string(),
            asset_path,
            name,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&CardIdentity> {
        self.cards.get(id)
    }

    pub fn cards(&self) -> &[CardIdentity] {
        &self.cards
    }
}

/// Asset file name for a card name.
///
/// Major arcana map to `major_<index>_<snake_case_name>.jpg`; minor cards
/// must be in "<Rank> of <Suit>" form and map to `<suit>_<rank>.jpg`.
/// Anything else is an `InvalidCardName` error.
pub fn file_name_for(card_name: &str) -> Result<String, CatalogError> {
    if let Some(major_index) = MAJOR_ARCANA.iter().position(|&n| n == card_name) {
        let slug = card_name.to_lowercase().replace(' ', "_");
        return Ok(format!("major_{}_{}.jpg", major_index, slug));
    }

    let lower = card_name.to_lowercase();
    match lower.split_once(" of ") {
        Some((rank, suit)) if !rank.is_empty() && !suit.is_empty() => {
            Ok(format!("{}_{}.jpg", suit, rank))
        }
        _ => Err(CatalogError::InvalidCardName(card_name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_78_cards_with_dense_ids() {
        let catalog = Catalog::build("");
        assert_eq!(catalog.len(), 78);
        for (i, card) in catalog.cards().iter().enumerate() {
            assert_eq!(card.id, i);
        }
    }

    #[test]
    fn test_majors_precede_minors_in_suit_rank_order() {
        let catalog = Catalog::build("");
        assert_eq!(catalog.get(0).unwrap().name, "The Fool");
        assert_eq!(catalog.get(21).unwrap().name, "The World");
        assert_eq!(catalog.get(22).unwrap().name, "Ace of Mind");
        assert_eq!(catalog.get(35).unwrap().name, "King of Mind");
        assert_eq!(catalog.get(36).unwrap().name, "Ace of Heart");
        assert_eq!(catalog.get(77).unwrap().name, "King of World");
    }

    #[test]
    fn test_descriptions_align_by_line() {
        let text = "first\nsecond\nthird";
        let catalog = Catalog::build(text);
        assert_eq!(catalog.get(0).unwrap().description, "first");
        assert_eq!(catalog.get(2).unwrap().description, "third");
        // Short file degrades to blank for the tail
        assert_eq!(catalog.get(3).unwrap().description, "");
        assert_eq!(catalog.get(77).unwrap().description, "");
    }

    #[test]
    fn test_major_file_names() {
        assert_eq!(file_name_for("The Fool").unwrap(), "major_0_the_fool.jpg");
        assert_eq!(
            file_name_for("Wheel of Fortune").unwrap(),
            "major_10_wheel_of_fortune.jpg"
        );
        assert_eq!(file_name_for("The World").unwrap(), "major_21_the_world.jpg");
    }

    #[test]
    fn test_minor_file_names() {
        assert_eq!(file_name_for("10 of Heart").unwrap(), "heart_10.jpg");
        assert_eq!(file_name_for("Ace of Mind").unwrap(), "mind_ace.jpg");
        assert_eq!(file_name_for("Queen of Body").unwrap(), "body_queen.jpg");
    }

    #[test]
    fn test_unrecognized_name_is_an_error() {
        assert_eq!(
            file_name_for("Mystery Card"),
            Err(CatalogError::InvalidCardName("Mystery Card".to_string()))
        );
        assert!(file_name_for("").is_err());
    }

    #[test]
    fn test_every_catalog_card_has_an_asset_path() {
        let catalog = Catalog::build("");
        for card in catalog.cards() {
            assert!(card.asset_path.ends_with(".jpg"), "{}", card.name);
            assert!(!card.asset_path.contains(' '), "{}", card.asset_path);
        }
    }
}
