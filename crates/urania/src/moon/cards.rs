//! Lenormand card lookup keyed on the Moon's sign and decan.

use std::collections::HashMap;

use crate::zodiac::Sign;

// One card per (sign, decan) cell, thirty-six in all.
const CARDS: &[(Sign, [&str; 3])] = &[
    (Sign::Aries, ["Rider", "Clover", "Ship"]),
    (Sign::Taurus, ["House", "Tree", "Clouds"]),
    (Sign::Gemini, ["Snake", "Coffin", "Bouquet"]),
    (Sign::Cancer, ["Scythe", "Whip", "Birds"]),
    (Sign::Leo, ["Child", "Fox", "Bear"]),
    (Sign::Virgo, ["Stars", "Stork", "Dog"]),
    (Sign::Libra, ["Tower", "Garden", "Mountain"]),
    (Sign::Scorpio, ["Paths", "Mice", "Heart"]),
    (Sign::Sagittarius, ["Ring", "Book", "Letter"]),
    (Sign::Capricorn, ["Man", "Woman", "Lily"]),
    (Sign::Aquarius, ["Sun", "Moon", "Key"]),
    (Sign::Pisces, ["Fish", "Anchor", "Cross"]),
];

lazy_static::lazy_static! {
    static ref CARD_MAP: HashMap<(Sign, u8), &'static str> = {
        let mut map = HashMap::new();
        for (sign, cards) in CARDS {
            for (i, card) in cards.iter().enumerate() {
                map.insert((*sign, i as u8 + 1), *card);
            }
        }
        map
    };
}

/// The Lenormand card for a sign/decan pair; `None` for decans outside
/// 1..=3.
pub fn lenormand_card(sign: Sign, decan: u8) -> Option<&'static str> {
    CARD_MAP.get(&(sign, decan)).copied()
}
