use crate::{Bitmap, BitmapError};
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

const STRENGTH: usize = 0;
const DEXTERITY: usize = 1;
const INTELLIGENCE: usize = 2;
const WISDOM: usize = 3;
const CHARISMA: usize = 4;
const CONSTITUTION: usize = 5;
const LEVEL: usize = 6;
const CLASS_ID: usize = 7;

/// A snapshot of every attribute on a sheet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Slot 0.
    pub strength: u8,
    /// Slot 1.
    pub dexterity: u8,
    /// Slot 2.
    pub intelligence: u8,
    /// Slot 3.
    pub wisdom: u8,
    /// Slot 4.
    pub charisma: u8,
    /// Slot 5.
    pub constitution: u8,
    /// Slot 6.
    pub level: u8,
    /// Slot 7.
    pub class_id: u8,
}

/// Game-character attributes packed into the low eight slots of a
/// [`Bitmap`].
///
/// One word holds the whole sheet, so a character saves and loads as a
/// single hex string.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    map: Bitmap,
}

impl CharacterSheet {
    /// A blank sheet.
    pub const fn new() -> Self {
        Self { map: Bitmap::new() }
    }

    /// Load a sheet from a packed word.
    pub const fn from_word(word: U256) -> Self {
        Self { map: Bitmap::from_word(word) }
    }

    /// The packed word.
    pub const fn word(&self) -> U256 {
        self.map.word()
    }

    /// Save the sheet as a hex word.
    pub fn to_hex(&self) -> String {
        self.map.to_hex()
    }

    /// Load a sheet from a saved hex word.
    pub fn from_hex(data: &str) -> Result<Self, BitmapError> {
        Ok(Self { map: Bitmap::from_hex(data)? })
    }

    /// Every attribute at once.
    pub fn attributes(&self) -> Attributes {
        Attributes {
            strength: self.strength(),
            dexterity: self.dexterity(),
            intelligence: self.intelligence(),
            wisdom: self.wisdom(),
            charisma: self.charisma(),
            constitution: self.constitution(),
            level: self.level(),
            class_id: self.class_id(),
        }
    }

    /// The character's strength.
    pub fn strength(&self) -> u8 {
        self.map.get(STRENGTH)
    }

    /// Set the character's strength.
    pub fn set_strength(&mut self, value: u8) {
        self.map.put(STRENGTH, value);
    }

    /// The character's dexterity.
    pub fn dexterity(&self) -> u8 {
        self.map.get(DEXTERITY)
    }

    /// Set the character's dexterity.
    pub fn set_dexterity(&mut self, value: u8) {
        self.map.put(DEXTERITY, value);
    }

    /// The character's intelligence.
    pub fn intelligence(&self) -> u8 {
        self.map.get(INTELLIGENCE)
    }

    /// Set the character's intelligence.
    pub fn set_intelligence(&mut self, value: u8) {
        self.map.put(INTELLIGENCE, value);
    }

    /// The character's wisdom.
    pub fn wisdom(&self) -> u8 {
        self.map.get(WISDOM)
    }

    /// Set the character's wisdom.
    pub fn set_wisdom(&mut self, value: u8) {
        self.map.put(WISDOM, value);
    }

    /// The character's charisma.
    pub fn charisma(&self) -> u8 {
        self.map.get(CHARISMA)
    }

    /// Set the character's charisma.
    pub fn set_charisma(&mut self, value: u8) {
        self.map.put(CHARISMA, value);
    }

    /// The character's constitution.
    pub fn constitution(&self) -> u8 {
        self.map.get(CONSTITUTION)
    }

    /// Set the character's constitution.
    pub fn set_constitution(&mut self, value: u8) {
        self.map.put(CONSTITUTION, value);
    }

    /// The character's level.
    pub fn level(&self) -> u8 {
        self.map.get(LEVEL)
    }

    /// Set the character's level.
    pub fn set_level(&mut self, value: u8) {
        self.map.put(LEVEL, value);
    }

    /// The character's class id.
    pub fn class_id(&self) -> u8 {
        self.map.get(CLASS_ID)
    }

    /// Set the character's class id.
    pub fn set_class_id(&mut self, value: u8) {
        self.map.put(CLASS_ID, value);
    }
}
