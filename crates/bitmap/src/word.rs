use crate::BitmapError;
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Number of byte-wide slots in one word.
pub const SLOT_COUNT: usize = 32;

/// Bits per slot.
pub const SLOT_BITS: usize = 8;

/// Thirty-two byte-wide values packed into a single 256-bit word.
///
/// Slot `i` occupies bits `8 * i` through `8 * i + 7`, so slot 0 is the
/// least significant byte of the word. The whole map persists as one hex
/// word.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitmap(U256);

impl Bitmap {
    /// An empty map.
    pub const fn new() -> Self {
        Self(U256::ZERO)
    }

    /// Wrap an already packed word.
    pub const fn from_word(word: U256) -> Self {
        Self(word)
    }

    /// The packed word.
    pub const fn word(&self) -> U256 {
        self.0
    }

    /// Store `value` in `slot`, replacing whatever was there.
    pub fn store(&mut self, slot: usize, value: u8) -> Result<(), BitmapError> {
        check(slot)?;
        self.put(slot, value);
        Ok(())
    }

    /// Read the value in `slot`.
    pub fn read(&self, slot: usize) -> Result<u8, BitmapError> {
        check(slot)?;
        Ok(self.get(slot))
    }

    /// All 32 slot values, slot 0 first.
    pub fn values(&self) -> [u8; SLOT_COUNT] {
        self.0.to_le_bytes::<SLOT_COUNT>()
    }

    /// The packed word as a zero-padded hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{:064x}", self.0)
    }

    /// Parse a persisted word. Accepts minimal or zero-padded hex, with or
    /// without the `0x` prefix.
    pub fn from_hex(data: &str) -> Result<Self, BitmapError> {
        let bytes = hex::decode(data)?;
        if bytes.len() > SLOT_COUNT {
            return Err(BitmapError::WordTooWide { len: bytes.len() });
        }
        Ok(Self(U256::from_be_slice(&bytes)))
    }

    pub(crate) fn put(&mut self, slot: usize, value: u8) {
        let shift = slot * SLOT_BITS;
        let mask = U256::from(0xffu8) << shift;
        self.0 = (self.0 & !mask) | (U256::from(value) << shift);
    }

    pub(crate) fn get(&self, slot: usize) -> u8 {
        ((self.0 >> (slot * SLOT_BITS)) & U256::from(0xffu8)).to::<u8>()
    }
}

const fn check(slot: usize) -> Result<(), BitmapError> {
    if slot >= SLOT_COUNT {
        return Err(BitmapError::SlotOutOfRange { slot });
    }
    Ok(())
}
