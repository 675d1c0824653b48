/// Errors raised by the byte-slot map.
#[derive(Debug, thiserror::Error)]
pub enum BitmapError {
    /// A slot index beyond the 32 byte-slots of the word.
    #[error("Slot must be 0-31")]
    SlotOutOfRange {
        /// The offending slot index.
        slot: usize,
    },
    /// A persisted word did not parse as hex.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
    /// A persisted word decoded to more bytes than a word holds.
    #[error("hex word of {len} bytes does not fit a uint256")]
    WordTooWide {
        /// The decoded byte length.
        len: usize,
    },
}
