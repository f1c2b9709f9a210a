#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// `index` counts chars, not bytes.
    #[error("invalid base62 character {character:?} at index {index}")]
    InvalidCharacter { index: usize, character: char },

    #[error("base62 value does not fit in u64")]
    Overflow,
}
