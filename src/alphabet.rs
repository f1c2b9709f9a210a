/// Digit value to symbol. The order is part of the encoding and must never change.
pub const SYMBOLS: [u8; 62] = *b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) const BASE: u64 = 62;

/// Longest encoding of a u64: 62^10 <= u64::MAX < 62^11
pub const MAX_LEN: usize = 11;

/// 62^0 ..= 62^10
pub(crate) const POWERS: [u64; MAX_LEN] = powers();

const INVALID: u8 = u8::MAX;

// symbol byte -> digit value, INVALID for bytes outside the alphabet
const DIGITS: [u8; 256] = digits();

const fn digits() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const fn powers() -> [u64; MAX_LEN] {
    let mut table = [1u64; MAX_LEN];
    let mut i = 1;
    while i < MAX_LEN {
        table[i] = table[i - 1] * BASE;
        i += 1;
    }
    table
}

/// Symbol for a digit in `0..62`.
pub fn symbol_of(digit: u8) -> char {
    SYMBOLS[digit as usize] as char
}

/// Digit value of `c`, or `None` if `c` is not one of the 62 symbols.
pub fn digit_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DIGITS[c as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}
