use crate::alphabet::{digit_of, symbol_of, BASE, MAX_LEN, POWERS};
use crate::error::DecodeError;

/// Number of base62 digits in `num`, i.e. the smallest `k` with `num < 62^k` (1 for zero).
fn digit_count(num: u64) -> usize {
    POWERS[1..]
        .iter()
        .position(|&power| num < power)
        .map_or(MAX_LEN, |i| i + 1)
}

pub fn encode(num: u64) -> String {
    let mut encoded = String::with_capacity(MAX_LEN);
    encode_into(num, &mut encoded);
    encoded
}

/// Appends the base62 form of `num` to `out`, most significant digit first.
pub fn encode_into(mut num: u64, out: &mut String) {
    for &divisor in POWERS[..digit_count(num)].iter().rev() {
        // < 62 since num < 62 * divisor here
        let digit = (num / divisor) as u8;
        num %= divisor;
        out.push(symbol_of(digit));
    }
}

/// Parses a base62 string. The empty string decodes to 0.
///
/// Every char is validated even past the point where the value overflows, so an
/// invalid char is always reported ahead of `Overflow`.
pub fn decode(s: &str) -> Result<u64, DecodeError> {
    let mut num = Some(0u64);
    let mut len = 0;
    for (index, character) in s.chars().enumerate() {
        let Some(digit) = digit_of(character) else {
            tracing::debug!(index, %character, "rejecting base62 input");
            return Err(DecodeError::InvalidCharacter { index, character });
        };
        num = num
            .and_then(|n| n.checked_mul(BASE))
            .and_then(|n| n.checked_add(digit as u64));
        len = index + 1;
    }
    num.ok_or_else(|| {
        tracing::debug!(len, "base62 input overflows u64");
        DecodeError::Overflow
    })
}
