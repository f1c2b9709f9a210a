//! Conversion between `u64` and a fixed base62 alphabet (`0-9a-zA-Z`), for short
//! URL-safe ids derived from numeric counters.
//!
//! ```
//! assert_eq!(short62::encode(3845), "101");
//! assert_eq!(short62::decode("101"), Ok(3845));
//! ```

pub mod alphabet;
mod base62;
mod error;
mod id;

pub use alphabet::MAX_LEN;
pub use base62::{decode, encode, encode_into};
pub use error::DecodeError;
pub use id::ShortId;
