use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::base62;
use crate::error::DecodeError;

/// A numeric id that displays, parses and serializes as its base62 form.
///
/// Ordering follows the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ShortId(pub u64);

impl ShortId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ShortId {
    fn from(id: u64) -> Self {
        ShortId(id)
    }
}

impl From<ShortId> for u64 {
    fn from(id: ShortId) -> Self {
        id.0
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&base62::encode(self.0))
    }
}

impl FromStr for ShortId {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        base62::decode(s).map(ShortId)
    }
}

impl Serialize for ShortId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShortIdVisitor;

        impl de::Visitor<'_> for ShortIdVisitor {
            type Value = ShortId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a base62 string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShortId, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ShortIdVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct ShortenURLRes {
        id: ShortId,
        url: String,
    }

    #[test]
    fn display_and_parse() {
        let id = ShortId(3845);
        assert_eq!(id.to_string(), "101");
        assert_eq!("101".parse::<ShortId>(), Ok(id));
        assert_eq!(format!("{:>5}", ShortId(61)), "    Z");
        assert_eq!(
            "1@1".parse::<ShortId>(),
            Err(DecodeError::InvalidCharacter { index: 1, character: '@' })
        );
    }

    #[test]
    fn conversions() {
        let id = ShortId::from(u64::MAX);
        assert_eq!(id.get(), u64::MAX);
        assert_eq!(u64::from(id), u64::MAX);
        assert!(ShortId(61) < ShortId(62));
    }

    #[test]
    fn serde_json_round_trip() {
        let res = ShortenURLRes {
            id: ShortId(62),
            url: "https://example.com".to_owned(),
        };
        let json = serde_json::to_string(&res).unwrap();
        assert_eq!(json, r#"{"id":"10","url":"https://example.com"}"#);
        assert_eq!(serde_json::from_str::<ShortenURLRes>(&json).unwrap(), res);
    }

    #[test]
    fn serde_rejects_malformed() {
        let err = serde_json::from_str::<ShortId>(r#""1@1""#).unwrap_err();
        assert!(err.to_string().contains("invalid base62 character '@' at index 1"));
        assert!(serde_json::from_str::<ShortId>("3845").is_err());
    }
}
