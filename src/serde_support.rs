//! Serde support for `Uuid` and `NullUuid`
//!
//! Human-readable formats such as JSON carry a [`Uuid`] as its canonical string; compact formats
//! carry the raw 16 bytes. Decoding goes through [`Uuid::unmarshal_text`] and
//! [`Uuid::unmarshal_binary`], so the Nil UUID is rejected. [`NullUuid`] maps its absent value to
//! `null`.
//!
//! ```rust
//! use uuid45::{NullUuid, Uuid};
//!
//! let x = uuid45::new_v5(&Uuid::NAMESPACE_DNS, "example.com");
//! let json = serde_json::to_string(&x)?;
//! assert_eq!(json, r#""cfbff0d1-9375-5685-968c-48ce8b15ae17""#);
//! assert_eq!(serde_json::from_str::<Uuid>(&json)?, x);
//!
//! assert_eq!(serde_json::to_string(&NullUuid::NULL)?, "null");
//! assert_eq!(serde_json::from_str::<NullUuid>("null")?, NullUuid::NULL);
//! # Ok::<(), serde_json::Error>(())
//! ```

#![cfg(feature = "serde")]
#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{NullUuid, Uuid};

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.encode())
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(VisitorImpl)
        } else {
            deserializer.deserialize_bytes(VisitorImpl)
        }
    }
}

struct VisitorImpl;

impl<'de> de::Visitor<'de> for VisitorImpl {
    type Value = Uuid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a UUID representation")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Uuid::unmarshal_text(value).map_err(de::Error::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        Uuid::unmarshal_binary(value).map_err(de::Error::custom)
    }
}

impl Serialize for NullUuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(uuid) => serializer.serialize_some(&uuid),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullUuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Uuid>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::{new_v4, NullUuid, Uuid};
    use serde_test::{assert_ser_tokens, assert_tokens, Configure, Token};

    /// Serializes and deserializes prepared cases correctly
    #[test]
    fn serializes_and_deserializes_prepared_cases_correctly() {
        let cases = [
            (
                "c5302009-7ff6-47d2-9a1c-72601da3e3e5",
                &[
                    197, 48, 32, 9, 127, 246, 71, 210, 154, 28, 114, 96, 29, 163, 227, 229,
                ],
            ),
            (
                "0b5bcdbf-1feb-5813-943d-8c325c7fe5bb",
                &[
                    11, 91, 205, 191, 31, 235, 88, 19, 148, 61, 140, 50, 92, 127, 229, 187,
                ],
            ),
            (
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                &[
                    107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                ],
            ),
            (
                "ffffffff-ffff-ffff-ffff-ffffffffffff",
                &[
                    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
                    255,
                ],
            ),
        ];

        for (text, bytes) in cases {
            let e = text.parse::<Uuid>().unwrap();
            assert_tokens(&e.readable(), &[Token::String(text)]);
            assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
        }
    }

    /// Serializes Nil but refuses to deserialize it
    #[test]
    fn serializes_nil_but_refuses_to_deserialize_it() {
        let nil = "00000000-0000-0000-0000-000000000000";
        assert_ser_tokens(&Uuid::NIL.readable(), &[Token::Str(nil)]);

        let json = serde_json::to_string(&Uuid::NIL).unwrap();
        assert_eq!(json, format!("\"{}\"", nil));
        assert!(serde_json::from_str::<Uuid>(&json).is_err());
    }

    /// Encodes JSON as quoted canonical string
    #[test]
    fn encodes_json_as_quoted_canonical_string() {
        let e: Uuid = "{C5302009-7FF6-47D2-9A1C-72601DA3E3E5}".parse().unwrap();
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#""c5302009-7ff6-47d2-9a1c-72601da3e3e5""#);

        assert_eq!(
            serde_json::from_str::<Uuid>(r#""urn:uuid:C5302009-7FF6-47D2-9A1C-72601DA3E3E5""#)
                .unwrap(),
            e
        );
    }

    /// Rejects malformed JSON input
    #[test]
    fn rejects_malformed_json_input() {
        for json in [
            r#""something-ersds-derts-dd.re-rersd-dds""#,
            r#""""#,
            "null",
            "42",
            "c5302009-7ff6-47d2-9a1c-72601da3e3e5",
        ] {
            assert!(serde_json::from_str::<Uuid>(json).is_err(), "{}", json);
        }

        let err = serde_json::from_str::<Uuid>(r#""not-a-uuid""#).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("uuid45::unmarshal_text: invalid UUID: not-a-uuid"));
    }

    /// Round-trips generated identifiers through JSON
    #[test]
    fn round_trips_generated_identifiers_through_json() {
        for _ in 0..1_000 {
            let e = new_v4();
            let json = serde_json::to_string(&e).unwrap();
            assert_eq!(serde_json::from_str::<Uuid>(&json).unwrap(), e);
        }
    }

    /// Round-trips null wrapper through JSON
    #[test]
    fn round_trips_null_wrapper_through_json() {
        let json = serde_json::to_string(&NullUuid::NULL).unwrap();
        assert_eq!(json, "null");

        let e = serde_json::from_str::<NullUuid>(&json).unwrap();
        assert!(!e.valid);
        assert_eq!(e.uuid, Uuid::NIL);

        // the inner value of an absent wrapper is never written
        let stale = NullUuid {
            uuid: Uuid::MAX,
            valid: false,
        };
        assert_eq!(serde_json::to_string(&stale).unwrap(), "null");
    }

    /// Round-trips valid wrapper through JSON
    #[test]
    fn round_trips_valid_wrapper_through_json() {
        let e = NullUuid::new("c5302009-7ff6-47d2-9a1c-72601da3e3e5".parse().unwrap());
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#""c5302009-7ff6-47d2-9a1c-72601da3e3e5""#);
        assert_eq!(serde_json::from_str::<NullUuid>(&json).unwrap(), e);

        assert!(serde_json::from_str::<NullUuid>(r#""garbage""#).is_err());
    }

    /// Embeds wrapper in structured documents
    #[test]
    fn embeds_wrapper_in_structured_documents() {
        let doc: Vec<NullUuid> = serde_json::from_str(
            r#"[null, "c5302009-7ff6-47d2-9a1c-72601da3e3e5", null]"#,
        )
        .unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc[0], NullUuid::NULL);
        assert_eq!(
            doc[1].get().map(|e| e.to_string()).as_deref(),
            Some("c5302009-7ff6-47d2-9a1c-72601da3e3e5")
        );
        assert_eq!(doc[2], NullUuid::NULL);
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"[null,"c5302009-7ff6-47d2-9a1c-72601da3e3e5",null]"#
        );
    }
}
