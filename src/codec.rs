//! Text and binary marshaling with the Nil-is-invalid policy of boundary codecs

use std::fmt;

use crate::{parse, Uuid};

/// Names the boundary operation that produced an [`Error`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operation {
    /// [`Uuid::unmarshal_text`] and the human-readable serde path.
    UnmarshalText,
    /// [`Uuid::unmarshal_binary`] and the compact serde path.
    UnmarshalBinary,
    /// [`Scanner::scan`](crate::Scanner::scan).
    Scan,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnmarshalText => "uuid45::unmarshal_text",
            Self::UnmarshalBinary => "uuid45::unmarshal_binary",
            Self::Scan => "uuid45::scan",
        })
    }
}

/// Error returned by the boundary codecs and [`try_new_v4`](crate::try_new_v4).
///
/// A codec that returns an error leaves its target untouched.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input did not decode into a non-Nil UUID.
    #[error("{op}: invalid UUID")]
    Invalid {
        /// The failed operation.
        op: Operation,
    },

    /// The textual input did not decode into a non-Nil UUID.
    #[error("{op}: invalid UUID: {value}")]
    InvalidValue {
        /// The failed operation.
        op: Operation,
        /// The offending input.
        value: String,
    },

    /// The source value is of a kind that never holds a UUID.
    #[error("{op}: invalid type {type_name}")]
    UnsupportedType {
        /// The failed operation.
        op: Operation,
        /// Name of the unexpected source kind.
        type_name: &'static str,
    },

    /// The random number generator failed to supply 16 bytes.
    #[error("uuid45::new_v4: random source failed: {0}")]
    Entropy(#[from] rand::Error),
}

impl Uuid {
    /// Returns the canonical string representation.
    pub fn marshal_text(&self) -> String {
        self.to_string()
    }

    /// Decodes any accepted textual form.
    ///
    /// Unlike [`Uuid::try_parse`], this function also rejects the Nil UUID, so a successful
    /// result always carries a non-zero value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid45::Uuid;
    ///
    /// assert!(Uuid::unmarshal_text("c5302009-7ff6-47d2-9a1c-72601da3e3e5").is_ok());
    /// assert!(Uuid::unmarshal_text("00000000-0000-0000-0000-000000000000").is_err());
    /// ```
    pub fn unmarshal_text(text: &str) -> Result<Self, Error> {
        decode_text(Operation::UnmarshalText, text)
    }

    /// Returns the raw 16-byte binary representation.
    pub const fn marshal_binary(&self) -> [u8; 16] {
        self.to_bytes()
    }

    /// Decodes the raw 16-byte binary form, rejecting any other length and the Nil UUID.
    pub fn unmarshal_binary(data: &[u8]) -> Result<Self, Error> {
        decode_binary(Operation::UnmarshalBinary, data)
    }
}

pub(crate) fn decode_text(op: Operation, text: &str) -> Result<Uuid, Error> {
    let uuid = parse(text);
    if uuid.is_nil() {
        tracing::debug!(%op, value = text, "rejected UUID text");
        Err(Error::InvalidValue {
            op,
            value: text.to_owned(),
        })
    } else {
        Ok(uuid)
    }
}

pub(crate) fn decode_binary(op: Operation, data: &[u8]) -> Result<Uuid, Error> {
    let uuid = parse(data);
    if uuid.is_nil() {
        tracing::debug!(%op, len = data.len(), "rejected UUID bytes");
        Err(Error::Invalid { op })
    } else {
        Ok(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Operation};
    use crate::Uuid;

    const TEXT: &str = "c5302009-7ff6-47d2-9a1c-72601da3e3e5";

    /// Marshals and unmarshals text
    #[test]
    fn marshals_and_unmarshals_text() {
        let e = Uuid::unmarshal_text(TEXT).unwrap();
        assert_eq!(e.marshal_text(), TEXT);
        assert_eq!(Uuid::unmarshal_text(&TEXT.to_uppercase()).unwrap(), e);
        assert_eq!(
            Uuid::unmarshal_text(&format!("urn:uuid:{}", TEXT)).unwrap(),
            e
        );
    }

    /// Rejects garbage and Nil text alike
    #[test]
    fn rejects_garbage_and_nil_text_alike() {
        for text in [
            "something-ersds-derts-dd.re-rersd-dds",
            "",
            "00000000-0000-0000-0000-000000000000",
            "{00000000-0000-0000-0000-000000000000}",
        ] {
            let err = Uuid::unmarshal_text(text).unwrap_err();
            assert!(matches!(
                &err,
                Error::InvalidValue { op: Operation::UnmarshalText, value } if value == text
            ));
        }

        let err = Uuid::unmarshal_text("not-a-uuid").unwrap_err();
        assert_eq!(
            err.to_string(),
            "uuid45::unmarshal_text: invalid UUID: not-a-uuid"
        );
    }

    /// Marshals and unmarshals binary
    #[test]
    fn marshals_and_unmarshals_binary() {
        let e: Uuid = TEXT.parse().unwrap();
        let bytes = e.marshal_binary();
        assert_eq!(bytes, *e.as_bytes());
        assert_eq!(Uuid::unmarshal_binary(&bytes).unwrap(), e);
    }

    /// Rejects binary of wrong length or Nil
    #[test]
    fn rejects_binary_of_wrong_length_or_nil() {
        for data in [&[0u8; 16][..], &[1u8; 15][..], &[1u8; 17][..], &[][..]] {
            let err = Uuid::unmarshal_binary(data).unwrap_err();
            assert!(matches!(
                err,
                Error::Invalid {
                    op: Operation::UnmarshalBinary
                }
            ));
            assert_eq!(err.to_string(), "uuid45::unmarshal_binary: invalid UUID");
        }
    }
}
