//! Total parse function over the kinds of input a UUID boundary receives

use crate::{sql::SqlValue, Uuid};

/// A source value to be resolved into a [`Uuid`] by [`parse`].
///
/// Each variant is routed to one of the two core decoders, [`Uuid::try_parse`] for text and
/// [`Uuid::try_from_slice`] for bytes, or resolves to Nil directly.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Input<'a> {
    /// A value that is already a UUID.
    Uuid(Uuid),
    /// Bare, braced, or URN textual form.
    Text(&'a str),
    /// Raw 16-byte binary form.
    Bytes(&'a [u8]),
    /// No value.
    Absent,
    /// A value of a kind that can never hold a UUID, described by its type name.
    Unsupported(&'static str),
}

/// Resolves `src` into a UUID, returning [`Uuid::NIL`] if `src` is not a valid representation.
///
/// This function never fails. Because a valid all-zero input also yields Nil, callers that need
/// to distinguish the two should use [`Uuid::try_parse`] or [`Uuid::try_from_slice`] instead.
///
/// # Examples
///
/// ```rust
/// use uuid45::{parse, Uuid};
///
/// let x = parse("{c5302009-7ff6-47d2-9a1c-72601da3e3e5}");
/// assert_eq!(x.to_string(), "c5302009-7ff6-47d2-9a1c-72601da3e3e5");
/// assert_eq!(parse(x.as_bytes()), x);
/// assert_eq!(parse("something-ersds-derts-dd.re-rersd-dds"), Uuid::NIL);
/// assert_eq!(parse(None::<&str>), Uuid::NIL);
/// ```
pub fn parse<'a>(src: impl Into<Input<'a>>) -> Uuid {
    match src.into() {
        Input::Uuid(uuid) => uuid,
        Input::Text(text) => Uuid::try_parse(text).unwrap_or(Uuid::NIL),
        Input::Bytes(bytes) => Uuid::try_from_slice(bytes).unwrap_or(Uuid::NIL),
        Input::Absent | Input::Unsupported(_) => Uuid::NIL,
    }
}

/// Returns `true` if `src` matches one of the accepted textual forms.
///
/// The Nil UUID string is valid.
pub fn is_valid(src: &str) -> bool {
    Uuid::try_parse(src).is_ok()
}

impl From<Uuid> for Input<'_> {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<[u8; 16]> for Input<'_> {
    fn from(src: [u8; 16]) -> Self {
        Self::Uuid(Uuid::from(src))
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(src: &'a str) -> Self {
        Self::Text(src)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(src: &'a String) -> Self {
        Self::Text(src)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(src: &'a [u8]) -> Self {
        Self::Bytes(src)
    }
}

impl<'a> From<&'a [u8; 16]> for Input<'a> {
    fn from(src: &'a [u8; 16]) -> Self {
        Self::Bytes(src)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(src: &'a Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl<'a, T: Into<Input<'a>>> From<Option<T>> for Input<'a> {
    fn from(src: Option<T>) -> Self {
        src.map_or(Self::Absent, Into::into)
    }
}

impl<'a> From<&'a SqlValue> for Input<'a> {
    fn from(src: &'a SqlValue) -> Self {
        match src {
            SqlValue::Null => Self::Absent,
            SqlValue::Uuid(uuid) => Self::Uuid(*uuid),
            SqlValue::Text(text) => Self::Text(text),
            SqlValue::Bytes(bytes) => Self::Bytes(bytes),
            other => Self::Unsupported(other.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid, parse, Input};
    use crate::{sql::SqlValue, Uuid};

    const TEXT: &str = "c5302009-7ff6-47d2-9a1c-72601da3e3e5";

    /// Round-trips canonical strings
    #[test]
    fn round_trips_canonical_strings() {
        let cases = [
            "c5302009-7ff6-47d2-9a1c-72601da3e3e5",
            "0b5bcdbf-1feb-5813-943d-8c325c7fe5bb",
            "00000000-0000-4000-8000-000000000000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
        ];
        for text in cases {
            assert_eq!(parse(text).to_string(), text);
            assert_eq!(parse(&text.to_uppercase()).to_string(), text);
        }
    }

    /// Resolves every input kind
    #[test]
    fn resolves_every_input_kind() {
        let expected: Uuid = TEXT.parse().unwrap();
        let bytes = expected.to_bytes();

        assert_eq!(parse(expected), expected);
        assert_eq!(parse(bytes), expected);
        assert_eq!(parse(&bytes), expected);
        assert_eq!(parse(&bytes[..]), expected);
        assert_eq!(parse(&bytes.to_vec()), expected);
        assert_eq!(parse(TEXT), expected);
        assert_eq!(parse(&TEXT.to_owned()), expected);
        assert_eq!(parse(format!("{{{}}}", TEXT).as_str()), expected);
        assert_eq!(parse(format!("urn:uuid:{}", TEXT).as_str()), expected);
        assert_eq!(parse(Some(TEXT)), expected);
        assert_eq!(parse(None::<&str>), Uuid::NIL);
        assert_eq!(parse(Input::Absent), Uuid::NIL);
        assert_eq!(parse(Input::Unsupported("float")), Uuid::NIL);
    }

    /// Returns Nil to malformed input
    #[test]
    fn returns_nil_to_malformed_input() {
        assert_eq!(parse("something-ersds-derts-dd.re-rersd-dds"), Uuid::NIL);
        assert_eq!(parse(""), Uuid::NIL);
        assert_eq!(parse("c5302009-7ff6-47d2-9a1c-72601da3e3e"), Uuid::NIL);
        assert_eq!(parse(&[1u8; 15][..]), Uuid::NIL);
        assert_eq!(parse(&[1u8; 17][..]), Uuid::NIL);
        assert_eq!(parse(&[0u8; 0][..]), Uuid::NIL);

        // text is never reinterpreted as binary, even at 16 bytes
        assert_eq!(parse("0123456789abcdef"), Uuid::NIL);
    }

    /// Checks validity of textual forms
    #[test]
    fn checks_validity_of_textual_forms() {
        assert!(!is_valid("something-ersds-derts-dd.re-rersd-dds"));
        assert!(!is_valid(""));
        assert!(is_valid(TEXT));
        assert!(is_valid(&TEXT.to_uppercase()));
        assert!(is_valid(&format!("{{{}}}", TEXT)));
        assert!(is_valid(&format!("urn:uuid:{}", TEXT)));
        assert!(is_valid("00000000-0000-0000-0000-000000000000"));
    }

    /// Maps SQL values onto inputs
    #[test]
    fn maps_sql_values_onto_inputs() {
        let expected: Uuid = TEXT.parse().unwrap();
        assert_eq!(parse(&SqlValue::Text(TEXT.to_owned())), expected);
        assert_eq!(parse(&SqlValue::Bytes(expected.to_bytes().to_vec())), expected);
        assert_eq!(parse(&SqlValue::Uuid(expected)), expected);
        assert_eq!(parse(&SqlValue::Null), Uuid::NIL);
        assert_eq!(Input::from(&SqlValue::Int(42)), Input::Unsupported("int"));
        assert_eq!(parse(&SqlValue::Bool(true)), Uuid::NIL);
    }
}
