use std::{fmt, str};

use fstr::FStr;

/// Represents a Universally Unique IDentifier.
///
/// A `Uuid` is a plain 16-byte value. It is `Copy`, so every holder owns an independent copy, and
/// no method mutates a value once it has been handed out.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The layout scheme of a UUID, read from the leading bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved, NCS backward compatibility.
    Ncs,
    /// `10x`: the layout specified by RFC 4122.
    Rfc4122,
    /// `110`: reserved, Microsoft backward compatibility.
    Microsoft,
    /// `111`: reserved for future definition.
    Future,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    ///
    /// Also returned by [`parse`](crate::parse()) and [`new_v4`](crate::new_v4) to signal failure.
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::namespace("6ba7b810-9dad-11d1-80b4-00c04fd430c8");

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::namespace("6ba7b811-9dad-11d1-80b4-00c04fd430c8");

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::namespace("6ba7b812-9dad-11d1-80b4-00c04fd430c8");

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::namespace("6ba7b814-9dad-11d1-80b4-00c04fd430c8");

    /// Parses a namespace literal during constant evaluation, so that a malformed literal fails
    /// the build instead of silently producing Nil.
    const fn namespace(src: &str) -> Self {
        match Self::try_parse(src) {
            Ok(uuid) => uuid,
            Err(_) => panic!("invalid namespace UUID literal"),
        }
    }

    /// Creates a UUID from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    ///
    /// The reference is shared and cannot be used to modify `self`.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the version number stored in the high nibble of byte 6.
    ///
    /// The value is returned as is; no check is made against the set of defined versions.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the variant classified from the leading bits of byte 8.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Ncs,
            0b100..=0b101 => Variant::Rfc4122,
            0b110 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Returns `true` if `self` is the Nil UUID.
    ///
    /// Note that a Nil UUID may be a legitimately decoded value as well as a failure sentinel.
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Returns `true` if all 16 bytes of `self` and `other` match.
    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Overwrites the version nibble, keeping the low four bits of byte 6.
    pub(crate) fn with_version(mut self, version: u8) -> Self {
        self.0[6] = (self.0[6] & 0x0f) | (version << 4);
        self
    }

    /// Overwrites the top two bits of byte 8 with the RFC 4122 variant `10`.
    pub(crate) fn with_rfc4122_variant(mut self) -> Self {
        self.0[8] = (self.0[8] & 0x3f) | 0x80;
        self
    }

    /// Creates an object from any of the accepted textual forms:
    ///
    /// - `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
    /// - `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`
    /// - `urn:uuid:xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
    ///
    /// Hexadecimal digits are case-insensitive. Unlike [`parse`](crate::parse()), this function
    /// tells an all-zero input apart from a malformed one.
    ///
    /// Braces must come as a pair and nothing may follow the body of the URN form, so unbalanced
    /// inputs such as `{xxxxxxxx-...` or `urn:uuid:xxxxxxxx-...}`, which some other parsers
    /// tolerate, are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid45::Uuid;
    ///
    /// let x = Uuid::try_parse("urn:uuid:C5302009-7FF6-47D2-9A1C-72601DA3E3E5")?;
    /// assert_eq!(x.to_string(), "c5302009-7ff6-47d2-9a1c-72601da3e3e5");
    /// assert_eq!(Uuid::try_parse("00000000-0000-0000-0000-000000000000"), Ok(Uuid::NIL));
    /// # Ok::<(), uuid45::ParseError>(())
    /// ```
    pub const fn try_parse(src: &str) -> Result<Self, ParseError> {
        let src = src.as_bytes();
        match match_grammar(src) {
            Ok(start) => match decode_hex_body(src, start) {
                Ok(bytes) => Ok(Self(bytes)),
                Err(err) => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    /// Creates an object from the raw 16-byte binary form.
    pub fn try_from_slice(src: &[u8]) -> Result<Self, ParseError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| ParseError::InvalidLength(src.len()))
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// Use the [`fmt::Display`] trait usually to get the canonical string representation. This
    /// is the only form ever produced; braces and the URN prefix are input-only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid45::Uuid;
    ///
    /// let x = "{0B5BCDBF-1FEB-5813-943D-8C325C7FE5BB}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "0b5bcdbf-1feb-5813-943d-8c325c7fe5bb");
    /// assert_eq!(format!("{}", y), "0b5bcdbf-1feb-5813-943d-8c325c7fe5bb");
    /// # Ok::<(), uuid45::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut j = 0;
        for (i, e) in self.0.iter().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                buffer[j] = b'-';
                j += 1;
            }
            buffer[j] = DIGITS[(e >> 4) as usize];
            buffer[j + 1] = DIGITS[(e & 15) as usize];
            j += 2;
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer holds ASCII hex digits and hyphens only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

/// Returns `true` if all 16 bytes of `a` and `b` match.
pub fn equal(a: &Uuid, b: &Uuid) -> bool {
    a == b
}

/// Offsets of the hyphens within the 36-character body.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

const URN_PREFIX: &[u8; 9] = b"urn:uuid:";

/// Checks `src` against the surface grammar and returns the offset of the 36-character body.
const fn match_grammar(src: &[u8]) -> Result<usize, ParseError> {
    let start = match src.len() {
        36 => 0,
        38 => {
            if src[0] != b'{' {
                return Err(ParseError::InvalidCharacter { index: 0 });
            }
            if src[37] != b'}' {
                return Err(ParseError::InvalidCharacter { index: 37 });
            }
            1
        }
        45 => {
            let mut i = 0;
            while i < URN_PREFIX.len() {
                if src[i] != URN_PREFIX[i] {
                    return Err(ParseError::InvalidCharacter { index: i });
                }
                i += 1;
            }
            URN_PREFIX.len()
        }
        len => return Err(ParseError::InvalidLength(len)),
    };

    let mut p = 0;
    while p < 36 {
        let c = src[start + p];
        let valid = if p == HYPHENS[0] || p == HYPHENS[1] || p == HYPHENS[2] || p == HYPHENS[3] {
            c == b'-'
        } else {
            hex_value(c).is_some()
        };
        if !valid {
            return Err(ParseError::InvalidCharacter { index: start + p });
        }
        p += 1;
    }
    Ok(start)
}

/// Decodes the hex digits of the 36-character body at `start`, skipping hyphens.
const fn decode_hex_body(src: &[u8], start: usize) -> Result<[u8; 16], ParseError> {
    let mut dst = [0u8; 16];
    let mut n_digits = 0;
    let mut p = start;
    while p < start + 36 {
        let c = src[p];
        p += 1;
        if c == b'-' {
            continue;
        }
        let value = match hex_value(c) {
            Some(value) => value,
            None => return Err(ParseError::InvalidCharacter { index: p - 1 }),
        };
        if n_digits >= 32 {
            return Err(ParseError::InvalidLength(src.len()));
        }
        if n_digits % 2 == 0 {
            dst[n_digits / 2] = value << 4;
        } else {
            dst[n_digits / 2] = dst[n_digits / 2] | value;
        }
        n_digits += 1;
    }
    if n_digits == 32 {
        Ok(dst)
    } else {
        Err(ParseError::InvalidLength(src.len()))
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the bare, braced, or URN string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::try_parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = ParseError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Error parsing an invalid string or binary representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input has none of the accepted lengths.
    #[error("invalid length: {0}")]
    InvalidLength(usize),

    /// The input does not match the grammar at `index`.
    #[error("invalid character at index {index}")]
    InvalidCharacter {
        /// Byte offset of the offending character.
        index: usize,
    },
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}
