//! SQL driver value and scan conventions
//!
//! Database drivers exchange column values as a small set of primitive kinds, modeled here as
//! [`SqlValue`]. A [`Uuid`] is always written as its canonical text form and can be read back from
//! a typed UUID, the raw 16-byte binary form, or any accepted textual form. [`NullUuid`] adds SQL
//! NULL on top.
//!
//! ```rust
//! use uuid45::{NullUuid, Scanner, SqlValue, Uuid, Valuer};
//!
//! let x = uuid45::new_v4();
//! let column = x.value();
//! assert_eq!(column, SqlValue::Text(x.to_string()));
//!
//! let mut y = Uuid::NIL;
//! y.scan(column)?;
//! assert_eq!(x, y);
//!
//! let mut z = NullUuid::from(x);
//! z.scan(SqlValue::Null)?;
//! assert_eq!(z, NullUuid::NULL);
//! # Ok::<(), uuid45::Error>(())
//! ```

use crate::{
    codec::{decode_binary, decode_text, Operation},
    Error, Uuid,
};

/// A column value as exchanged with a database driver.
#[derive(Clone, PartialEq, Debug)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Byte string.
    Bytes(Vec<u8>),
    /// Character string.
    Text(String),
    /// A value the driver has already decoded into a UUID.
    Uuid(Uuid),
}

impl SqlValue {
    /// Returns the name of the value's kind as used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::Uuid(_) => "uuid",
        }
    }
}

impl From<Uuid> for SqlValue {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<String> for SqlValue {
    fn from(src: String) -> Self {
        Self::Text(src)
    }
}

impl From<&str> for SqlValue {
    fn from(src: &str) -> Self {
        Self::Text(src.to_owned())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl From<i64> for SqlValue {
    fn from(src: i64) -> Self {
        Self::Int(src)
    }
}

impl From<f64> for SqlValue {
    fn from(src: f64) -> Self {
        Self::Float(src)
    }
}

impl From<bool> for SqlValue {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(src: Option<T>) -> Self {
        src.map_or(Self::Null, Into::into)
    }
}

/// Converts a value into the form written to a database column.
pub trait Valuer {
    /// Returns the column value.
    fn value(&self) -> SqlValue;
}

/// Reads a value back from a database column.
pub trait Scanner {
    /// Replaces `self` with the value decoded from `src`.
    ///
    /// On error, `self` is left unchanged.
    fn scan(&mut self, src: SqlValue) -> Result<(), Error>;
}

impl Valuer for Uuid {
    /// Returns the canonical string representation; raw bytes are never written.
    fn value(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }
}

impl Scanner for Uuid {
    /// Decodes `src` with the following rules:
    ///
    /// - A typed UUID is copied as is.
    /// - A byte string is the raw binary form and must be exactly 16 bytes long.
    /// - A character string is any accepted textual form.
    /// - NULL, an empty byte string, and an empty character string leave `self` unchanged.
    /// - A Nil result and any other kind of value are errors.
    fn scan(&mut self, src: SqlValue) -> Result<(), Error> {
        *self = match src {
            SqlValue::Uuid(uuid) => uuid,
            SqlValue::Null => return Ok(()),
            SqlValue::Bytes(bytes) if bytes.is_empty() => return Ok(()),
            SqlValue::Text(text) if text.is_empty() => return Ok(()),
            SqlValue::Bytes(bytes) => decode_binary(Operation::Scan, &bytes)?,
            SqlValue::Text(text) => decode_text(Operation::Scan, &text)?,
            other => {
                tracing::debug!(type_name = other.type_name(), "rejected UUID column type");
                return Err(Error::UnsupportedType {
                    op: Operation::Scan,
                    type_name: other.type_name(),
                });
            }
        };
        Ok(())
    }
}

/// A UUID that may be absent, mapping to a nullable column or a JSON `null`.
///
/// When `valid` is `false`, `uuid` is conventionally [`Uuid::NIL`] and every external
/// representation is NULL.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NullUuid {
    /// The UUID, meaningful only if `valid` is `true`.
    pub uuid: Uuid,
    /// Whether `uuid` holds a value.
    pub valid: bool,
}

impl NullUuid {
    /// The absent value.
    pub const NULL: Self = Self {
        uuid: Uuid::NIL,
        valid: false,
    };

    /// Creates a present value.
    pub const fn new(uuid: Uuid) -> Self {
        Self { uuid, valid: true }
    }

    /// Returns the UUID if present.
    pub const fn get(&self) -> Option<Uuid> {
        if self.valid {
            Some(self.uuid)
        } else {
            None
        }
    }
}

impl From<Uuid> for NullUuid {
    fn from(src: Uuid) -> Self {
        Self::new(src)
    }
}

impl From<Option<Uuid>> for NullUuid {
    fn from(src: Option<Uuid>) -> Self {
        src.map_or(Self::NULL, Self::new)
    }
}

impl From<NullUuid> for Option<Uuid> {
    fn from(src: NullUuid) -> Self {
        src.get()
    }
}

impl Valuer for NullUuid {
    fn value(&self) -> SqlValue {
        match self.get() {
            Some(uuid) => uuid.value(),
            None => SqlValue::Null,
        }
    }
}

impl Scanner for NullUuid {
    /// Resets `self` to [`NullUuid::NULL`] on SQL NULL; otherwise marks `self` valid and decodes
    /// `src` as [`Uuid::scan`](Scanner::scan) does.
    fn scan(&mut self, src: SqlValue) -> Result<(), Error> {
        if matches!(src, SqlValue::Null) {
            *self = Self::NULL;
            return Ok(());
        }

        let mut uuid = self.uuid;
        uuid.scan(src)?;
        *self = Self::new(uuid);
        Ok(())
    }
}
