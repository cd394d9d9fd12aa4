//! Default generator and entry point functions

use rand::rngs::OsRng;
use sha1::Sha1;

use crate::{generator::name_based, Error, Uuid, V4Generator};

/// Generates a UUIDv4 object. This is an alias of [`new_v4`].
pub fn new() -> Uuid {
    new_v4()
}

/// Generates a UUIDv4 object and returns its canonical string representation.
///
/// # Examples
///
/// ```rust
/// let uuid_string: String = uuid45::new_string();
/// assert_eq!(uuid_string.len(), 36);
/// ```
pub fn new_string() -> String {
    new_v4().to_string()
}

/// Generates a UUIDv4 object from the operating system's random source.
///
/// Returns [`Uuid::NIL`] if the random source fails to supply 16 bytes. Use [`try_new_v4`] to
/// receive the underlying error instead.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid45::new_v4();
/// println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn new_v4() -> Uuid {
    V4Generator::new(OsRng).generate()
}

/// Generates a UUIDv4 object from the operating system's random source, or returns an error if
/// the random source fails.
pub fn try_new_v4() -> Result<Uuid, Error> {
    Ok(V4Generator::new(OsRng).try_generate()?)
}

/// Generates a UUIDv5 object from the SHA-1 digest of `namespace` and `name`.
///
/// The result depends on the arguments only, so the same pair always yields the same UUID.
///
/// # Examples
///
/// ```rust
/// use uuid45::{new_v5, Uuid};
///
/// let uuid = new_v5(&Uuid::NAMESPACE_DNS, "example.com");
/// assert_eq!(uuid.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
/// ```
pub fn new_v5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    name_based::<Sha1>(namespace, name.as_ref(), 5)
}
