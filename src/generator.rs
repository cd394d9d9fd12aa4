//! UUIDv4 generator and name-based hashing

use rand::RngCore;
use sha1::Digest;

use crate::Uuid;

/// Represents a UUIDv4 generator that draws every identifier from a wrapped random number
/// generator.
///
/// The free function [`new_v4`](crate::new_v4) uses this type with the operating system's random
/// source. Construct one directly to plug in another [`RngCore`], for example a seeded generator
/// in tests. Only cryptographically secure generators should be used for identifiers that must be
/// unguessable.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuid45::V4Generator;
///
/// let mut g = V4Generator::new(OsRng);
/// println!("{}", g.generate());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RngCore> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object, or returns [`Uuid::NIL`] if the random number generator
    /// fails.
    pub fn generate(&mut self) -> Uuid {
        self.try_generate().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "random source failed, returning nil UUID");
            Uuid::NIL
        })
    }

    /// Generates a new UUIDv4 object, or returns the error of the random number generator.
    pub fn try_generate(&mut self) -> Result<Uuid, rand::Error> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(Uuid::from(bytes).with_rfc4122_variant().with_version(4))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid45::V4Generator;
///
/// V4Generator::new(rand::thread_rng())
///     .take(4)
///     .for_each(|e| println!("{}", e));
/// ```
impl<R: RngCore> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> std::iter::FusedIterator for V4Generator<R> {}

/// Creates a name-based UUID from the digest of `namespace` followed by `name`, computed with the
/// hash algorithm `D`.
///
/// The first 16 bytes of the digest make up the body, which is then tagged with the RFC 4122
/// variant and `version`. [`new_v5`](crate::new_v5) is this function with SHA-1 and version 5.
///
/// # Examples
///
/// ```rust
/// use sha1::Sha1;
/// use uuid45::{generator::name_based, Uuid};
///
/// let x = name_based::<Sha1>(&Uuid::NAMESPACE_DNS, b"example.com", 5);
/// assert_eq!(x, uuid45::new_v5(&Uuid::NAMESPACE_DNS, "example.com"));
/// ```
pub fn name_based<D: Digest>(namespace: &Uuid, name: &[u8], version: u8) -> Uuid {
    let mut hasher = D::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    let n = digest.len().min(bytes.len());
    bytes[..n].copy_from_slice(&digest[..n]);
    Uuid::from(bytes).with_rfc4122_variant().with_version(version)
}
