//! An RFC 4122 UUID value type with version 4 and version 5 generation
//!
//! ```rust
//! use uuid45::{new_v4, new_v5, Uuid};
//!
//! let uuid = new_v4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = new_v5(&Uuid::NAMESPACE_DNS, "example.com");
//! assert_eq!(uuid.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Generated identifiers carry two fixed fields; all other bits come from the random number
//! generator (version 4) or from the SHA-1 digest of a namespace and a name (version 5):
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            random             |  ver  |        random         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0100` (version 4) or `0101` (version 5).
//! - The 2-bit `var` field is set at `10`.
//!
//! Parsing accepts any 128-bit value regardless of its version and variant.
//!
//! # Parsing and the Nil sentinel
//!
//! [`parse()`] is a total function that returns [`Uuid::NIL`] for malformed input, and [`new_v4`]
//! returns Nil if the random source fails. Since the all-zero UUID is also a valid value, the
//! `Result`-returning counterparts [`Uuid::try_parse`], [`Uuid::try_from_slice`], and
//! [`try_new_v4`] are provided for callers that need to tell the two apart.
//!
//! ```rust
//! use uuid45::{parse, Uuid};
//!
//! assert_eq!(parse("not a uuid"), Uuid::NIL);
//! assert!(Uuid::try_parse("not a uuid").is_err());
//! assert_eq!(Uuid::try_parse("00000000-0000-0000-0000-000000000000"), Ok(Uuid::NIL));
//! ```
//!
//! # Boundary codecs
//!
//! - Text and binary: [`Uuid::marshal_text`], [`Uuid::unmarshal_text`],
//!   [`Uuid::marshal_binary`], [`Uuid::unmarshal_binary`].
//! - JSON and other serde formats: `Serialize` and `Deserialize` with the `serde` feature.
//! - SQL drivers: [`Valuer`] and [`Scanner`] over [`SqlValue`].
//!
//! Inbound codecs treat a Nil result as an error, whether the input was malformed or decoded to
//! the all-zero value. [`NullUuid`] represents an optional UUID at those boundaries.
//!
//! # Crate features
//!
//! - `serde` (default): serde support for [`Uuid`] and [`NullUuid`].
//! - `uuid`: conversions from and into [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{equal, ParseError, Uuid, Variant};

mod parse;
pub use parse::{is_valid, parse, Input};

pub mod generator;
pub use generator::V4Generator;

mod entry;
pub use entry::{new, new_string, new_v4, new_v5, try_new_v4};

mod codec;
pub use codec::{Error, Operation};

mod sql;
pub use sql::{NullUuid, Scanner, SqlValue, Valuer};

mod serde_support;
