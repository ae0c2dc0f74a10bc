//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format BitTorrent uses for `.torrent` files
//! and tracker responses. This module turns raw bytes into a [`Value`] tree
//! and back, and can render a tree for debugging.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Integers are signed 64-bit. Byte strings are raw bytes and are never
//! required to be UTF-8.
//!
//! # Examples
//!
//! ## Decoding
//!
//! ```
//! use bencoding::bencode::{decode, Value};
//!
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//! assert_eq!(list[1], Value::Integer(42));
//!
//! let value = decode(b"d3:foo3:bare").unwrap();
//! assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
//! ```
//!
//! ## Encoding
//!
//! ```
//! use bencoding::bencode::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! let mut info = BTreeMap::new();
//! info.insert(Bytes::from_static(b"piece length"), Value::Integer(16384));
//! info.insert(Bytes::from_static(b"name"), Value::string("example.txt"));
//! info.insert(Bytes::from_static(b"length"), Value::Integer(1024));
//!
//! let encoded = encode(&Value::Dict(info));
//! assert_eq!(
//!     encoded,
//!     b"d6:lengthi1024e4:name11:example.txt12:piece lengthi16384ee"
//! );
//! ```
//!
//! ## Navigating a decoded document
//!
//! ```
//! use bencoding::bencode::{decode, LookupError, ValueKind};
//!
//! let torrent = decode(b"d8:announce9:http://t/4:infod4:name1:aee").unwrap();
//! assert_eq!(torrent.field(b"announce")?.require_str()?, "http://t/");
//! assert_eq!(
//!     torrent.field(b"info")?.field(b"name")?.require_integer(),
//!     Err(LookupError::WrongType { expected: ValueKind::Integer, found: ValueKind::Bytes })
//! );
//! # Ok::<(), LookupError>(())
//! ```
//!
//! # Error Handling
//!
//! Decoding reports the first problem found, with its byte offset:
//!
//! - [`BencodeError::EmptyInput`] - No bytes where a value was expected
//! - [`BencodeError::UnexpectedEof`] - Input ended inside a string length
//! - [`BencodeError::InvalidFormat`] - Malformed token (bad integer, missing `e`, ...)
//! - [`BencodeError::InvalidLength`] - String length exceeds the remaining input
//! - [`BencodeError::UnsupportedType`] - Byte that cannot start a value
//! - [`BencodeError::NestingTooDeep`] - Nesting limit exceeded (64 levels by default)
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod dump;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_at, DecodeOptions, Decoder};
pub use dump::{dump, dump_into, Dump};
pub use encode::{encode, encode_into};
pub use error::{BencodeError, EncodeError, LookupError};
pub use value::{Value, ValueKind};
