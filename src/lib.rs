//! bencoding - Bencode codec for BitTorrent metadata
//!
//! Decodes the length-prefixed bencode format into a [`Value`] tree, encodes
//! trees back into canonical bytes, and renders them for debugging. The codec
//! does no I/O: callers hand it a complete buffer and get a fresh tree back.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode decoding, canonical encoding and debug dumps
//! - [`constants`] - Default limits used by the codec
//!
//! # Example
//!
//! ```
//! use bencoding::{decode, encode};
//!
//! let value = decode(b"d4:spam4:eggs3:cow3:mooe")?;
//! assert_eq!(value.field(b"cow")?.require_str()?, "moo");
//! assert_eq!(encode(&value), b"d3:cow3:moo4:spam4:eggse");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bencode;
pub mod constants;

pub use bencode::{
    decode, decode_at, dump, encode, BencodeError, DecodeOptions, Decoder, LookupError, Value,
};
