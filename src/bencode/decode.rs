use super::error::BencodeError;
use super::value::Value;
use crate::constants::DEFAULT_MAX_DEPTH;
use bytes::Bytes;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Limits and policies applied while decoding.
///
/// # Examples
///
/// ```
/// use bencoding::bencode::{DecodeOptions, Decoder};
///
/// let decoder = Decoder::new(DecodeOptions::default().with_trailing_data(true));
/// let value = decoder.decode(b"i42eextra").unwrap();
/// assert_eq!(value.as_integer(), Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested lists and dictionaries.
    pub max_depth: usize,
    /// Whether [`Decoder::decode`] ignores bytes after the top-level value.
    pub allow_trailing: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }
}

impl DecodeOptions {
    /// Sets the nesting limit.
    ///
    /// Decoding recurses once per level, so very large limits trade the
    /// `NestingTooDeep` error for stack usage.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trailing_data(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }
}

/// A configured bencode decoder.
///
/// The decoder holds no state between calls and can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes exactly one value from the start of `data`.
    ///
    /// Bytes after the value are rejected with [`BencodeError::TrailingData`]
    /// unless the decoder was built with `allow_trailing`.
    pub fn decode(&self, data: &[u8]) -> Result<Value, BencodeError> {
        let (value, end) = self.decode_at(data, 0)?;

        if end != data.len() {
            if !self.options.allow_trailing {
                return Err(BencodeError::TrailingData { offset: end });
            }
            trace!(trailing = data.len() - end, "ignoring data after value");
        }

        Ok(value)
    }

    /// Decodes one value starting at `offset`, returning it together with the
    /// offset one past its last byte. Trailing bytes are never an error here.
    pub fn decode_at(&self, data: &[u8], offset: usize) -> Result<(Value, usize), BencodeError> {
        let mut pos = offset;
        let value = self.decode_value(data, &mut pos, 0)?;
        Ok((value, pos))
    }

    fn decode_value(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        if *pos >= data.len() {
            return Err(BencodeError::EmptyInput { offset: *pos });
        }

        match data[*pos] {
            b'i' => decode_integer(data, pos),
            b'l' => self.decode_list(data, pos, depth),
            b'd' => self.decode_dict(data, pos, depth),
            b'0'..=b'9' => decode_bytes(data, pos).map(Value::Bytes),
            byte => Err(BencodeError::UnsupportedType { offset: *pos, byte }),
        }
    }

    fn enter_container(&self, offset: usize, depth: usize) -> Result<(), BencodeError> {
        if depth >= self.options.max_depth {
            debug!(
                offset,
                max_depth = self.options.max_depth,
                "bencode nesting limit exceeded"
            );
            return Err(BencodeError::NestingTooDeep {
                offset,
                max_depth: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn decode_list(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        self.enter_container(*pos, depth)?;
        *pos += 1;
        let mut list = Vec::new();

        while *pos < data.len() && data[*pos] != b'e' {
            list.push(self.decode_value(data, pos, depth + 1)?);
        }

        if *pos >= data.len() {
            return Err(BencodeError::InvalidFormat {
                offset: *pos,
                reason: "unterminated list",
            });
        }

        *pos += 1;
        Ok(Value::List(list))
    }

    fn decode_dict(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        self.enter_container(*pos, depth)?;
        *pos += 1;
        let mut dict = BTreeMap::new();

        while *pos < data.len() && data[*pos] != b'e' {
            let key_offset = *pos;
            if !data[*pos].is_ascii_digit() {
                return Err(BencodeError::InvalidFormat {
                    offset: key_offset,
                    reason: "dictionary key must be a byte string",
                });
            }
            let key = decode_bytes(data, pos)?;

            match data.get(*pos) {
                None => {
                    return Err(BencodeError::InvalidFormat {
                        offset: *pos,
                        reason: "unterminated dictionary",
                    })
                }
                Some(b'e') => {
                    return Err(BencodeError::InvalidFormat {
                        offset: *pos,
                        reason: "dictionary key without value",
                    })
                }
                Some(_) => {}
            }

            let value = self.decode_value(data, pos, depth + 1)?;
            if dict.insert(key, value).is_some() {
                trace!(offset = key_offset, "duplicate dictionary key, keeping last value");
            }
        }

        if *pos >= data.len() {
            return Err(BencodeError::InvalidFormat {
                offset: *pos,
                reason: "unterminated dictionary",
            });
        }

        *pos += 1;
        Ok(Value::Dict(dict))
    }
}

/// Decodes a single bencode value that must span all of `data`.
///
/// Uses [`DecodeOptions::default`]: nesting is limited to
/// [`DEFAULT_MAX_DEPTH`](crate::constants::DEFAULT_MAX_DEPTH) levels and
/// trailing bytes are rejected.
///
/// # Examples
///
/// ```
/// use bencoding::bencode::{decode, BencodeError, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
/// assert!(matches!(decode(b"x"), Err(BencodeError::UnsupportedType { byte: b'x', .. })));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    Decoder::default().decode(data)
}

/// Decodes one value starting at `offset` with default limits, returning the
/// value and the offset just past it.
///
/// # Examples
///
/// ```
/// use bencoding::bencode::decode_at;
///
/// let data = b"i1e4:spam";
/// let (first, next) = decode_at(data, 0).unwrap();
/// let (second, end) = decode_at(data, next).unwrap();
/// assert_eq!(first.as_integer(), Some(1));
/// assert_eq!(second.as_str(), Some("spam"));
/// assert_eq!(end, data.len());
/// ```
pub fn decode_at(data: &[u8], offset: usize) -> Result<(Value, usize), BencodeError> {
    Decoder::default().decode_at(data, offset)
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let start = *pos;
    let digits_start = start + 1;

    let end = match data[digits_start..].iter().position(|&b| b == b'e') {
        Some(i) => digits_start + i,
        None => {
            return Err(BencodeError::InvalidFormat {
                offset: start,
                reason: "unterminated integer",
            })
        }
    };

    let value = parse_integer(&data[digits_start..end])
        .map_err(|reason| BencodeError::InvalidFormat { offset: start, reason })?;

    *pos = end + 1;
    Ok(Value::Integer(value))
}

fn parse_integer(raw: &[u8]) -> Result<i64, &'static str> {
    let digits = raw.strip_prefix(b"-").unwrap_or(raw);

    if digits.is_empty() {
        return Err("empty integer");
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err("non-digit in integer");
    }
    if digits[0] == b'0' && digits.len() > 1 {
        return Err("leading zeros");
    }
    if digits == b"0" && digits.len() != raw.len() {
        return Err("negative zero");
    }

    // all bytes are ASCII at this point
    std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or("integer out of range")
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<Bytes, BencodeError> {
    let start = *pos;
    let mut len = Some(0usize);

    while *pos < data.len() && data[*pos].is_ascii_digit() {
        let digit = usize::from(data[*pos] - b'0');
        len = len
            .and_then(|l| l.checked_mul(10))
            .and_then(|l| l.checked_add(digit));
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof { offset: *pos });
    }

    if data[*pos] != b':' {
        return Err(BencodeError::InvalidFormat {
            offset: *pos,
            reason: "expected ':' after string length",
        });
    }

    *pos += 1;

    let len = len.ok_or(BencodeError::InvalidLength { offset: start })?;
    if len > data.len() - *pos {
        return Err(BencodeError::InvalidLength { offset: start });
    }

    let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;

    Ok(bytes)
}
