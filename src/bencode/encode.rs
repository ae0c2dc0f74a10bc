use super::error::EncodeError;
use super::value::Value;
use std::io::Write;

/// Encodes a bencode value to a byte vector.
///
/// The output is canonical:
/// - Integers: `i<number>e`, no leading zeros, `0` as `i0e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`, in order
/// - Dictionaries: `d<key><value>...e`, keys in ascending byte order
///
/// Two dictionaries holding the same entries always encode to identical bytes,
/// no matter how they were built or in what order the source document listed
/// their keys. Integers are 64-bit, so there is no overflow path and encoding
/// into memory cannot fail.
///
/// # Examples
///
/// ```
/// use bencoding::bencode::{decode, encode, Value};
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// // Out-of-order keys are sorted on the way out
/// let value = decode(b"d4:spam4:eggs3:cow3:mooe").unwrap();
/// assert_eq!(encode(&value), b"d3:cow3:moo4:spam4:eggse");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    write_value(value, &mut buf);
    buf
}

/// Encodes a bencode value into any writer.
///
/// # Errors
///
/// Returns [`EncodeError::Io`] if the writer fails.
pub fn encode_into<W: Write>(value: &Value, writer: &mut W) -> Result<(), EncodeError> {
    let mut buf = Vec::new();
    write_value(value, &mut buf);
    writer.write_all(&buf)?;
    Ok(())
}

fn write_value(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => {
            buf.push(b'i');
            buf.extend_from_slice(i.to_string().as_bytes());
            buf.push(b'e');
        }
        Value::Bytes(b) => write_bytes(b, buf),
        Value::List(l) => {
            buf.push(b'l');
            for item in l {
                write_value(item, buf);
            }
            buf.push(b'e');
        }
        Value::Dict(d) => {
            buf.push(b'd');
            // BTreeMap<Bytes, _> iterates in byte-wise key order
            for (key, val) in d {
                write_bytes(key, buf);
                write_value(val, buf);
            }
            buf.push(b'e');
        }
    }
}

fn write_bytes(bytes: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(bytes.len().to_string().as_bytes());
    buf.push(b':');
    buf.extend_from_slice(bytes);
}
