//! Indented, human-readable rendering of a value tree.
//!
//! The output is for logs and debugging only. It cannot be parsed back.

use super::value::Value;
use crate::constants::DUMP_INDENT;
use std::fmt::{self, Write};

/// Display adapter returned by [`Value::dump`].
///
/// # Examples
///
/// ```
/// use bencoding::bencode::decode;
///
/// let value = decode(b"d3:cow3:moo4:listli1e0:ee").unwrap();
/// assert_eq!(
///     value.dump().to_string(),
///     "{\n  \"cow\": \"moo\"\n  \"list\": [\n    1\n    \"\"\n  ]\n}"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    value: &'a Value,
}

impl<'a> Dump<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump_into(self.value, f)
    }
}

/// Renders `value` as an indented tree.
pub fn dump(value: &Value) -> String {
    let mut out = String::new();
    // writing into a String never fails
    let _ = dump_into(value, &mut out);
    out
}

/// Renders `value` into any [`fmt::Write`] sink.
pub fn dump_into<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    write_value(value, out, 0)
}

fn write_value<W: Write>(value: &Value, out: &mut W, level: usize) -> fmt::Result {
    match value {
        Value::Integer(i) => write!(out, "{}", i),
        Value::Bytes(b) => write_quoted(b, out),
        Value::List(l) if l.is_empty() => out.write_str("[]"),
        Value::List(l) => {
            out.write_str("[\n")?;
            for item in l {
                write_indent(out, level + 1)?;
                write_value(item, out, level + 1)?;
                out.write_char('\n')?;
            }
            write_indent(out, level)?;
            out.write_char(']')
        }
        Value::Dict(d) if d.is_empty() => out.write_str("{}"),
        Value::Dict(d) => {
            out.write_str("{\n")?;
            for (key, val) in d {
                write_indent(out, level + 1)?;
                write_quoted(key, out)?;
                out.write_str(": ")?;
                write_value(val, out, level + 1)?;
                out.write_char('\n')?;
            }
            write_indent(out, level)?;
            out.write_char('}')
        }
    }
}

fn write_quoted<W: Write>(bytes: &[u8], out: &mut W) -> fmt::Result {
    write!(out, "\"{}\"", bytes.escape_ascii())
}

fn write_indent<W: Write>(out: &mut W, level: usize) -> fmt::Result {
    write!(out, "{:width$}", "", width = level * DUMP_INDENT)
}
