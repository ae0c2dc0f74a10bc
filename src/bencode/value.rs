use bytes::Bytes;
use std::collections::BTreeMap;
use std::fmt;

use super::dump::Dump;
use super::error::LookupError;

/// A bencode value.
///
/// Bencode has four data types: integers, byte strings, lists, and dictionaries.
/// Integers are signed 64-bit; anything wider is rejected by the decoder.
/// Dictionary keys are plain byte strings and there is no null variant: an
/// absent key is simply not in the map.
///
/// # Examples
///
/// ```
/// use bencoding::bencode::Value;
///
/// let int = Value::Integer(42);
/// let string = Value::string("hello");
/// let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let int2: Value = 42i64.into();
/// let string2: Value = "hello".into();
///
/// assert_eq!(int, int2);
/// assert_eq!(string, string2);
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys, iterated in ascending byte order.
    Dict(BTreeMap<Bytes, Value>),
}

/// The variant of a [`Value`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Bytes,
    List,
    Dict,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Bytes => "byte string",
            ValueKind::List => "list",
            ValueKind::Dict => "dictionary",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoding::bencode::Value;
    ///
    /// let value = Value::string("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    /// ```
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Creates a byte string value from raw bytes.
    pub fn bytes(b: impl Into<Bytes>) -> Self {
        Value::Bytes(b.into())
    }

    pub fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    pub fn empty_dict() -> Self {
        Value::Dict(BTreeMap::new())
    }

    /// Returns which variant this value is.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::List(_) => ValueKind::List,
            Value::Dict(_) => ValueKind::Dict,
        }
    }

    /// Returns the value as an integer, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoding::bencode::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_integer(), Some(42));
    /// assert_eq!(Value::string("hello").as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary reference, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoding::bencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// let dict = value.as_dict().unwrap();
    /// assert!(dict.contains_key(b"foo".as_slice()));
    /// ```
    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the list, if it is one.
    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    ///
    /// This avoids cloning the dictionary when you need ownership.
    pub fn into_dict(self) -> Option<BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns `None` if the value is not a dictionary or if the key is not present.
    /// Use [`Value::field`] when the caller needs to know which of the two happened.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoding::bencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Looks up a dictionary entry, reporting a missing key or a non-dictionary value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoding::bencode::{decode, LookupError};
    ///
    /// let value = decode(b"d4:infod6:lengthi1024eee").unwrap();
    /// let length = value.field(b"info")?.field(b"length")?.require_integer()?;
    /// assert_eq!(length, 1024);
    ///
    /// assert_eq!(
    ///     value.field(b"announce"),
    ///     Err(LookupError::MissingKey("announce".into()))
    /// );
    /// # Ok::<(), LookupError>(())
    /// ```
    pub fn field(&self, key: &[u8]) -> Result<&Value, LookupError> {
        self.require_dict()?
            .get(key)
            .ok_or_else(|| LookupError::MissingKey(String::from_utf8_lossy(key).into_owned()))
    }

    /// Returns the list element at `index`, reporting a short list or a non-list value.
    pub fn index(&self, index: usize) -> Result<&Value, LookupError> {
        let list = self.require_list()?;
        list.get(index).ok_or(LookupError::IndexOutOfBounds {
            index,
            len: list.len(),
        })
    }

    pub fn require_integer(&self) -> Result<i64, LookupError> {
        self.as_integer().ok_or_else(|| self.wrong_type(ValueKind::Integer))
    }

    pub fn require_bytes(&self) -> Result<&Bytes, LookupError> {
        self.as_bytes().ok_or_else(|| self.wrong_type(ValueKind::Bytes))
    }

    /// Like [`Value::require_bytes`], but also requires the bytes to be UTF-8.
    pub fn require_str(&self) -> Result<&str, LookupError> {
        let bytes = self.require_bytes()?;
        std::str::from_utf8(bytes).map_err(|_| LookupError::InvalidUtf8)
    }

    pub fn require_list(&self) -> Result<&Vec<Value>, LookupError> {
        self.as_list().ok_or_else(|| self.wrong_type(ValueKind::List))
    }

    pub fn require_dict(&self) -> Result<&BTreeMap<Bytes, Value>, LookupError> {
        self.as_dict().ok_or_else(|| self.wrong_type(ValueKind::Dict))
    }

    /// Inserts an entry into a dictionary value, returning the previous value for the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoding::bencode::{encode, Value};
    ///
    /// let mut info = Value::empty_dict();
    /// info.insert("name", "example.txt")?;
    /// info.insert("length", 1024i64)?;
    /// assert_eq!(encode(&info), b"d6:lengthi1024e4:name11:example.txte");
    /// # Ok::<(), bencoding::bencode::LookupError>(())
    /// ```
    pub fn insert(
        &mut self,
        key: impl AsRef<[u8]>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, LookupError> {
        match self {
            Value::Dict(d) => Ok(d.insert(Bytes::copy_from_slice(key.as_ref()), value.into())),
            other => Err(other.wrong_type(ValueKind::Dict)),
        }
    }

    /// Appends an element to a list value.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), LookupError> {
        match self {
            Value::List(l) => {
                l.push(value.into());
                Ok(())
            }
            other => Err(other.wrong_type(ValueKind::List)),
        }
    }

    /// Returns a [`fmt::Display`] adapter rendering this value as an indented tree.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(self)
    }

    fn wrong_type(&self, expected: ValueKind) -> LookupError {
        LookupError::WrongType {
            expected,
            found: self.kind(),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bytes(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(b))
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<Bytes, Value>> for Value {
    fn from(d: BTreeMap<Bytes, Value>) -> Self {
        Value::Dict(d)
    }
}
