//! Runtime values accepted by rules
//!
//! Validators never see arbitrary Rust types. Every value is classified once,
//! at the rule boundary, into the closed set of shapes below. Quantity and
//! zero checks are then exhaustive matches over [`Value`].
//!
//! # Examples
//!
//! ```
//! use tavern_validator::value::{Value, ValueKind};
//!
//! assert_eq!(Value::from("abc").kind(), ValueKind::String);
//! assert_eq!(Value::from(42u8).kind(), ValueKind::Uint);
//! assert_eq!(Value::from(vec!["a", "b"]).kind(), ValueKind::Sequence);
//! assert_eq!(Value::from(None::<i32>).kind(), ValueKind::Null);
//! ```

use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// VALUE
// ============================================================================

/// A value under validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// UTF-8 text.
    String(String),
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    Uint(u64),
    /// Floating point number of any width.
    Float(f64),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Ordered collection.
    Sequence(Vec<Value>),
    /// Keyed collection.
    Map(BTreeMap<String, Value>),
}

/// The shape of a [`Value`], without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::String`]
    String,
    /// [`Value::Int`]
    Int,
    /// [`Value::Uint`]
    Uint,
    /// [`Value::Float`]
    Float,
    /// [`Value::Bytes`]
    Bytes,
    /// [`Value::Sequence`]
    Sequence,
    /// [`Value::Map`]
    Map,
}

impl ValueKind {
    /// Returns the lowercase name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Uint => "uint",
            ValueKind::Float => "float",
            ValueKind::Bytes => "bytes",
            ValueKind::Sequence => "sequence",
            ValueKind::Map => "map",
        }
    }

    /// Returns true for `Int`, `Uint` and `Float`.
    pub const fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Uint | ValueKind::Float)
    }

    /// Returns true for kinds whose size is an element or character count.
    pub const fn is_countable(self) -> bool {
        matches!(
            self,
            ValueKind::String | ValueKind::Bytes | ValueKind::Sequence | ValueKind::Map
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Uint(_) => ValueKind::Uint,
            Value::Float(_) => ValueKind::Float,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Wraps raw bytes.
    ///
    /// `Vec<u8>` converts to a sequence of integers through `From`, so byte
    /// buffers need this explicit constructor.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Returns the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn from(v: $source) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint as u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    #[inline]
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<char> for Value {
    #[inline]
    fn from(v: char) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::Sequence(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(v: BTreeMap<String, T>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    /// Classifies a parsed JSON document.
    ///
    /// Numbers become `Int` when they fit in `i64`, then `Uint`, then `Float`.
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_integer_widths_collapse() {
        assert_eq!(Value::from(-3i8), Value::Int(-3));
        assert_eq!(Value::from(7isize), Value::Int(7));
        assert_eq!(Value::from(255u8), Value::Uint(255));
        assert_eq!(Value::from(9usize), Value::Uint(9));
    }

    #[test]
    fn test_collections() {
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::Sequence(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(Value::from([1, 2, 3]).kind(), ValueKind::Sequence);
        assert_eq!(Value::from(&[1u8, 2][..]).kind(), ValueKind::Sequence);
        assert_eq!(Value::bytes(b"abc".to_vec()).kind(), ValueKind::Bytes);

        let mut map = BTreeMap::new();
        map.insert("k".to_owned(), 1);
        assert_eq!(Value::from(map).kind(), ValueKind::Map);
    }

    #[test]
    fn test_option() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({
            "name": "alice",
            "age": 30,
            "big": u64::MAX,
            "score": 1.5,
            "tags": ["a"],
            "nick": null,
        }));

        let Value::Map(map) = value else {
            panic!("expected a map");
        };
        assert_eq!(map["name"], Value::from("alice"));
        assert_eq!(map["age"], Value::Int(30));
        assert_eq!(map["big"], Value::Uint(u64::MAX));
        assert_eq!(map["score"], Value::Float(1.5));
        assert_eq!(map["tags"].kind(), ValueKind::Sequence);
        assert_eq!(map["nick"], Value::Null);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ValueKind::Float.is_numeric());
        assert!(!ValueKind::String.is_numeric());
        assert!(ValueKind::Map.is_countable());
        assert!(!ValueKind::Bool.is_countable());
    }
}
