//! Dynamic value representation for GGON data.
//!
//! GGON has exactly two shapes, so [`Value`] has exactly two variants:
//!
//! - [`Value::String`]: any text, including the empty string and control
//!   characters. Numbers are strings too, the format has no numeric type.
//! - [`Value::Map`]: an insertion-ordered [`GgonMap`] of string keys to values.
//!
//! Lists are not a variant. They are maps that follow the list convention
//! (see [`crate::list`]) and can be recognised with [`Value::is_list`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_ggon::{decode, Value};
//!
//! let value = decode("{name:Alice,score:'12'}").unwrap();
//! assert!(value.is_map());
//! assert_eq!(value.get("score").and_then(Value::as_str), Some("12"));
//! ```

use crate::list;
use crate::GgonMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A decoded GGON value: either a string or an ordered map.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{GgonMap, Value};
///
/// let text = Value::from("hello");
/// let map = Value::Map(GgonMap::new());
///
/// assert!(text.is_string());
/// assert!(map.is_map());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    String(String),
    Map(GgonMap),
}

impl Value {
    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ggon::{GgonMap, Value};
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::Map(GgonMap::new()).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Map(_) => None,
        }
    }

    /// If the value is a map, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&GgonMap> {
        match self {
            Value::Map(map) => Some(map),
            Value::String(_) => None,
        }
    }

    /// If the value is a map, returns a mutable reference to it.
    #[inline]
    pub fn as_map_mut(&mut self) -> Option<&mut GgonMap> {
        match self {
            Value::Map(map) => Some(map),
            Value::String(_) => None,
        }
    }

    /// Looks up `key` if the value is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Returns `true` if the value is a map that follows the list convention.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ggon::{decode, list_to_map, Value};
    ///
    /// assert!(list_to_map(vec![Value::from("a")]).is_list());
    /// assert!(!decode("{length:3,0:a,1:b}").unwrap().is_list());
    /// ```
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.as_list().is_some()
    }

    /// Returns the items of a well-formed list, in index order.
    ///
    /// Returns `None` for strings and for maps that are not well-formed lists
    /// (missing or non-canonical `length`, gaps, or extra keys).
    #[must_use]
    pub fn as_list(&self) -> Option<Vec<&Value>> {
        self.as_map().and_then(list::list_items)
    }
}

impl fmt::Display for Value {
    /// Writes the value as minimal (brace-only) GGON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode(self))
    }
}

impl FromStr for Value {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        crate::decode(s)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Map(map) => {
                use serde::ser::SerializeMap;
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number, map or sequence")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(list::list_to_map(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = GgonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Map(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            Value::Map(_) => Err(crate::Error::custom("expected string, found map")),
        }
    }
}

impl TryFrom<Value> for GgonMap {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Map(map) => Ok(map),
            Value::String(s) => Err(crate::Error::custom(format!(
                "expected map, found string {:?}",
                s
            ))),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<GgonMap> for Value {
    fn from(value: GgonMap) -> Self {
        Value::Map(value)
    }
}

// Numbers become their decimal string form
macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::String(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Vec<Value>> for Value {
    /// Builds a list-convention map from the items.
    fn from(value: Vec<Value>) -> Self {
        list::list_to_map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from('x'), Value::String("x".to_string()));
        assert_eq!(Value::from(-5i32), Value::String("-5".to_string()));
        assert_eq!(Value::from(42usize), Value::String("42".to_string()));
        assert_eq!(Value::from(13.5f64), Value::String("13.5".to_string()));
    }

    #[test]
    fn test_from_vec_is_list() {
        let value = Value::from(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(value.get("length").and_then(Value::as_str), Some("2"));
        assert_eq!(value.get("1").and_then(Value::as_str), Some("b"));
        assert!(value.is_list());
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(String::try_from(Value::from("s")).unwrap(), "s");
        assert!(String::try_from(Value::Map(GgonMap::new())).is_err());
        assert!(GgonMap::try_from(Value::Map(GgonMap::new())).is_ok());
        assert!(GgonMap::try_from(Value::from("s")).is_err());
    }

    #[test]
    fn test_as_map_mut() {
        let mut value = Value::Map(GgonMap::new());
        if let Some(map) = value.as_map_mut() {
            map.insert("k".to_string(), Value::from("v"));
        }
        assert_eq!(value.get("k"), Some(&Value::from("v")));
        assert!(Value::from("s").as_map_mut().is_none());
    }

    #[test]
    fn test_get_on_string() {
        assert_eq!(Value::from("abc").get("a"), None);
        assert!(!Value::from("abc").is_list());
    }

    #[test]
    fn test_display_and_from_str() {
        let value: Value = "{foo:'bar baz'}".parse().unwrap();
        assert_eq!(value.to_string(), "{foo:'bar baz'}");
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_string(v: &Value) -> bool {
            v.is_string()
        }

        assert!(check_string(&Value::from("x")));
        assert!(!Value::from("x").is_map());
    }
}
