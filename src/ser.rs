//! GGON serialization.
//!
//! Encoding happens in two steps:
//!
//! 1. [`ValueSerializer`] classifies any `T: Serialize` into a [`Value`] tree.
//!    This is where GGON's type rules live: strings and maps pass through,
//!    numbers are only accepted when numeric coercion is on, sequences become
//!    list-convention maps, and booleans, unit and `None` are rejected.
//! 2. [`Serializer`] writes a [`Value`] tree as text, choosing between bareword
//!    and quoted form for each string and, with list syntax enabled, between
//!    brace and bracket form for each map.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_ggon::{to_string, to_string_with_options, GgonOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player { name: String, class: String }
//!
//! let player = Player { name: "Bob Q".to_string(), class: "scout".to_string() };
//! assert_eq!(to_string(&player).unwrap(), "{name:'Bob Q',class:scout}");
//!
//! let options = GgonOptions::lists().with_number_as_string(true);
//! assert_eq!(to_string_with_options(&vec![1, 2], &options).unwrap(), "[1,2]");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_ggon::{decode, GgonOptions, Serializer};
//!
//! let value = decode("{ 'a b' : 'c' }").unwrap();
//! let mut serializer = Serializer::new(GgonOptions::new());
//! serializer.serialize_value(&value);
//! assert_eq!(serializer.into_inner(), "{'a b':c}");
//! ```

use crate::list::{list_items, list_to_map};
use crate::token::is_plain_safe;
use crate::{Error, GgonMap, GgonOptions, Result, Value};
use serde::{ser, Serialize};

/// Writes [`Value`] trees as GGON text.
pub struct Serializer {
    output: String,
    options: GgonOptions,
}

impl Serializer {
    /// Creates a serializer with an empty output buffer. Only
    /// `options.list_syntax` affects writing.
    pub fn new(options: GgonOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Consumes the serializer and returns the text written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the encoding of `value` to the output.
    pub fn serialize_value(&mut self, value: &Value) {
        match value {
            Value::String(s) => self.write_string(s),
            Value::Map(map) => {
                let items = if self.options.list_syntax {
                    list_items(map)
                } else {
                    None
                };
                match items {
                    Some(items) => self.write_list(&items),
                    None => self.write_map(map),
                }
            }
        }
    }

    fn write_string(&mut self, s: &str) {
        if is_plain_safe(s) {
            self.output.push_str(s);
            return;
        }

        self.output.push('\'');
        for ch in s.chars() {
            match ch {
                '\'' => self.output.push_str("\\'"),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\0' => self.output.push_str("\\0"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('\'');
    }

    fn write_map(&mut self, map: &GgonMap) {
        self.output.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_string(key);
            self.output.push(':');
            self.serialize_value(value);
        }
        self.output.push('}');
    }

    fn write_list(&mut self, items: &[&Value]) {
        self.output.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.serialize_value(item);
        }
        self.output.push(']');
    }
}

/// Classifies Rust values into GGON [`Value`] trees.
///
/// `number_as_string` decides whether integers and floats are accepted (as
/// their decimal string form) or rejected with [`Error::Encode`]. Map keys
/// are always classified with coercion on.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueSerializer {
    number_as_string: bool,
}

impl ValueSerializer {
    /// Creates a classifier; `number_as_string` turns on numeric coercion.
    pub fn new(number_as_string: bool) -> Self {
        ValueSerializer { number_as_string }
    }

    fn number<N: ToString>(self, v: N, type_name: &str) -> Result<Value> {
        if self.number_as_string {
            Ok(Value::String(v.to_string()))
        } else {
            Err(unsupported(type_name))
        }
    }

    fn classify<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }
}

fn unsupported(type_name: &str) -> Error {
    Error::encode(&format!("cannot encode value of type {}", type_name))
}

fn single_entry(key: &str, value: Value) -> Value {
    let mut map = GgonMap::with_capacity(1);
    map.insert(key.to_string(), value);
    Value::Map(map)
}

pub struct SerializeVec {
    ser: ValueSerializer,
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    ser: ValueSerializer,
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    ser: ValueSerializer,
    map: GgonMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    ser: ValueSerializer,
    variant: &'static str,
    map: GgonMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, _v: bool) -> Result<Value> {
        Err(unsupported("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.number(v, "i8")
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.number(v, "i16")
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.number(v, "i32")
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        self.number(v, "i64")
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        self.number(v, "i128")
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.number(v, "u8")
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.number(v, "u16")
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.number(v, "u32")
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        self.number(v, "u64")
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        self.number(v, "u128")
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.number(v, "f32")
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        self.number(v, "f64")
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        std::str::from_utf8(v)
            .map(|s| Value::String(s.to_string()))
            .map_err(|_| Error::encode("byte string is not valid UTF-8"))
    }

    fn serialize_none(self) -> Result<Value> {
        Err(unsupported("null"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(unsupported(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(single_entry(variant, self.classify(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            ser: self,
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            ser: self,
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            ser: self,
            map: GgonMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap {
            ser: self,
            map: GgonMap::with_capacity(len),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            ser: self,
            variant,
            map: GgonMap::with_capacity(len),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(self.ser.classify(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(list_to_map(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(self.ser.classify(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(single_entry(self.variant, list_to_map(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // Keys are always strings, numeric keys included
        match key.serialize(ValueSerializer::new(true))? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            Value::Map(_) => Err(Error::encode("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, self.ser.classify(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), self.ser.classify(value)?);
        Ok(())
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), self.ser.classify(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(single_entry(self.variant, Value::Map(self.map)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn write(value: &Value, options: GgonOptions) -> String {
        let mut serializer = Serializer::new(options);
        serializer.serialize_value(value);
        serializer.into_inner()
    }

    fn classify<T: Serialize>(value: &T, number_as_string: bool) -> Result<Value> {
        value.serialize(ValueSerializer::new(number_as_string))
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(write(&Value::from("_.+-123abc"), GgonOptions::new()), "_.+-123abc");
    }

    #[test]
    fn test_empty_string_is_quoted() {
        assert_eq!(write(&Value::from(""), GgonOptions::new()), "''");
    }

    #[test]
    fn test_escapes() {
        let value = Value::from("it's a\\b\nc\rd\te\0f g");
        assert_eq!(
            write(&value, GgonOptions::new()),
            r"'it\'s a\\b\nc\rd\te\0f g'"
        );
    }

    #[test]
    fn test_non_ascii_is_quoted_verbatim() {
        assert_eq!(write(&Value::from("caf\u{e9}"), GgonOptions::new()), "'caf\u{e9}'");
    }

    #[test]
    fn test_map_keys_quoted_when_needed() {
        let mut map = GgonMap::new();
        map.insert("sub items".to_string(), Value::from("x"));
        map.insert("".to_string(), Value::from("y"));
        assert_eq!(
            write(&Value::Map(map), GgonOptions::new()),
            "{'sub items':x,'':y}"
        );
    }

    #[test]
    fn test_list_syntax_only_for_valid_lists() {
        let list = list_to_map(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(write(&list, GgonOptions::new()), "{length:2,0:a,1:b}");
        assert_eq!(write(&list, GgonOptions::lists()), "[a,b]");
        assert_eq!(write(&list_to_map(Vec::new()), GgonOptions::lists()), "[]");

        let mut gappy = GgonMap::new();
        gappy.insert("length".to_string(), Value::from("3"));
        gappy.insert("0".to_string(), Value::from("a"));
        gappy.insert("2".to_string(), Value::from("c"));
        assert_eq!(
            write(&Value::Map(gappy), GgonOptions::lists()),
            "{length:3,0:a,2:c}"
        );
    }

    #[test]
    fn test_numbers_need_coercion() {
        assert_eq!(
            classify(&42u32, false).unwrap_err(),
            Error::encode("cannot encode value of type u32")
        );
        assert_eq!(classify(&42u32, true).unwrap(), Value::from("42"));
        assert_eq!(classify(&-1.5f64, true).unwrap(), Value::from("-1.5"));
        assert_eq!(classify(&12.0f64, true).unwrap(), Value::from("12"));
    }

    #[test]
    fn test_numeric_keys_always_coerced() {
        let mut map = BTreeMap::new();
        map.insert(1u8, "one");
        map.insert(2u8, "two");
        let value = classify(&map, false).unwrap();
        assert_eq!(write(&value, GgonOptions::new()), "{1:one,2:two}");
    }

    #[test]
    fn test_unsupported_types() {
        assert!(classify(&true, true).is_err());
        assert!(classify(&(), true).is_err());
        assert!(classify(&Option::<String>::None, true).is_err());
        assert_eq!(
            classify(&Some("x"), false).unwrap(),
            Value::from("x")
        );
    }

    #[test]
    fn test_map_keys_must_be_strings() {
        let mut map = BTreeMap::new();
        map.insert(vec!["k".to_string()], "v");
        assert_eq!(
            classify(&map, false).unwrap_err(),
            Error::encode("map keys must be strings")
        );
    }

    #[test]
    fn test_sequences_follow_list_convention() {
        let value = classify(&vec!["a", "b"], false).unwrap();
        assert_eq!(value, list_to_map(vec![Value::from("a"), Value::from("b")]));

        let value = classify(&("x", 5), true).unwrap();
        assert_eq!(write(&value, GgonOptions::lists()), "[x,5]");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(
            ser::Serializer::serialize_bytes(ValueSerializer::new(false), b"abc").unwrap(),
            Value::from("abc")
        );
        assert!(ser::Serializer::serialize_bytes(ValueSerializer::new(false), &[0xff]).is_err());
    }
}
