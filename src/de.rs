//! GGON deserialization.
//!
//! Decoding text always yields a [`Value`] that is either a string or a map.
//! The [`Deserializer`] here bridges that tree into Rust types:
//!
//! - numeric types are parsed from their string form (`'12'` and `12` both
//!   give `12u32`, GGON does not tell them apart)
//! - sequences, tuples and tuple variants are read from list-convention maps
//! - structs and maps are read from maps, in document order
//! - enums are read from a bare variant name or a single-entry map
//! - `Option<T>` is always `Some`; a missing struct field becomes `None`
//!
//! ## Usage
//!
//! ```rust
//! use serde_ggon::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Spawn { x: f32, y: f32, team: String }
//!
//! let spawn: Spawn = from_str("{x:12.0,y:'13.5',team:red}").unwrap();
//! assert_eq!(spawn, Spawn { x: 12.0, y: 13.5, team: "red".to_string() });
//! ```

use crate::list::into_list;
use crate::{Error, GgonMap, GgonOptions, Result, Value};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializes Rust values out of a decoded [`Value`].
pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    /// Wraps an already decoded value.
    pub fn new(value: Value) -> Self {
        Deserializer { value }
    }

    /// Decodes `input` with default options and wraps the result.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self> {
        Self::from_str_with_options(input, &GgonOptions::default())
    }

    /// Decodes `input` with `options` and wraps the result.
    ///
    /// # Errors
    ///
    /// Returns a parse error if `input` is not valid GGON.
    pub fn from_str_with_options(input: &str, options: &GgonOptions) -> Result<Self> {
        crate::decode_with_options(input, options).map(Deserializer::new)
    }

    fn into_string(self, expected: &str) -> Result<String> {
        match self.value {
            Value::String(s) => Ok(s),
            Value::Map(_) => Err(Error::custom(format!("expected {}, found map", expected))),
        }
    }

    fn into_map(self, expected: &str) -> Result<GgonMap> {
        match self.value {
            Value::Map(map) => Ok(map),
            Value::String(s) => Err(Error::custom(format!(
                "expected {}, found string {:?}",
                expected, s
            ))),
        }
    }
}

macro_rules! deserialize_number {
    ($($method:ident => $visit:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let s = self.into_string(stringify!($ty))?;
                let n = s.parse::<$ty>().map_err(|_| {
                    Error::custom(format!("invalid {} {:?}", stringify!($ty), s))
                })?;
                visitor.$visit(n)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_string(s),
            Value::Map(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    deserialize_number! {
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let s = self.into_string("char")?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => visitor.visit_char(ch),
            _ => Err(Error::custom(format!("expected single character, found {:?}", s))),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.into_string("string")?)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_byte_buf(self.into_string("bytes")?.into_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        // No null in GGON, a present value is always Some
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let items = into_list(self.into_map("list")?)?;
        visitor.visit_seq(SeqDeserializer::new(items))
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Map(map) => {
                if map.len() != 1 {
                    return Err(Error::custom(format!(
                        "expected enum variant map with one entry, found {} entries",
                        map.len()
                    )));
                }
                match map.into_iter().next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    None => Err(Error::custom("expected enum variant")),
                }
            }
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        drop(self);
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        bool unit unit_struct map struct
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Deserializer;

    fn into_deserializer(self) -> Deserializer {
        Deserializer::new(self)
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(Deserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: GgonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(Deserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Deserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Err(Error::custom("expected unit variant as a bare name"))
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(Deserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(Deserializer::new(self.value), visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Map(map) => visitor.visit_map(MapDeserializer::new(map)),
            Value::String(_) => Err(Error::custom("expected struct variant map")),
        }
    }
}
