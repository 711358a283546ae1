//! # serde_ggon
//!
//! A Serde-compatible library for GGON (Gang Garrison Object Notation).
//!
//! ## What is GGON?
//!
//! GGON is a minimal text notation for nested string data, used by Gang
//! Garrison 2 and its plugins to persist settings and exchange data. It has
//! exactly two kinds of value:
//!
//! - **Strings**, written bare (`red`, `12.0`, `-5`) when every character is
//!   in `[A-Za-z0-9_.+-]`, and single-quoted (`'Bob Q'`) otherwise
//! - **Maps**, written `{key:value,...}` with string keys and insertion order
//!   preserved
//!
//! There are no numbers, booleans or nulls. Lists are maps following a
//! convention (`{length:2,0:a,1:b}`), optionally written in bracket form
//! (`[a,b]`) when list syntax is enabled in [`GgonOptions`].
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_ggon = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Working with Values
//!
//! ```rust
//! use serde_ggon::{decode, encode, Value};
//!
//! let value = decode("{name:'Bob Q',class:scout}").unwrap();
//! assert_eq!(value.get("class").and_then(Value::as_str), Some("scout"));
//! assert_eq!(encode(&value), "{name:'Bob Q',class:scout}");
//! ```
//!
//! ### Serde Types
//!
//! GGON has no numbers, so numeric fields need numeric coercion to encode.
//! They decode from their string form either way.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_ggon::{from_str, to_string_with_options, GgonOptions};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Spawn {
//!     team: String,
//!     x: f64,
//!     y: f64,
//! }
//!
//! let spawn = Spawn { team: "blu".to_string(), x: 12.0, y: 13.5 };
//! let options = GgonOptions::new().with_number_as_string(true);
//! let text = to_string_with_options(&spawn, &options).unwrap();
//! assert_eq!(text, "{team:blu,x:12,y:13.5}");
//!
//! let back: Spawn = from_str(&text).unwrap();
//! assert_eq!(back, spawn);
//! ```
//!
//! ### Lists
//!
//! ```rust
//! use serde_ggon::{decode_with_options, encode, encode_with_options, GgonOptions};
//!
//! let options = GgonOptions::lists();
//! let value = decode_with_options("[red, blu]", &options).unwrap();
//! assert_eq!(encode(&value), "{length:2,0:red,1:blu}");
//! assert_eq!(encode_with_options(&value, &options), "[red,blu]");
//! ```
//!
//! ### Dynamic Values with the ggon! Macro
//!
//! ```rust
//! use serde_ggon::ggon;
//!
//! let value = ggon!({
//!     "name": "Bob Q",
//!     "kills": 12,
//!     "loadout": ["scattergun", "pistol"]
//! });
//! assert_eq!(
//!     value.to_string(),
//!     "{name:'Bob Q',kills:12,loadout:{length:2,0:scattergun,1:pistol}}"
//! );
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Decoding bounds nesting depth ([`GgonOptions::max_depth`]), so hostile
//!   input cannot overflow the stack
//! - Encoding and deserializing a [`Value`] built in code recurse once per
//!   level with no depth limit; very deep trees built that way can overflow
//!   the stack
//!
//! The notation itself is described in [`format`].

pub mod de;
pub mod error;
pub mod format;
pub mod list;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod token;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use list::{list_to_map, map_to_list};
pub use map::GgonMap;
pub use options::GgonOptions;
pub use ser::{Serializer, ValueSerializer};
pub use value::Value;

use parser::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use token::Tokenizer;
use tracing::trace;

/// Decodes GGON text into a [`Value`] using the minimal format.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{decode, Value};
///
/// assert_eq!(decode("'foo\\nbar'").unwrap(), Value::from("foo\nbar"));
/// assert!(decode("{foo:bar").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] or [`Error::UnexpectedEof`] with the line and
/// column of the problem. No partial tree is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(input: &str) -> Result<Value> {
    decode_with_options(input, &GgonOptions::default())
}

/// Decodes GGON text into a [`Value`] with custom options.
///
/// `options.list_syntax` enables `[...]` lists and `options.max_depth` bounds
/// nesting.
///
/// # Errors
///
/// Returns a parse error if the text is not a single well-formed value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(input: &str, options: &GgonOptions) -> Result<Value> {
    trace!(len = input.len(), list_syntax = options.list_syntax, "decoding");
    let tokens = token::tokenize(input, options.list_syntax)?;
    trace!(tokens = tokens.len(), "tokenized");
    Parser::new(tokens, Tokenizer::end_position(input), options).parse_document()
}

/// Encodes a [`Value`] as minimal GGON text.
///
/// Encoding a value tree cannot fail. It recurses once per nesting level and,
/// unlike decoding, has no depth limit.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{encode, Value};
///
/// assert_eq!(encode(&Value::from("")), "''");
/// assert_eq!(encode(&Value::from("foo")), "foo");
/// ```
#[must_use]
pub fn encode(value: &Value) -> String {
    encode_with_options(value, &GgonOptions::default())
}

/// Encodes a [`Value`] with custom options.
///
/// With `options.list_syntax`, maps that are well-formed lists are written
/// in bracket form.
#[must_use]
pub fn encode_with_options(value: &Value, options: &GgonOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_value(value);
    let output = serializer.into_inner();
    trace!(len = output.len(), "encoded");
    output
}

/// Serialize any `T: Serialize` to a GGON string.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Class { name: String, weapon: String }
///
/// let class = Class { name: "Soldier".to_string(), weapon: "rocket launcher".to_string() };
/// assert_eq!(to_string(&class).unwrap(), "{name:Soldier,weapon:'rocket launcher'}");
/// ```
///
/// # Errors
///
/// Returns [`Error::Encode`] for values GGON cannot represent: booleans,
/// unit, `None`, and numbers unless numeric coercion is enabled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &GgonOptions::default())
}

/// Serialize any `T: Serialize` to a GGON string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{to_string_with_options, GgonOptions};
///
/// let options = GgonOptions::lists().with_number_as_string(true);
/// assert_eq!(to_string_with_options(&(1, "a b"), &options).unwrap(), "[1,'a b']");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &GgonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value_with_options(value, options)?;
    Ok(encode_with_options(&value, options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{to_value, Value};
///
/// let value = to_value(&vec!["a", "b"]).unwrap();
/// assert!(value.is_list());
/// assert_eq!(value.get("1"), Some(&Value::from("b")));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    to_value_with_options(value, &GgonOptions::default())
}

/// Convert any `T: Serialize` to a [`Value`], honouring `number_as_string`.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value_with_options<T>(value: &T, options: &GgonOptions) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer::new(options.number_as_string))
}

/// Serialize any `T: Serialize` to a writer in GGON format.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::to_writer;
/// use std::collections::BTreeMap;
///
/// let mut settings = BTreeMap::new();
/// settings.insert("map", "ctf_truefort");
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &settings).unwrap();
/// assert_eq!(buffer, b"{map:ctf_truefort}");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &GgonOptions::default())
}

/// Serialize any `T: Serialize` to a writer in GGON format with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &GgonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let ggon_string = to_string_with_options(value, options)?;
    writer
        .write_all(ggon_string.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of GGON text.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{x:1,y:'-2'}").unwrap();
/// assert_eq!(point, Point { x: 1, y: -2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid GGON or cannot be deserialized
/// to type `T`. Parse errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &GgonOptions::default())
}

/// Deserialize an instance of type `T` from GGON text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{from_str_with_options, GgonOptions};
///
/// let teams: Vec<String> = from_str_with_options("[red,blu]", &GgonOptions::lists()).unwrap();
/// assert_eq!(teams, vec!["red", "blu"]);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid GGON or cannot be deserialized
/// to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &GgonOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::from_str_with_options(s, options)?)
}

/// Deserialize an instance of type `T` from an I/O stream of GGON.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::from_reader;
/// use std::collections::HashMap;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"{port:8190}");
/// let config: HashMap<String, u16> = from_reader(cursor).unwrap();
/// assert_eq!(config["port"], 8190);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading from the reader fails, a parse error if
/// the input is not valid UTF-8 or not valid GGON, or an error if the data
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_reader_with_options(reader, &GgonOptions::default())
}

/// Deserialize an instance of type `T` from an I/O stream of GGON with
/// custom options.
///
/// # Errors
///
/// Same as [`from_reader`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R, T>(mut reader: R, options: &GgonOptions) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice_with_options(&bytes, options)
}

/// Deserialize an instance of type `T` from bytes of GGON text.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{from_slice, Error};
///
/// let team: String = from_slice(b"'red team'").unwrap();
/// assert_eq!(team, "red team");
///
/// let err = from_slice::<String>(b"'caf\xe9'").unwrap_err();
/// assert!(matches!(err, Error::Syntax { line: 1, col: 5, .. }));
/// ```
///
/// # Errors
///
/// Returns a parse error if the bytes are not valid UTF-8 or not valid GGON,
/// or an error if they cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_slice_with_options(v, &GgonOptions::default())
}

/// Deserialize an instance of type `T` from bytes of GGON text with custom
/// options.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{from_slice_with_options, GgonOptions};
///
/// let teams: Vec<String> = from_slice_with_options(b"[red,blu]", &GgonOptions::lists()).unwrap();
/// assert_eq!(teams, vec!["red", "blu"]);
/// ```
///
/// # Errors
///
/// Same as [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options<T>(v: &[u8], options: &GgonOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(token::utf8_text(v)?, options)
}

/// Interpret a decoded [`Value`] as an instance of type `T`.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{decode, from_value};
///
/// let value = decode("{length:2,0:'3',1:4}").unwrap();
/// let scores: Vec<u8> = from_value(value).unwrap();
/// assert_eq!(scores, vec![3, 4]);
/// ```
///
/// # Errors
///
/// Returns an error if the value does not have the shape `T` expects.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::new(value))
}
