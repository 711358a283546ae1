//! GGON Format Reference
//!
//! This module documents GGON (Gang Garrison Object Notation) as implemented
//! by this library.
//!
//! # Overview
//!
//! GGON stores nested string data as text. A document is exactly one value,
//! and a value is either a **string** or a **map** from strings to values.
//! Nothing else exists at the data level: numbers, booleans and null are
//! application conventions over strings.
//!
//! # Core Syntax
//!
//! ## Strings
//!
//! A string made only of `A-Z a-z 0-9 _ . + -` may be written bare:
//!
//! ```text
//! scout
//! 12.0
//! -5
//! ctf_truefort
//! ```
//!
//! Anything else, including the empty string, is single-quoted. Inside quotes
//! every character stands for itself except these escapes:
//!
//! | Escape | Character |
//! |--------|-----------|
//! | `\'`   | `'`       |
//! | `\\`   | `\`       |
//! | `\n`   | line feed |
//! | `\r`   | carriage return |
//! | `\t`   | tab       |
//! | `\0`   | NUL       |
//!
//! Any other character after a backslash is an error. Raw newlines and
//! non-ASCII characters are allowed inside quotes.
//!
//! A bare `12` and a quoted `'12'` decode to the same string.
//!
//! ## Maps
//!
//! ```text
//! {name:'Bob Q',class:scout,stats:{kills:12,deaths:3}}
//! ```
//!
//! **Rules**:
//! - Keys are strings, bare or quoted; a map can never be a key
//! - Pairs are separated by `,`; no trailing comma
//! - `{}` is the empty map
//! - A repeated key keeps its first position and takes the last value
//! - Pair order is preserved on decode and re-encode
//!
//! ## Whitespace
//!
//! Space, tab, `\n` and `\r` may appear between tokens and are ignored. A
//! line break never ends a value on its own.
//!
//! # Grammar
//!
//! ```text
//! value := STRING | map | list
//! map   := '{' '}' | '{' STRING ':' value (',' STRING ':' value)* '}'
//! list  := '[' ']' | '[' value (',' value)* ']'
//! ```
//!
//! Exactly one value per document. Leading punctuation, trailing tokens and
//! truncated input are all errors, reported with a 1-based line and column.
//!
//! # Lists
//!
//! GGON has no list type. A list is a map with a `length` entry and one entry
//! per item keyed by its decimal index:
//!
//! ```text
//! {length:3,0:red,1:blu,2:spectator}
//! ```
//!
//! When list syntax is enabled ([`GgonOptions::lists`](crate::GgonOptions::lists)),
//! the same value may be written in bracket form:
//!
//! ```text
//! [red,blu,spectator]
//! ```
//!
//! Bracket lists decode to the map form; nothing in the tree records which
//! form was used. On encode, a map is written in bracket form only if it is a
//! well-formed list: `length` is a canonical decimal number `n` (no sign, no
//! leading zero) and the keys are exactly `length` and `0` to `n-1`.
//!
//! | Map | List? |
//! |-----|-------|
//! | `{length:0}` | yes, `[]` |
//! | `{1:b,length:2,0:a}` | yes, `[a,b]` |
//! | `{length:3,0:a,1:b}` | no, item missing |
//! | `{length:2,0:a,1:b,name:x}` | no, extra key |
//! | `{length:a,0:a}` | no, length not a number |
//! | `{length:01,0:a}` | no, length not canonical |
//!
//! # Rust Types
//!
//! | Rust | GGON |
//! |------|------|
//! | `String`, `&str`, `char` | string |
//! | integers, floats | decimal string, only with numeric coercion on |
//! | `bool`, `()`, `None`, unit structs | encode error |
//! | structs, maps | map |
//! | `Vec`, slices, tuples | list |
//! | unit variant | variant name |
//! | other variants | `{Variant:payload}` |
//!
//! Map keys are always coerced, so `HashMap<u32, _>` encodes without numeric
//! coercion enabled.
//!
//! # Limitations
//!
//! - **Comments**: Not supported in the format
//! - **Numbers**: No numeric type, values decode as strings and parse back
//!   on deserialization
//! - **Nesting**: Decoding stops at [`DEFAULT_MAX_DEPTH`](crate::options::DEFAULT_MAX_DEPTH)
//!   levels unless configured otherwise

// This module contains only documentation; no implementation code
