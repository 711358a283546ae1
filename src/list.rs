//! The GGON list convention.
//!
//! GGON has no list type. An ordered list is written as a map with a
//! `length` entry holding the item count and one entry per item keyed by its
//! decimal index:
//!
//! ```text
//! {length:3,0:red,1:blu,2:spectator}
//! ```
//!
//! [`list_to_map`] and [`map_to_list`] convert between the two shapes.
//! [`list_items`] is the strict structural check used by the list-aware
//! encoder: only a map holding exactly `length` and the keys `0..length`,
//! with `length` in canonical decimal form, counts as a list.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ggon::{list_to_map, map_to_list, Value};
//!
//! let items = vec![Value::from("red"), Value::from("blu")];
//! let map = list_to_map(items.clone());
//! assert_eq!(map.to_string(), "{length:2,0:red,1:blu}");
//! assert_eq!(map_to_list(&map).unwrap(), items);
//! ```

use crate::{Error, GgonMap, Result, Value};

/// Key holding the item count of a list-convention map.
pub const LENGTH_KEY: &str = "length";

/// Builds a list-convention map from `items`.
///
/// The `length` entry comes first, followed by the items in order.
#[must_use]
pub fn list_to_map<I>(items: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let items: Vec<Value> = items.into_iter().collect();
    let mut map = GgonMap::with_capacity(items.len() + 1);
    map.insert(LENGTH_KEY.to_string(), Value::String(items.len().to_string()));
    for (index, item) in items.into_iter().enumerate() {
        map.insert(index.to_string(), item);
    }
    Value::Map(map)
}

/// Reads the items of a list-convention map, in index order.
///
/// Extra keys are ignored. The `length` entry may be any base-10
/// non-negative integer string.
///
/// # Errors
///
/// Returns [`Error::Conversion`] if `value` is not a map, if `length` is
/// missing or not a non-negative integer, or if any index below `length`
/// has no entry.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{decode, map_to_list, Error};
///
/// let gappy = decode("{length:3,0:a,2:c}").unwrap();
/// assert!(matches!(map_to_list(&gappy), Err(Error::Conversion(_))));
/// ```
pub fn map_to_list(value: &Value) -> Result<Vec<Value>> {
    let map = value
        .as_map()
        .ok_or_else(|| Error::conversion("expected a map, found a string"))?;
    let length = read_length(map)?;

    (0..length)
        .map(|index| {
            map.get(&index.to_string()).cloned().ok_or_else(|| {
                Error::conversion(&format!("missing index {} of {}", index, length))
            })
        })
        .collect()
}

/// Consuming variant of [`map_to_list`] that moves the items out of the map.
pub(crate) fn into_list(map: GgonMap) -> Result<Vec<Value>> {
    let length = read_length(&map)?;
    let mut entries: std::collections::HashMap<String, Value> = map.into();

    (0..length)
        .map(|index| {
            entries.remove(&index.to_string()).ok_or_else(|| {
                Error::conversion(&format!("missing index {} of {}", index, length))
            })
        })
        .collect()
}

fn read_length(map: &GgonMap) -> Result<usize> {
    let length = match map.get(LENGTH_KEY) {
        Some(Value::String(s)) => s,
        Some(Value::Map(_)) => return Err(Error::conversion("\"length\" is a map")),
        None => return Err(Error::conversion("missing \"length\" key")),
    };
    length
        .parse::<usize>()
        .map_err(|_| Error::conversion(&format!("invalid \"length\" {:?}", length)))
}

/// Returns the items of `map` if it is a well-formed list.
///
/// Well-formed means: `length` is a string in canonical decimal form (`0`
/// or no leading zero, no sign), and the map's keys are exactly `length`
/// and `0` to `length - 1`.
#[must_use]
pub fn list_items(map: &GgonMap) -> Option<Vec<&Value>> {
    let length = map.get(LENGTH_KEY)?.as_str()?;
    if !is_canonical_index(length) {
        return None;
    }
    let length: usize = length.parse().ok()?;
    if map.len() != length.checked_add(1)? {
        return None;
    }

    (0..length).map(|index| map.get(&index.to_string())).collect()
}

fn is_canonical_index(s: &str) -> bool {
    match s.as_bytes() {
        [b'0'] => true,
        [first, rest @ ..] => (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit),
        [] => false,
    }
}
