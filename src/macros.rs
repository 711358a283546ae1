/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects become maps in the order written, arrays become list-convention
/// maps, and anything else goes through `Value::from`, so numbers turn into
/// their decimal strings. Wrap negative numbers and other multi-token
/// expressions in parentheses.
///
/// ```rust
/// use serde_ggon::ggon;
///
/// let value = ggon!({ "x": 12.5, "y": (-3), "tags": [] });
/// assert_eq!(value.to_string(), "{x:12.5,y:-3,tags:{length:0}}");
/// ```
#[macro_export]
macro_rules! ggon {
    // Empty list
    ([]) => {
        $crate::list_to_map(::std::vec::Vec::new())
    };

    // Non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::list_to_map(vec![$($crate::ggon!($elem)),*])
    };

    // Empty map
    ({}) => {
        $crate::Value::Map($crate::GgonMap::new())
    };

    // Non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::GgonMap::new();
        $(
            map.insert($key.to_string(), $crate::ggon!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Strings, numbers and existing values
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
