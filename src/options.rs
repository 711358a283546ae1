//! Configuration options for GGON encoding and decoding.
//!
//! [`GgonOptions`] controls the three knobs the format leaves open:
//!
//! - **Numeric coercion** (`number_as_string`): whether integers and floats
//!   passed to the serializer are written as their decimal string form or
//!   rejected. Map keys are always coerced regardless of this flag.
//! - **List syntax** (`list_syntax`): whether `[a,b]` bracket lists are
//!   accepted by the tokenizer and emitted by the encoder for maps that follow
//!   the list convention. Off by default, the minimal format only knows braces.
//! - **Nesting limit** (`max_depth`): the deepest map/list nesting the parser
//!   accepts before failing.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ggon::{decode_with_options, encode_with_options, GgonOptions};
//!
//! let options = GgonOptions::lists();
//! let value = decode_with_options("[a, b]", &options).unwrap();
//!
//! // Minimal format spells the list out
//! assert_eq!(value.to_string(), "{length:2,0:a,1:b}");
//!
//! // List-aware encoder folds it back into brackets
//! assert_eq!(encode_with_options(&value, &options), "[a,b]");
//! ```

/// Default limit on map/list nesting accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for GGON encoding and decoding.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::GgonOptions;
///
/// // Minimal brace-only format, numbers rejected
/// let options = GgonOptions::new();
/// assert!(!options.list_syntax);
///
/// // Bracket lists with numeric coercion
/// let options = GgonOptions::lists().with_number_as_string(true);
/// assert!(options.list_syntax && options.number_as_string);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GgonOptions {
    pub number_as_string: bool,
    pub list_syntax: bool,
    pub max_depth: usize,
}

impl Default for GgonOptions {
    fn default() -> Self {
        GgonOptions {
            number_as_string: false,
            list_syntax: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GgonOptions {
    /// Creates default options (brace-only, no numeric coercion).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ggon::GgonOptions;
    ///
    /// let options = GgonOptions::new();
    /// assert!(!options.number_as_string);
    /// assert_eq!(options.max_depth, 128);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with bracket list syntax enabled for both directions.
    #[must_use]
    pub fn lists() -> Self {
        GgonOptions {
            list_syntax: true,
            ..Default::default()
        }
    }

    /// Sets whether integers and floats are encoded as strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ggon::{to_string_with_options, GgonOptions};
    ///
    /// let options = GgonOptions::new().with_number_as_string(true);
    /// assert_eq!(to_string_with_options(&-5, &options).unwrap(), "-5");
    /// assert!(to_string_with_options(&-5, &GgonOptions::new()).is_err());
    /// ```
    #[must_use]
    pub fn with_number_as_string(mut self, enabled: bool) -> Self {
        self.number_as_string = enabled;
        self
    }

    /// Sets whether `[ ]` list syntax is tokenized and emitted.
    #[must_use]
    pub fn with_list_syntax(mut self, enabled: bool) -> Self {
        self.list_syntax = enabled;
        self
    }

    /// Sets the deepest nesting of maps and lists the parser accepts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ggon::{decode_with_options, GgonOptions};
    ///
    /// let options = GgonOptions::new().with_max_depth(1);
    /// assert!(decode_with_options("{a:b}", &options).is_ok());
    /// assert!(decode_with_options("{a:{b:c}}", &options).is_err());
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
