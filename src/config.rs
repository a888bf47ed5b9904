use crate::error::Result;
use crate::value::{self, Map, Value};

/// Configuration for encoding records into querystrings.
///
/// Every option is off by default except `encode`. The struct is `Copy`
/// and is built up with the `const` builder methods below, so it can live
/// in a `static`.
///
/// ```
/// use urlchemy::{Config, Map, Value};
///
/// let mut user = Map::new();
/// user.insert("id".into(), Value::from(1));
/// user.insert("name".into(), "John".into());
/// let mut params = Map::new();
/// params.insert("user".into(), Value::Record(user));
///
/// let config = Config::new().strict(true).prefix(true);
/// assert_eq!(config.encode_map(&params), "?user.id=1&user.name=John");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) encode: bool,
    pub(crate) sort: bool,
    pub(crate) strict: bool,
    pub(crate) prefix: bool,
    pub(crate) exclude_nulls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            encode: true,
            sort: false,
            strict: false,
            prefix: false,
            exclude_nulls: false,
        }
    }

    /// Percent-encode every key and scalar value. Default is `true`.
    ///
    /// Encoding follows the URI component rules: everything except ASCII
    /// alphanumerics and `-_.!~*'()` is escaped, including the brackets of
    /// nested keys (`user[id]` becomes `user%5Bid%5D`).
    pub const fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// Sort the emitted `key=value` segments as plain text before joining.
    ///
    /// The sort is over the whole segment, so `a=2` sorts before `a[b]=1`
    /// only because `=` sorts before `[`.
    pub const fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Use dot notation (`user.id`) for nested keys instead of brackets
    /// (`user[id]`).
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Prepend `?` to a non-empty result.
    pub const fn prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    /// Leave out keys whose value is null, along with everything below them.
    pub const fn exclude_nulls(mut self, exclude_nulls: bool) -> Self {
        self.exclude_nulls = exclude_nulls;
        self
    }

    /// Encodes a record into a querystring using this `Config`.
    pub fn encode_map(self, input: &Map) -> String {
        crate::ser::encode(input, self)
    }

    /// Serializes any serde value into a querystring using this `Config`.
    ///
    /// The value must serialize to a record (a struct or a map).
    pub fn serialize_string<T: serde::Serialize + ?Sized>(self, input: &T) -> Result<String> {
        match value::to_value(input)? {
            Value::Record(map) => Ok(self.encode_map(&map)),
            other => Err(crate::Error::top_level(other.kind())),
        }
    }
}
