//! Decoding querystrings into records.
//!
//! Decoding happens in two steps. The `parse` module splits the string into
//! segments and builds a [`Map`] from them; that step is all [`decode`]
//! does. [`from_str`] then hands the map to serde through
//! [`from_value`](crate::from_value), which parses the string leaves into
//! whatever types the target asks for.
//!
//! Querystrings carry no type information, and the same field may show up
//! once or many times. The decoder does not guess: a key seen once holds a
//! string, a key seen twice holds a sequence. Reconciling that with a schema
//! is left to deserialization, where a lone value is accepted for a `Vec`.

mod parse;

use parse::Conflicts;

use serde::de;

use crate::error::Result;
use crate::value::{Map, Value};

/// Decodes a querystring into a record.
///
/// Decoding never fails. Malformed bracket keys such as `[]=1` are dropped,
/// and when segments disagree about the shape of a key the later one wins.
/// Use [`decode_strict`] to have those conflicts reported instead.
///
/// ```
/// use urlchemy::Value;
///
/// let map = urlchemy::decode("?user[id]=1&user.name=John&tags=a&tags=b");
///
/// assert_eq!(map["user"].get("id"), Some(&Value::from("1")));
/// assert_eq!(map["user"].get("name"), Some(&Value::from("John")));
/// assert_eq!(map["tags"], Value::from(vec!["a", "b"]));
/// ```
pub fn decode(query: &str) -> Map {
    match parse::parse(query, Conflicts::Overwrite) {
        Ok(map) => map,
        Err(e) => {
            // overwriting resolves every conflict, so parsing cannot fail
            tracing::warn!(error = %e, "unexpected error while decoding querystring");
            Map::new()
        }
    }
}

/// Decodes a querystring into a record, rejecting conflicting keys.
///
/// A conflict is a key used both as a nested record and as a value or
/// sequence, in either order.
///
/// ```
/// let err = urlchemy::decode_strict("a=1&a[b]=2").unwrap_err();
/// assert!(matches!(err, urlchemy::Error::Conflict { .. }));
///
/// let map = urlchemy::decode_strict("a=1&a=2").unwrap();
/// assert_eq!(map["a"], urlchemy::Value::from(vec!["1", "2"]));
/// ```
pub fn decode_strict(query: &str) -> Result<Map> {
    parse::parse(query, Conflicts::Reject)
}

/// Deserializes a querystring from a `&str`.
///
/// Conflicting keys are an error, as with [`decode_strict`].
///
/// ```
/// # use serde::Deserialize;
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Query {
///     name: String,
///     age: u8,
///     occupation: String,
/// }
///
/// let q = Query {
///     name: "Alice".to_owned(),
///     age: 24,
///     occupation: "Student".to_owned(),
/// };
///
/// assert_eq!(
///     urlchemy::from_str::<Query>("name=Alice&age=24&occupation=Student").unwrap(),
///     q
/// );
/// ```
pub fn from_str<T: de::DeserializeOwned>(input: &str) -> Result<T> {
    crate::value::from_value(Value::Record(decode_strict(input)?))
}
