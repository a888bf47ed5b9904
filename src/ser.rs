//! Encoding records into querystrings.

mod key;
mod percent;

use key::KeyPath;
use percent::write_encoded;

use serde::ser;

use crate::config::Config;
use crate::error::Result;
use crate::value::{Map, Value, format_date};

/// Encodes a record into a querystring.
///
/// ```
/// use urlchemy::{Config, Map, Value};
///
/// let mut params = Map::new();
/// params.insert("key".into(), "hello world".into());
/// params.insert("tags".into(), Value::from(vec!["a", "b"]));
///
/// assert_eq!(
///     urlchemy::encode(&params, Config::default()),
///     "key=hello%20world&tags=a&tags=b"
/// );
/// ```
pub fn encode(input: &Map, config: Config) -> String {
    let mut encoder = QsEncoder::new(config);
    encoder.encode_record(input);
    encoder.finish()
}

/// Serializes a value into a querystring with the default [`Config`].
///
/// ```
/// # use serde::Serialize;
/// #[derive(Serialize)]
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
///     urlchemy::to_string(&q).unwrap(),
///     "name=Alice&age=24&occupation=Student"
/// );
/// ```
pub fn to_string<T: ser::Serialize + ?Sized>(input: &T) -> Result<String> {
    Config::default().serialize_string(input)
}

/// Walks a [`Value`] tree and writes one `key=value` segment per scalar.
///
/// The encoder keeps a stack of the record keys above the current value.
/// When it reaches a scalar it writes the whole key path, in bracket or
/// dot form, followed by the value.
struct QsEncoder<'a> {
    output: String,
    first_kv: bool,
    key: KeyPath<'a>,
    config: Config,
}

impl<'a> QsEncoder<'a> {
    fn new(config: Config) -> Self {
        Self {
            // a guess at a typical querystring length
            output: String::with_capacity(128),
            first_kv: true,
            key: KeyPath::new(),
            config,
        }
    }

    fn encode_record(&mut self, map: &'a Map) {
        for (key, value) in map {
            self.key.push(key);
            self.encode_value(value);
            self.key.pop();
        }
    }

    fn encode_value(&mut self, value: &'a Value) {
        match value {
            Value::Null if self.config.exclude_nulls => {
                tracing::trace!(key = ?self.key, "excluding null value");
            }
            Value::Null => self.write_no_value(),
            Value::Bool(b) => self.write_value(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_value(&n.to_string()),
            Value::String(s) => self.write_value(s),
            Value::Date(date) => self.write_value(&format_date(date)),
            Value::Record(map) => self.encode_record(map),
            // every element reuses the key of the sequence itself
            Value::Sequence(seq) => {
                for item in seq {
                    self.encode_value(item);
                }
            }
        }
    }

    /// Writes the separator and the encoded key path of the current value.
    fn write_key(&mut self) {
        if self.first_kv {
            self.first_kv = false;
        } else {
            self.output.push('&');
        }
        if self.config.encode {
            // the composed key is encoded as a whole, brackets included
            let mut raw = String::new();
            self.key.write_raw(&mut raw, self.config.strict);
            write_encoded(&mut self.output, &raw, true);
        } else {
            self.key.write_raw(&mut self.output, self.config.strict);
        }
    }

    fn write_value(&mut self, value: &str) {
        self.write_key();
        self.output.push('=');
        write_encoded(&mut self.output, value, self.config.encode);
    }

    /// A null value is written as a bare key.
    fn write_no_value(&mut self) {
        self.write_key();
    }

    fn finish(self) -> String {
        let mut output = self.output;
        if self.config.sort {
            // sorting is over the joined text, so split it back apart
            let sorted = {
                let mut segments: Vec<&str> = output.split('&').collect();
                segments.sort();
                segments.join("&")
            };
            output = sorted;
        }
        if self.config.prefix && !output.is_empty() {
            output.insert(0, '?');
        }
        output
    }
}
