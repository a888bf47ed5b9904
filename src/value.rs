//! The structured value that querystrings are encoded from and decoded into.

mod de;
mod ser;

pub use de::from_value;
pub use ser::to_value;

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// A record: string keys in insertion order.
///
/// Insertion order is what the encoder walks, so it decides the order of
/// the emitted segments.
pub type Map = indexmap::IndexMap<String, Value>;

/// Any value that can be placed under a querystring key.
///
/// Decoding only ever produces `Null`, `String`, `Sequence` and `Record`;
/// the remaining variants exist so callers can encode typed data.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// A key with no value (`flag` or `flag=`).
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A timestamp, emitted as ISO-8601 in UTC with millisecond precision.
    Date(DateTime<Utc>),
    /// Repeated values under the same key, e.g. `tags=a&tags=b`.
    Sequence(Vec<Value>),
    /// Nested keys, e.g. `user[id]=1` or `user.id=1`.
    Record(Map),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Map> {
        match self {
            Value::Record(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` if this value is a record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|map| map.get(key))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Sequence(_) => "sequence",
            Value::Record(_) => "record",
        }
    }
}

/// Formats a timestamp the way it appears in a querystring,
/// e.g. `2014-11-28T12:45:59.324Z`.
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A numeric scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    PosInt(u64),
    /// Always negative.
    NegInt(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::PosInt(n) => n as f64,
            Number::NegInt(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::PosInt(n) => f.write_str(itoa::Buffer::new().format(n)),
            Number::NegInt(n) => f.write_str(itoa::Buffer::new().format(n)),
            Number::Float(n) => format_float(n, f),
        }
    }
}

// integral floats print without a fraction (`1.0` -> `1`), and the
// non-finite values use their spelled-out names
fn format_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        write!(f, "{n:.0}")
    } else {
        f.write_str(ryu::Buffer::new().format_finite(n))
    }
}

macro_rules! from_signed {
    ($($ty:ty,)*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    if n < 0 {
                        Number::NegInt(n as i64)
                    } else {
                        Number::PosInt(n as u64)
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n.into())
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty,)*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::PosInt(n as u64)
                }
            }

            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n.into())
                }
            }
        )*
    };
}

from_signed! { i8, i16, i32, i64, isize, }
from_unsigned! { u8, u16, u32, u64, usize, }

impl From<f32> for Number {
    /// Keeps the shortest text of the `f32`, so `0.1f32` stays `0.1`
    /// instead of widening to `0.10000000149011612`.
    fn from(n: f32) -> Self {
        if !n.is_finite() {
            return Number::Float(n as f64);
        }
        let text = ryu::Buffer::new().format_finite(n).to_owned();
        Number::Float(text.parse().unwrap_or(n as f64))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::Float(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(date: DateTime<Tz>) -> Self {
        Value::Date(date.with_timezone(&Utc))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Record(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(seq: Vec<T>) -> Self {
        Value::Sequence(seq.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
