use std::fmt::Display;

/// Error type for the serde bridge and for [`decode_strict`](crate::decode_strict).
///
/// [`encode`](crate::encode) and [`decode`](crate::decode) never fail; they
/// degrade silently instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Custom message raised by a `Serialize` or `Deserialize` implementation.
    #[error("{0}")]
    Custom(String),

    /// Two segments disagree about the shape at `key`.
    ///
    /// e.g. `a=1&a[b]=2` uses `a` as both a scalar and a record.
    #[error("conflicting values for key `{key}`: {reason}")]
    Conflict { key: String, reason: &'static str },

    /// The top-level value is not a record.
    #[error("cannot represent {0} at the top level, only records have keys")]
    TopLevel(&'static str),

    /// The value cannot be represented in a query string.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

impl Error {
    /// Generate error to show top-level type cannot be serialized.
    pub fn top_level(object: &'static str) -> Self {
        Error::TopLevel(object)
    }

    pub(crate) fn conflict(key: impl Into<String>, reason: &'static str) -> Self {
        Error::Conflict {
            key: key.into(),
            reason,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(
            Error::conflict("a.b", "the same key is used for both a value and a nested record")
                .to_string(),
            "conflicting values for key `a.b`: the same key is used for both a value and a nested record"
        );
        assert_eq!(
            Error::top_level("sequence").to_string(),
            "cannot represent sequence at the top level, only records have keys"
        );
        assert_eq!(
            Error::Unsupported("map as a record key").to_string(),
            "unsupported: map as a record key"
        );
        assert_eq!(
            <Error as serde::de::Error>::custom("missing field `id`").to_string(),
            "missing field `id`"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::top_level("string"));
        assert!(err.source().is_none());
    }
}
