use indexmap::map::Entry;

use crate::error::{Error, Result};
use crate::value::{Map, Value};

mod decode;

/// What to do when two segments disagree about the shape of a key,
/// e.g. `a=1&a[b]=2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conflicts {
    /// The later segment wins: a scalar in the way of a nested key is
    /// replaced by a record, and a value landing on a record turns the slot
    /// into a sequence.
    Overwrite,
    /// Report the first conflict as an error.
    Reject,
}

/// Parses a querystring into a record.
///
/// Segments are processed left to right:
///
/// 1. a single leading `?` is dropped and the rest is split on `&`;
///    empty segments are skipped
/// 2. each segment is split on its first `=` into key and value; a missing
///    or empty value is `Null`
/// 3. key and value are percent-decoded
/// 4. the key is split into path components (see [`key_components`])
/// 5. the value is stored at that path, with repeated paths collected into
///    a sequence in encounter order
///
/// With [`Conflicts::Overwrite`] this never fails.
pub fn parse(query: &str, conflicts: Conflicts) -> Result<Map> {
    let mut output = Map::new();
    let query = query.strip_prefix('?').unwrap_or(query);

    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let (raw_key, raw_value) = match segment.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (segment, None),
        };

        let key = decode::decode(raw_key);
        let value = match raw_value {
            Some(raw) if !raw.is_empty() => Value::String(decode::decode(raw).into_owned()),
            _ => Value::Null,
        };

        let Some(path) = key_components(&key) else {
            tracing::debug!(segment, "skipping segment without key components");
            continue;
        };
        insert(&mut output, &path, value, conflicts)?;
    }

    Ok(output)
}

/// Splits a decoded key into its path components.
///
/// Checked in order:
/// - contains `.`: dot form, split on every `.` (`user.id` -> `user`, `id`)
/// - contains `[`: bracket form, every run of characters outside the
///   brackets is a component (`user[id]` -> `user`, `id`). Returns `None`
///   when there is no such run, e.g. `[]` or `[[]]`.
/// - otherwise the whole key is the only component
///
/// Empty brackets are not components, so `tags[]=a` stores under `tags`.
fn key_components(key: &str) -> Option<Vec<&str>> {
    if key.contains('.') {
        Some(key.split('.').collect())
    } else if key.contains('[') {
        let components: Vec<&str> = key
            .split(['[', ']'])
            .filter(|component| !component.is_empty())
            .collect();
        (!components.is_empty()).then_some(components)
    } else {
        Some(vec![key])
    }
}

fn insert(root: &mut Map, path: &[&str], value: Value, conflicts: Conflicts) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut current = root;
    for (depth, component) in parents.iter().enumerate() {
        let node = current
            .entry((*component).to_owned())
            .or_insert_with(|| Value::Record(Map::new()));
        current = expect_record(node, &path[..=depth], conflicts)?;
    }

    match current.entry((*last).to_owned()) {
        Entry::Vacant(v) => {
            v.insert(value);
        }
        Entry::Occupied(mut o) => {
            let existing = o.get_mut();
            match existing {
                Value::Sequence(seq) => seq.push(value),
                Value::Record(_) if conflicts == Conflicts::Reject => {
                    return Err(Error::conflict(
                        path.join("."),
                        "the same key is used for both a nested record and a value",
                    ));
                }
                _ => {
                    // a repeated key: the first value and this one become a sequence
                    let previous = std::mem::take(existing);
                    *existing = Value::Sequence(vec![previous, value]);
                }
            }
        }
    }
    Ok(())
}

fn expect_record<'m>(
    node: &'m mut Value,
    path: &[&str],
    conflicts: Conflicts,
) -> Result<&'m mut Map> {
    if !matches!(node, Value::Record(_)) {
        let reason = nesting_conflict(node);
        if conflicts == Conflicts::Reject {
            return Err(Error::conflict(path.join("."), reason));
        }
        tracing::debug!(key = %path.join("."), replaced = node.kind(), "{reason}");
        *node = Value::Record(Map::new());
    }

    match node {
        Value::Record(map) => Ok(map),
        other => Err(Error::conflict(path.join("."), nesting_conflict(other))),
    }
}

/// Why a nested key cannot descend through `node`.
fn nesting_conflict(node: &Value) -> &'static str {
    match node {
        Value::Sequence(_) => "the same key is used for both a sequence and a nested record",
        _ => "the same key is used for both a value and a nested record",
    }
}

#[cfg(test)]
mod test {
    use super::{Conflicts, key_components, parse};
    use crate::value::{Map, Value};

    use pretty_assertions::assert_eq;

    fn lenient(query: &str) -> Map {
        parse(query, Conflicts::Overwrite).unwrap()
    }

    fn record<const N: usize>(entries: [(&str, Value); N]) -> Value {
        Value::Record(entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
    }

    fn map<const N: usize>(entries: [(&str, Value); N]) -> Map {
        entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
    }

    #[test]
    fn components() {
        assert_eq!(key_components("a"), Some(vec!["a"]));
        assert_eq!(key_components("a.b.c"), Some(vec!["a", "b", "c"]));
        assert_eq!(key_components("a..b"), Some(vec!["a", "", "b"]));
        assert_eq!(key_components("a[b][c]"), Some(vec!["a", "b", "c"]));
        assert_eq!(key_components("a[]"), Some(vec!["a"]));
        assert_eq!(key_components("a[b]c"), Some(vec!["a", "b", "c"]));
        // dot form wins over brackets
        assert_eq!(key_components("a.b[c]"), Some(vec!["a", "b[c]"]));
        assert_eq!(key_components("[]"), None);
        assert_eq!(key_components("[[]]"), None);
        assert_eq!(key_components("a]"), Some(vec!["a]"]));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(lenient(""), Map::new());
        assert_eq!(lenient("?"), Map::new());
        assert_eq!(lenient("&&"), Map::new());
    }

    #[test]
    fn parse_map() {
        assert_eq!(
            lenient("key=value&foo=bar"),
            map([("key", "value".into()), ("foo", "bar".into())])
        );
    }

    #[test]
    fn parse_strips_one_prefix() {
        assert_eq!(lenient("?a=1"), map([("a", "1".into())]));
        assert_eq!(lenient("??a=1"), map([("?a", "1".into())]));
    }

    #[test]
    fn parse_no_value() {
        assert_eq!(
            lenient("abc&def=&=x"),
            map([("abc", Value::Null), ("def", Value::Null), ("", "x".into())])
        );
    }

    #[test]
    fn parse_splits_on_first_equals() {
        assert_eq!(lenient("a=b=c=="), map([("a", "b=c==".into())]));
    }

    #[test]
    fn parse_repeated_keys() {
        assert_eq!(
            lenient("tags=a&tags=b&tags=c"),
            map([("tags", Value::from(vec!["a", "b", "c"]))])
        );
        assert_eq!(
            lenient("tags[]=a&tags[]=b"),
            map([("tags", Value::from(vec!["a", "b"]))])
        );
    }

    #[test]
    fn parse_repeated_null_keys() {
        assert_eq!(
            lenient("a&a=1"),
            map([("a", Value::Sequence(vec![Value::Null, "1".into()]))])
        );
    }

    #[test]
    fn parse_nested_brackets() {
        assert_eq!(
            lenient("user[id]=1&user[name]=John"),
            map([(
                "user",
                record([("id", "1".into()), ("name", "John".into())])
            )])
        );
    }

    #[test]
    fn parse_nested_dots() {
        assert_eq!(
            lenient("user.id=1&user.name=John"),
            map([(
                "user",
                record([("id", "1".into()), ("name", "John".into())])
            )])
        );
    }

    #[test]
    fn parse_mixed_notations_share_records() {
        assert_eq!(
            lenient("a[b][c]=1&a.b.d=2&a[b][c]=3"),
            map([(
                "a",
                record([(
                    "b",
                    record([
                        ("c", Value::from(vec!["1", "3"])),
                        ("d", "2".into())
                    ])
                )])
            )])
        );
    }

    #[test]
    fn parse_encoded_brackets() {
        // keys are decoded before their path is split
        assert_eq!(
            lenient("user%5Bid%5D=1&key=hello%20world"),
            map([
                ("user", record([("id", "1".into())])),
                ("key", "hello world".into())
            ])
        );
    }

    #[test]
    fn parse_skips_malformed_brackets() {
        assert_eq!(lenient("[]=1&a=2&[[]]=3"), map([("a", "2".into())]));
    }

    #[test]
    fn parse_overwrites_scalar_with_record() {
        assert_eq!(
            lenient("a=1&a[b]=2"),
            map([("a", record([("b", "2".into())]))])
        );
        assert_eq!(
            lenient("a=1&a=2&a.b=3"),
            map([("a", record([("b", "3".into())]))])
        );
    }

    #[test]
    fn parse_overwrites_at_every_depth() {
        assert_eq!(
            lenient("a=1&a.b=2&a.b.c=3&a[b][c][d]=4"),
            map([("a", record([("b", record([("c", record([("d", "4".into())]))]))]))])
        );
        assert_eq!(
            lenient("a=1&a=2&a[b]=3"),
            map([("a", record([("b", "3".into())]))])
        );
    }

    #[test]
    fn parse_value_onto_record() {
        assert_eq!(
            lenient("a[b]=1&a=2"),
            map([(
                "a",
                Value::Sequence(vec![record([("b", "1".into())]), "2".into()])
            )])
        );
    }

    #[test]
    fn parse_rejects_conflicts() {
        let err = parse("a=1&a[b]=2", Conflicts::Reject).unwrap_err();
        assert!(
            err.to_string()
                .contains("the same key is used for both a value and a nested record"),
            "got: {err}"
        );

        let err = parse("a=1&a=2&a.b.c=3", Conflicts::Reject).unwrap_err();
        assert!(
            err.to_string()
                .contains("the same key is used for both a sequence and a nested record"),
            "got: {err}"
        );

        let err = parse("x.y.z=1&x.y=2", Conflicts::Reject).unwrap_err();
        assert_eq!(
            err.to_string(),
            "conflicting values for key `x.y`: the same key is used for both a nested record and a value"
        );
    }

    #[test]
    fn parse_reject_allows_repeats() {
        assert_eq!(
            parse("a=1&a=2&b[c]=3&b[c]=4", Conflicts::Reject).unwrap(),
            map([
                ("a", Value::from(vec!["1", "2"])),
                ("b", record([("c", Value::from(vec!["3", "4"]))]))
            ])
        );
    }

    #[test]
    fn parse_preserves_key_order() {
        let parsed = lenient("z=1&a=2&m=3");
        let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
