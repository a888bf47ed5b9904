use std::fmt;

/// The chain of record keys leading from the root to the value being
/// encoded.
///
/// Sequences do not add a segment: every element of `tags` is emitted
/// under `tags` itself.
#[derive(Default)]
pub struct KeyPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    pub fn new() -> Self {
        Self {
            segments: Vec::with_capacity(4),
        }
    }

    pub fn push(&mut self, segment: &'a str) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Appends the unencoded key to `out`.
    ///
    /// - bracket form: `user[address][city]`
    /// - dot form (`strict`): `user.address.city`
    pub fn write_raw(&self, out: &mut String, strict: bool) {
        let Some((first, rest)) = self.segments.split_first() else {
            return;
        };
        out.push_str(first);
        for segment in rest {
            if strict {
                out.push('.');
                out.push_str(segment);
            } else {
                out.push('[');
                out.push_str(segment);
                out.push(']');
            }
        }
    }
}

impl fmt::Debug for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut raw = String::new();
        self.write_raw(&mut raw, false);
        write!(f, "{raw:?}")
    }
}

#[cfg(test)]
mod test {
    use super::KeyPath;

    fn raw(segments: &[&str], strict: bool) -> String {
        let mut path = KeyPath::new();
        for segment in segments {
            path.push(segment);
        }
        let mut out = String::new();
        path.write_raw(&mut out, strict);
        out
    }

    #[test]
    fn bracket_form() {
        assert_eq!(raw(&["user"], false), "user");
        assert_eq!(raw(&["user", "address", "city"], false), "user[address][city]");
    }

    #[test]
    fn dot_form() {
        assert_eq!(raw(&["user", "address", "city"], true), "user.address.city");
    }

    #[test]
    fn pop_restores_parent() {
        let mut path = KeyPath::new();
        path.push("a");
        path.push("b");
        path.pop();
        path.push("c");
        let mut out = String::new();
        path.write_raw(&mut out, false);
        assert_eq!(out, "a[c]");
    }
}
