use std::borrow::Cow;

#[inline(always)]
fn char_to_digit(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

/// Percent-decodes a key or value.
///
/// - `%XX` escapes are decoded to their byte
/// - malformed escapes (`%`, `%4`, `%zz`) are kept verbatim
/// - `+` is left as-is: it only means space in form encoding
/// - bytes that do not form valid UTF-8 are replaced with U+FFFD
///
/// Borrows the input when it contains no `%` at all.
pub fn decode(input: &str) -> Cow<'_, str> {
    if !input.contains('%') {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut last_segment = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let high = bytes.get(idx + 1).copied().and_then(char_to_digit);
            let low = bytes.get(idx + 2).copied().and_then(char_to_digit);
            if let (Some(h), Some(l)) = (high, low) {
                decoded.extend_from_slice(&bytes[last_segment..idx]);
                decoded.push(h * 0x10 + l);
                idx += 3;
                last_segment = idx;
                continue;
            }
        }
        idx += 1;
    }

    decoded.extend_from_slice(&bytes[last_segment..]);
    match String::from_utf8(decoded) {
        Ok(s) => Cow::Owned(s),
        Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}

#[cfg(test)]
mod test {
    use super::decode;
    use std::borrow::Cow;

    #[test]
    fn borrows_plain_input() {
        assert!(matches!(decode("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn decodes_escapes() {
        assert_eq!(decode("hello%20world"), "hello world");
        assert_eq!(decode("user%5Bid%5D"), "user[id]");
        assert_eq!(decode("comt%C3%A9"), "comté");
        assert_eq!(decode("%f0%9f%a6%80"), "🦀");
    }

    #[test]
    fn keeps_plus() {
        assert_eq!(decode("a+b%2Bc"), "a+b+c");
    }

    #[test]
    fn keeps_malformed_escapes() {
        assert_eq!(decode("100%"), "100%");
        assert_eq!(decode("%zz%4"), "%zz%4");
        assert_eq!(decode("%%41"), "%A");
    }

    #[test]
    fn replaces_invalid_utf8() {
        assert_eq!(decode("a%FFb"), "a\u{FFFD}b");
    }
}
