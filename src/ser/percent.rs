use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// The URI component percent-encode set.
///
/// Every byte is encoded except the ASCII alphanumerics and
/// `-`, `_`, `.`, `!`, `~`, `*`, `'`, `(` and `)`.
///
/// This is stricter than the WHATWG query set: the querystring control
/// characters `&`, `=`, `+`, `[`, `]` and space (as `%20`) are all
/// percent-encoded, so an encoded key or value never contains a delimiter.
/// `.` is left alone, which keeps dot-notation keys readable.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Appends `input` to `out`, percent-encoding it when `encode` is set.
///
/// Non-ASCII characters are encoded byte by byte from their UTF-8 form.
pub fn write_encoded(out: &mut String, input: &str, encode: bool) {
    if !encode {
        out.push_str(input);
        return;
    }
    out.extend(percent_encoding::utf8_percent_encode(input, URI_COMPONENT_SET));
}
