use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// The characters left alone by `encodeURIComponent`.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()` is encoded.
/// Spaces become `%20`.
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

/// As defined in https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set
///
/// The application/x-www-form-urlencoded percent-encode set contains all code points, except the ASCII alphanumeric,
/// U+002A (*), U+002D (-), U+002E (.), and U+005F (_).
///
/// Space is removed here so it can be written as `+`.
const FORM_URLENCODED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Percent-encodes a name or value.
///
/// ## URI-component encoding (default)
/// Every byte outside the unreserved set is written as `%XX` with uppercase
/// hex, including `%` itself, so encoding is not idempotent.
///
/// ## Form encoding
/// The stricter `application/x-www-form-urlencoded` set, with spaces
/// written as `+`.
///
/// The function returns an iterator to avoid allocations when no encoding is needed.
pub fn encode(input: &str, use_form_encoding: bool) -> impl Iterator<Item = Cow<'_, str>> + '_ {
    let set = if use_form_encoding {
        FORM_URLENCODED_SET
    } else {
        URI_COMPONENT_SET
    };
    percent_encoding::utf8_percent_encode(input, set).map(move |s| {
        // the form-encoding set lets spaces through unencoded
        if use_form_encoding && s.contains(' ') {
            Cow::Owned(s.replace(' ', "+"))
        } else {
            Cow::Borrowed(s)
        }
    })
}

/// Collects [`encode`] into a single string.
pub fn encode_to_string(input: &str, use_form_encoding: bool) -> Cow<'_, str> {
    let mut chunks = encode(input, use_form_encoding);
    let Some(first) = chunks.next() else {
        return Cow::Borrowed("");
    };
    match chunks.next() {
        // nothing needed escaping
        None => first,
        Some(second) => {
            let mut out = String::with_capacity(input.len() * 3);
            out.push_str(&first);
            out.push_str(&second);
            chunks.for_each(|chunk| out.push_str(&chunk));
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(input: &str) -> String {
        encode_to_string(input, false).into_owned()
    }

    fn form(input: &str) -> String {
        encode_to_string(input, true).into_owned()
    }

    #[test]
    fn unreserved_pass_through() {
        assert_eq!(component("abcXYZ019-_.~"), "abcXYZ019-_.~");
        assert_eq!(component("!*'()"), "!*'()");
        assert!(matches!(encode_to_string("plain", false), Cow::Borrowed(_)));
    }

    #[test]
    fn reserved_are_escaped() {
        assert_eq!(
            component(" $&+,/:;=?@<>#%{}|^[]`\\"),
            "%20%24%26%2B%2C%2F%3A%3B%3D%3F%40%3C%3E%23%25%7B%7D%7C%5E%5B%5D%60%5C"
        );
    }

    #[test]
    fn multibyte_is_utf8_escaped() {
        assert_eq!(component("comté"), "comt%C3%A9");
        assert_eq!(component("🦀"), "%F0%9F%A6%80");
    }

    #[test]
    fn not_idempotent() {
        let once = component("a b");
        assert_eq!(once, "a%20b");
        assert_eq!(component(&once), "a%2520b");
    }

    #[test]
    fn form_encoding_uses_plus() {
        assert_eq!(form("Carrot City"), "Carrot+City");
        assert_eq!(form("a+b"), "a%2Bb");
        assert_eq!(form("~!"), "%7E%21");
        assert_eq!(form("*-._"), "*-._");
    }

    #[test]
    fn empty_input() {
        assert_eq!(component(""), "");
        assert_eq!(form(""), "");
    }
}
