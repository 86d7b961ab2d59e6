//! Decoding of querystrings back into flat pairs.
//!
//! The inverse of serialization: names are not parsed, so `foo[]=a&foo[]=b`
//! decodes to two `("foo[]", ..)` pairs.

use std::borrow::Cow;

use percent_encoding::percent_decode;

use crate::error::Result;

/// Decodes a querystring into `(name, value)` pairs, in order.
///
/// Pairs are separated by `&`, and split at the first `=`. A pair with no
/// `=` has an empty value. Empty segments are skipped. `+` decodes to a
/// space, and a `%` not followed by two hex digits is kept as is.
///
/// ```
/// let pairs = form_qs::from_str("foo%5B%5D=bar&foo%5B%5D=baz&flag").unwrap();
/// assert_eq!(
///     pairs,
///     [
///         ("foo[]".to_owned(), "bar".to_owned()),
///         ("foo[]".to_owned(), "baz".to_owned()),
///         ("flag".to_owned(), String::new()),
///     ]
/// );
/// ```
pub fn from_str(input: &str) -> Result<Vec<(String, String)>> {
    from_bytes(input.as_bytes())
}

/// Decodes a querystring from bytes. See [`from_str`].
pub fn from_bytes(input: &[u8]) -> Result<Vec<(String, String)>> {
    input
        .split(|&b| b == b'&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| -> Result<(String, String)> {
            let (name, value) = match segment.iter().position(|&b| b == b'=') {
                Some(pos) => (&segment[..pos], &segment[pos + 1..]),
                None => (segment, &[][..]),
            };
            Ok((decode(name)?, decode(value)?))
        })
        .collect()
}

fn decode(input: &[u8]) -> Result<String> {
    let input = replace_plus(input);
    Ok(percent_decode(&input).decode_utf8()?.into_owned())
}

fn replace_plus(input: &[u8]) -> Cow<'_, [u8]> {
    if input.contains(&b'+') {
        let replaced = input
            .iter()
            .map(|&b| if b == b'+' { b' ' } else { b })
            .collect();
        Cow::Owned(replaced)
    } else {
        Cow::Borrowed(input)
    }
}
