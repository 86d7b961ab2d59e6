use std::io;
use std::str;

use thiserror::Error;

/// Error type for `form_qs`.
///
/// Serializing a form into a `String` cannot fail. Errors come from the
/// writer passed to [`to_writer`](crate::to_writer), or from decoding a
/// querystring with [`from_str`](crate::from_str).
#[derive(Error, Debug)]
pub enum Error {
    /// Writing to the output failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// A decoded name or value was not valid UTF-8.
    #[error("decoded querystring is not valid UTF-8: {0}")]
    Utf8(#[from] str::Utf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
