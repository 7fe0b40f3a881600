// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::method::SignatureMethod;
use std::str::Utf8Error;
use thiserror::Error;

/// Result type returned by the signing functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when a request cannot be signed.
///
/// Signing either succeeds completely or fails with one of these; there is no
/// partially signed result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required input was empty or not recognized.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The endpoint is not an absolute URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The signature method exists but is not implemented.
    #[error("unsupported signature method: {0}")]
    Unsupported(SignatureMethod),
    /// Input bytes were not valid UTF-8.
    #[error("encoding failure: {0}")]
    EncodingFailure(#[from] Utf8Error),
    /// The rendered header contains bytes not allowed in a header value.
    #[cfg(feature = "http-header")]
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed caller input.
    InvalidInput,
    /// The requested signature method is not implemented.
    Unsupported,
    /// Text could not be handled as UTF-8.
    EncodingFailure,
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) | Error::InvalidUrl(_) => ErrorKind::InvalidInput,
            Error::Unsupported(_) => ErrorKind::Unsupported,
            Error::EncodingFailure(_) => ErrorKind::EncodingFailure,
            #[cfg(feature = "http-header")]
            Error::InvalidHeaderValue(_) => ErrorKind::EncodingFailure,
        }
    }
}
