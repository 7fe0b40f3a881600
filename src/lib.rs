// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! OAuth 1.0a request signing.
//!
//! Produces `HMAC-SHA1` (or `PLAINTEXT`) signatures and renders them as an
//! `Authorization` header or a signed query string. Sending the request is
//! left to the caller's HTTP client.
//!
//! ```
//! use oauth_signer::{Credentials, SignatureMethod, SignatureRequest, Signer, Token};
//!
//! let credentials = Credentials::new(Token::new("consumer key", "consumer secret"))
//!     .with_token(Token::new("access token", "access secret"));
//! let request = SignatureRequest::new("POST", "https://api.example.com/1.1/statuses/update.json")?
//!     .with_parameter(("status", "hello world"));
//!
//! let signed = Signer::new(SignatureMethod::HmacSha1).sign(&request, &credentials)?;
//! assert!(signed.authorization_header().starts_with("OAuth oauth_consumer_key="));
//! assert_eq!("status=hello%20world", signed.request_parameters());
//! # Ok::<(), oauth_signer::Error>(())
//! ```

#![warn(
    bad_style,
    missing_docs,
    unused,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod base;
mod credentials;
pub mod encode;
mod error;
pub mod method;
pub mod nonce;
pub mod param;
mod request;
mod signature;

pub use crate::base::{build_signature_base, SignatureBase};
pub use crate::credentials::{Credentials, Token};
pub use crate::encode::encode;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::method::{sign, SignatureMethod};
pub use crate::nonce::{FixedNonceProvider, NonceProvider, SystemNonceProvider};
pub use crate::param::QueryParameter;
pub use crate::request::SignatureRequest;
pub use crate::signature::{sign_request, SignatureResult, Signer};

/// Signs a request with HMAC-SHA1 and returns `(header, body)`.
///
/// `header` is the `Authorization` header value; `body` holds the
/// non-protocol parameters, to be sent as the query string (`GET`) or as an
/// `application/x-www-form-urlencoded` body (`POST`).
pub fn authorization_header<'a>(
    method: &str,
    uri: &str,
    consumer: &Token<'a>,
    token: Option<&Token<'a>>,
    other_param: Option<&[QueryParameter<'a>]>,
) -> Result<(String, String)> {
    let mut credentials = Credentials::new(consumer.clone());
    if let Some(token) = token {
        credentials = credentials.with_token(token.clone());
    }
    let mut request = SignatureRequest::new(method.to_owned(), uri)?;
    if let Some(params) = other_param {
        request = request.with_parameters(params.iter().cloned());
    }
    let signed = Signer::new(SignatureMethod::HmacSha1).sign(&request, &credentials)?;
    Ok((
        signed.authorization_header(),
        signed.request_parameters().to_owned(),
    ))
}
