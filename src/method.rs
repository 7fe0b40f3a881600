// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Signature algorithms.

use crate::encode::encode;
use crate::error::{Error, Result};
use log::debug;
use ring::hmac;
use std::fmt;
use std::str::FromStr;

/// The `oauth_signature_method` of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureMethod {
    /// HMAC-SHA1 over the signature base, Base64 encoded.
    HmacSha1,
    /// The signing key itself, percent-encoded.
    ///
    /// The secrets travel in the clear, so only use this over TLS.
    PlainText,
    /// RSA-SHA1. Recognized but not implemented.
    RsaSha1,
}

impl SignatureMethod {
    /// The name sent as `oauth_signature_method`.
    pub fn as_str(self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::PlainText => "PLAINTEXT",
            SignatureMethod::RsaSha1 => "RSA-SHA1",
        }
    }
}

impl Default for SignatureMethod {
    fn default() -> Self {
        SignatureMethod::HmacSha1
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
            "PLAINTEXT" => Ok(SignatureMethod::PlainText),
            "RSA-SHA1" => Ok(SignatureMethod::RsaSha1),
            "" => Err(Error::invalid_input("empty signature method")),
            _ => Err(Error::invalid_input(format!(
                "unknown signature method {:?}",
                s
            ))),
        }
    }
}

/// Builds the HMAC key text `encode(consumer_secret)&encode(token_secret)`.
fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        encode(consumer_secret),
        encode(token_secret.unwrap_or(""))
    )
}

fn hmac_sha1(key: &[u8], data: &[u8]) -> hmac::Tag {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
    hmac::sign(&key, data)
}

/// Signs a signature base.
///
/// A missing token secret is treated as empty; both secrets empty is valid
/// and yields the key `&`.
pub fn sign(
    base: &str,
    consumer_secret: &str,
    token_secret: Option<&str>,
    method: SignatureMethod,
) -> Result<String> {
    match method {
        SignatureMethod::PlainText => Ok(encode(&format!(
            "{}&{}",
            consumer_secret,
            token_secret.unwrap_or("")
        ))),
        SignatureMethod::HmacSha1 => {
            if base.is_empty() {
                return Err(Error::invalid_input("empty signature base"));
            }
            debug!("Signature base string: {}", base);
            let key = signing_key(consumer_secret, token_secret);
            Ok(base64::encode(hmac_sha1(key.as_bytes(), base.as_bytes())))
        }
        SignatureMethod::RsaSha1 => Err(Error::Unsupported(method)),
    }
}
