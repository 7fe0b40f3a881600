// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Signing a request end to end and rendering the outcome.

use crate::base::{build_signature_base, OAUTH_SIGNATURE};
use crate::credentials::Credentials;
use crate::encode::encode;
use crate::error::{Error, Result};
use crate::method::{self, SignatureMethod};
use crate::nonce::{NonceProvider, SystemNonceProvider};
use crate::param::{normalize_parameters, signable_parameters, QueryParameter};
use crate::request::SignatureRequest;
use log::debug;
use std::borrow::Cow;

/// A computed signature and everything needed to send it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureResult {
    method: SignatureMethod,
    signature: String,
    base: String,
    normalized_url: String,
    normalized_parameters: String,
    request_parameters: String,
    protocol_parameters: Vec<QueryParameter<'static>>,
}

impl SignatureResult {
    /// The value of `oauth_signature`.
    ///
    /// HMAC-SHA1 signatures are raw Base64; PLAINTEXT signatures are already
    /// percent-encoded.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The method used to produce the signature.
    pub fn method(&self) -> SignatureMethod {
        self.method
    }

    /// The signed string.
    pub fn signature_base(&self) -> &str {
        &self.base
    }

    /// Scheme, authority and path of the endpoint, to send the request to.
    pub fn normalized_url(&self) -> &str {
        &self.normalized_url
    }

    /// All signed parameters, sorted, values percent-encoded once.
    pub fn normalized_parameters(&self) -> &str {
        &self.normalized_parameters
    }

    /// The non-protocol parameters, for the query string or a form body when
    /// the protocol parameters travel in the `Authorization` header.
    pub fn request_parameters(&self) -> &str {
        &self.request_parameters
    }

    fn encoded_signature(&self) -> Cow<'_, str> {
        match self.method {
            SignatureMethod::PlainText => Cow::Borrowed(&self.signature),
            _ => Cow::Owned(encode(&self.signature)),
        }
    }

    /// Every signed parameter plus `oauth_signature`, ready to be used as a
    /// query string or form body.
    pub fn signed_query(&self) -> String {
        format!(
            "{}&{}={}",
            self.normalized_parameters,
            OAUTH_SIGNATURE,
            self.encoded_signature()
        )
    }

    fn render_header(&self, signature: &str) -> String {
        let mut fields = self
            .protocol_parameters
            .iter()
            .map(|param| (param.name(), encode(param.value())))
            .collect::<Vec<_>>();
        fields.push((OAUTH_SIGNATURE, signature.to_owned()));
        fields.sort();
        format!(
            "OAuth {}",
            fields
                .iter()
                .map(|(name, value)| format!("{}=\"{}\"", name, value))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    /// The `Authorization` header value, protocol parameters sorted by name.
    pub fn authorization_header(&self) -> String {
        let header = self.render_header(&self.encoded_signature());
        match self.method {
            // A PLAINTEXT signature is the signing key itself.
            SignatureMethod::PlainText => debug!(
                "Authorization header: Authorization: {}",
                self.render_header("<redacted>")
            ),
            _ => debug!("Authorization header: Authorization: {}", header),
        }
        header
    }

    /// The `Authorization` header as an `http::HeaderValue`, marked sensitive.
    #[cfg(feature = "http-header")]
    pub fn header_value(&self) -> Result<http::HeaderValue> {
        let mut value = http::HeaderValue::from_str(&self.authorization_header())?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Signs requests with one signature method and nonce source.
#[derive(Clone, Debug, Default)]
pub struct Signer<P = SystemNonceProvider> {
    method: SignatureMethod,
    provider: P,
}

impl Signer {
    /// Creates a signer using the system clock and a random nonce.
    pub fn new(method: SignatureMethod) -> Self {
        Signer {
            method,
            provider: SystemNonceProvider,
        }
    }
}

impl<P: NonceProvider> Signer<P> {
    /// Creates a signer drawing timestamps and nonces from `provider`.
    pub fn with_provider(method: SignatureMethod, provider: P) -> Self {
        Signer { method, provider }
    }

    /// The configured signature method.
    pub fn method(&self) -> SignatureMethod {
        self.method
    }

    /// Signs `request` on behalf of `credentials`.
    ///
    /// A fresh timestamp and nonce are drawn on every call; retrying a
    /// request means signing it again.
    pub fn sign(
        &self,
        request: &SignatureRequest<'_>,
        credentials: &Credentials<'_>,
    ) -> Result<SignatureResult> {
        if self.method == SignatureMethod::RsaSha1 {
            return Err(Error::Unsupported(self.method));
        }
        let timestamp = self.provider.timestamp();
        let nonce = self.provider.nonce();
        let base = build_signature_base(
            request,
            credentials,
            &nonce,
            &timestamp,
            self.method.as_str(),
        )?;
        let signature = method::sign(
            base.as_str(),
            credentials.consumer_secret(),
            credentials.token_secret(),
            self.method,
        )?;

        let request_parameters = normalize_parameters(signable_parameters(request.parameters()));
        let (base, normalized_url, normalized_parameters, protocol_parameters) =
            base.into_parts();
        Ok(SignatureResult {
            method: self.method,
            signature,
            base,
            normalized_url,
            normalized_parameters,
            request_parameters,
            protocol_parameters,
        })
    }
}

/// Signs `request` with `method`, the system clock and a random nonce.
pub fn sign_request(
    request: &SignatureRequest<'_>,
    credentials: &Credentials<'_>,
    method: SignatureMethod,
) -> Result<SignatureResult> {
    Signer::new(method).sign(request, credentials)
}
