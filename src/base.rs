// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Signature base string construction.

use crate::credentials::Credentials;
use crate::encode::encode;
use crate::error::{Error, Result};
use crate::param::{normalize_parameters, signable_parameters, QueryParameter};
use crate::request::SignatureRequest;
use log::trace;

/// Value of `oauth_version`.
pub const OAUTH_VERSION: &str = "1.0";

pub(crate) const OAUTH_CALLBACK: &str = "oauth_callback";
pub(crate) const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub(crate) const OAUTH_NONCE: &str = "oauth_nonce";
pub(crate) const OAUTH_SIGNATURE: &str = "oauth_signature";
pub(crate) const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub(crate) const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub(crate) const OAUTH_TOKEN: &str = "oauth_token";
pub(crate) const OAUTH_VERIFIER: &str = "oauth_verifier";
pub(crate) const OAUTH_VERSION_KEY: &str = "oauth_version";

/// The string that gets signed, plus the pieces it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureBase {
    base: String,
    normalized_url: String,
    normalized_parameters: String,
    protocol_parameters: Vec<QueryParameter<'static>>,
}

impl SignatureBase {
    /// `METHOD&encode(url)&encode(parameters)`.
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Scheme, authority and path of the endpoint.
    pub fn normalized_url(&self) -> &str {
        &self.normalized_url
    }

    /// Sorted `name=value` pairs with values percent-encoded once.
    pub fn normalized_parameters(&self) -> &str {
        &self.normalized_parameters
    }

    /// The generated `oauth_*` parameters with raw values, in insertion order.
    pub fn protocol_parameters(&self) -> &[QueryParameter<'static>] {
        &self.protocol_parameters
    }

    pub(crate) fn into_parts(self) -> (String, String, String, Vec<QueryParameter<'static>>) {
        (
            self.base,
            self.normalized_url,
            self.normalized_parameters,
            self.protocol_parameters,
        )
    }
}

/// Builds the signature base for `request`.
///
/// Caller-supplied protocol parameters are discarded and replaced with the
/// ones generated here, so each appears exactly once.
pub fn build_signature_base(
    request: &SignatureRequest<'_>,
    credentials: &Credentials<'_>,
    nonce: &str,
    timestamp: &str,
    signature_method: &str,
) -> Result<SignatureBase> {
    if credentials.consumer_key().is_empty() {
        return Err(Error::invalid_input("empty consumer key"));
    }
    if request.method().is_empty() {
        return Err(Error::invalid_input("empty HTTP method"));
    }
    if signature_method.is_empty() {
        return Err(Error::invalid_input("empty signature method"));
    }

    let mut protocol_parameters = vec![
        QueryParameter::new(OAUTH_VERSION_KEY, OAUTH_VERSION),
        QueryParameter::new(OAUTH_NONCE, nonce.to_owned()),
        QueryParameter::new(OAUTH_TIMESTAMP, timestamp.to_owned()),
        QueryParameter::new(OAUTH_SIGNATURE_METHOD, signature_method.to_owned()),
        QueryParameter::new(OAUTH_CONSUMER_KEY, credentials.consumer_key().to_owned()),
    ];
    if let Some(callback) = credentials.callback() {
        protocol_parameters.push(QueryParameter::new(OAUTH_CALLBACK, callback.to_owned()));
    }
    if let Some(token) = credentials.token() {
        protocol_parameters.push(QueryParameter::new(OAUTH_TOKEN, token.to_owned()));
    }
    if let Some(verifier) = credentials.verifier() {
        protocol_parameters.push(QueryParameter::new(OAUTH_VERIFIER, verifier.to_owned()));
    }

    let mut parameters = signable_parameters(request.parameters());
    parameters.extend(
        protocol_parameters
            .iter()
            .map(|param| QueryParameter::new(param.name(), param.value())),
    );
    let normalized_parameters = normalize_parameters(parameters);
    trace!("Normalized parameters: {}", normalized_parameters);

    let normalized_url = request.normalized_url();
    let base = format!(
        "{}&{}&{}",
        request.method().to_uppercase(),
        encode(&normalized_url),
        encode(&normalized_parameters)
    );

    Ok(SignatureBase {
        base,
        normalized_url,
        normalized_parameters,
        protocol_parameters,
    })
}
