// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::error::{Error, Result};
use crate::param::QueryParameter;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::str;
use url::Url;

/// Decodes one `application/x-www-form-urlencoded` component.
fn decode_component(component: &str) -> Result<String> {
    let component = component.replace('+', " ");
    Ok(percent_decode_str(&component).decode_utf8()?.into_owned())
}

/// Splits `name=value&...` into parameters.
///
/// Escapes that decode to invalid UTF-8 are an error rather than being
/// replaced, since the replacement would be signed instead of the bytes sent.
fn parse_pairs(query: &str) -> Result<Vec<QueryParameter<'static>>> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let name = decode_component(parts.next().unwrap_or(""))?;
            let value = decode_component(parts.next().unwrap_or(""))?;
            Ok(QueryParameter::new(name, value))
        })
        .collect()
}

/// An outgoing call to be signed: method, endpoint and request parameters.
///
/// Build one per call; it carries no nonce or timestamp of its own.
#[derive(Clone, Debug)]
pub struct SignatureRequest<'a> {
    method: Cow<'a, str>,
    endpoint: Url,
    parameters: Vec<QueryParameter<'a>>,
}

impl<'a> SignatureRequest<'a> {
    /// Creates a request for `endpoint`.
    ///
    /// Any query string already on the endpoint is decoded into request
    /// parameters, so `https://host/path?count=5` signs `count=5`.
    pub fn new<M>(method: M, endpoint: &str) -> Result<Self>
    where
        M: Into<Cow<'a, str>>,
    {
        let endpoint = Url::parse(endpoint)?;
        if endpoint.host_str().is_none() {
            return Err(Error::invalid_input(format!(
                "endpoint {} has no host",
                endpoint
            )));
        }
        let parameters = parse_pairs(endpoint.query().unwrap_or(""))?;
        Ok(SignatureRequest {
            method: method.into(),
            endpoint,
            parameters,
        })
    }

    /// Creates a request from an `http::Method`.
    #[cfg(feature = "http-header")]
    pub fn from_method(method: &http::Method, endpoint: &str) -> Result<Self> {
        SignatureRequest::new(method.as_str().to_owned(), endpoint)
    }

    /// Adds a single parameter.
    pub fn with_parameter<P>(mut self, param: P) -> Self
    where
        P: Into<QueryParameter<'a>>,
    {
        self.parameters.push(param.into());
        self
    }

    /// Adds every parameter from `params`.
    pub fn with_parameters<I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<QueryParameter<'a>>,
    {
        self.parameters.extend(params.into_iter().map(Into::into));
        self
    }

    /// Adds the parameters of an `application/x-www-form-urlencoded` body.
    pub fn with_form_body(mut self, body: &[u8]) -> Result<Self> {
        self.parameters.extend(parse_pairs(str::from_utf8(body)?)?);
        Ok(self)
    }

    /// The HTTP method as given.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The endpoint as parsed.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// All request parameters, including any taken from the endpoint.
    pub fn parameters(&self) -> &[QueryParameter<'a>] {
        &self.parameters
    }

    /// The endpoint reduced to scheme, authority and path.
    ///
    /// The port is kept only when it is not the scheme's default. Query,
    /// fragment and user info are dropped.
    pub fn normalized_url(&self) -> String {
        let url = &self.endpoint;
        let mut normalized = format!("{}://{}", url.scheme(), url.host_str().unwrap_or(""));
        if let Some(port) = url.port() {
            normalized.push_str(&format!(":{}", port));
        }
        normalized.push_str(url.path());
        normalized
    }
}
