// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::borrow::Cow;
use std::fmt;

/// Token that represents either a consumer or an access token.
#[derive(Clone)]
pub struct Token<'a> {
    /// `key` field of the token
    pub key: Cow<'a, str>,
    /// `secret` part of the token
    pub secret: Cow<'a, str>,
}

impl<'a> Token<'a> {
    /// Create new token from `key` and `secret`
    pub fn new<K, S>(key: K, secret: S) -> Token<'a>
    where
        K: Into<Cow<'a, str>>,
        S: Into<Cow<'a, str>>,
    {
        Token {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Everything needed to sign on behalf of a consumer and, optionally, a user.
///
/// `token` is absent for two-legged (application only) calls. `callback` and
/// `verifier` only matter while exchanging tokens.
#[derive(Clone, Debug)]
pub struct Credentials<'a> {
    consumer: Token<'a>,
    token: Option<Token<'a>>,
    callback: Option<Cow<'a, str>>,
    verifier: Option<Cow<'a, str>>,
}

fn non_empty<'b>(value: &'b Option<Cow<'_, str>>) -> Option<&'b str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl<'a> Credentials<'a> {
    /// Creates consumer-only credentials.
    pub fn new(consumer: Token<'a>) -> Self {
        Credentials {
            consumer,
            token: None,
            callback: None,
            verifier: None,
        }
    }

    /// Adds the user's access (or request) token.
    pub fn with_token(mut self, token: Token<'a>) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets `oauth_callback`.
    pub fn with_callback<C>(mut self, callback: C) -> Self
    where
        C: Into<Cow<'a, str>>,
    {
        self.callback = Some(callback.into());
        self
    }

    /// Sets `oauth_verifier`.
    pub fn with_verifier<V>(mut self, verifier: V) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        self.verifier = Some(verifier.into());
        self
    }

    /// The consumer key.
    pub fn consumer_key(&self) -> &str {
        &self.consumer.key
    }

    /// The consumer secret.
    pub fn consumer_secret(&self) -> &str {
        &self.consumer.secret
    }

    /// The access token key, if one was given and is non-empty.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_ref()
            .map(|t| &*t.key)
            .filter(|key| !key.is_empty())
    }

    /// The access token secret, if a token was given.
    pub fn token_secret(&self) -> Option<&str> {
        self.token.as_ref().map(|t| &*t.secret)
    }

    /// `oauth_callback`, if set and non-empty.
    pub fn callback(&self) -> Option<&str> {
        non_empty(&self.callback)
    }

    /// `oauth_verifier`, if set and non-empty.
    pub fn verifier(&self) -> Option<&str> {
        non_empty(&self.verifier)
    }
}
