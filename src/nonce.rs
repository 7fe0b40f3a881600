// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Timestamps and nonces.

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::borrow::Cow;
use std::iter;
use time::OffsetDateTime;

const NONCE_LEN: usize = 32;

/// Source of the `oauth_timestamp` and `oauth_nonce` values.
///
/// Both are requested once per signed request and must not be reused.
pub trait NonceProvider {
    /// Seconds since the Unix epoch, as decimal digits.
    fn timestamp(&self) -> String;
    /// A value unique within the timestamp window.
    fn nonce(&self) -> String;
}

/// Current UTC time and a random alphanumeric nonce.
///
/// The nonce comes from `rand::thread_rng`, a CSPRNG seeded per thread, so
/// concurrent signers never share generator state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemNonceProvider;

impl NonceProvider for SystemNonceProvider {
    fn timestamp(&self) -> String {
        timestamp()
    }

    fn nonce(&self) -> String {
        nonce()
    }
}

/// Returns the current Unix time in whole seconds.
pub fn timestamp() -> String {
    OffsetDateTime::now_utc().unix_timestamp().to_string()
}

/// Returns a fresh 32 character alphanumeric nonce.
pub fn nonce() -> String {
    let mut rng = rand::thread_rng();
    iter::repeat(())
        .map(|()| rng.sample(Alphanumeric))
        .map(char::from)
        .take(NONCE_LEN)
        .collect()
}

/// Always returns the same timestamp and nonce.
///
/// Meant for reproducing reference signatures. Sending two requests signed
/// with it will get the second one rejected as a replay.
#[derive(Clone, Debug)]
pub struct FixedNonceProvider<'a> {
    timestamp: Cow<'a, str>,
    nonce: Cow<'a, str>,
}

impl<'a> FixedNonceProvider<'a> {
    /// Creates a provider returning `timestamp` and `nonce`.
    pub fn new<T, N>(timestamp: T, nonce: N) -> Self
    where
        T: Into<Cow<'a, str>>,
        N: Into<Cow<'a, str>>,
    {
        FixedNonceProvider {
            timestamp: timestamp.into(),
            nonce: nonce.into(),
        }
    }
}

impl NonceProvider for FixedNonceProvider<'_> {
    fn timestamp(&self) -> String {
        self.timestamp.to_string()
    }

    fn nonce(&self) -> String {
        self.nonce.to_string()
    }
}

impl<P: NonceProvider + ?Sized> NonceProvider for &P {
    fn timestamp(&self) -> String {
        (**self).timestamp()
    }

    fn nonce(&self) -> String {
        (**self).nonce()
    }
}
