// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Request parameters and their normalized (signable) form.

use crate::encode::encode;
use log::warn;
use std::borrow::Cow;

/// Prefix reserved for protocol parameters.
pub const OAUTH_PARAMETER_PREFIX: &str = "oauth_";

/// Protocol-prefixed parameter that callers may still pass through.
pub const OAUTH_ACCESS_TYPE: &str = "oauth_access_type";

/// A single `name=value` request parameter.
///
/// Names may repeat; every occurrence is signed separately.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryParameter<'a> {
    name: Cow<'a, str>,
    value: Cow<'a, str>,
}

impl<'a> QueryParameter<'a> {
    /// Creates a parameter from a raw (not yet percent-encoded) value.
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<Cow<'a, str>>,
        V: Into<Cow<'a, str>>,
    {
        QueryParameter {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a parameter whose value may be missing; a missing value is empty.
    pub fn with_optional_value<N, V>(name: N, value: Option<V>) -> Self
    where
        N: Into<Cow<'a, str>>,
        V: Into<Cow<'a, str>>,
    {
        QueryParameter {
            name: name.into(),
            value: value.map_or(Cow::Borrowed(""), Into::into),
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw parameter value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<'a, N, V> From<(N, V)> for QueryParameter<'a>
where
    N: Into<Cow<'a, str>>,
    V: Into<Cow<'a, str>>,
{
    fn from((name, value): (N, V)) -> Self {
        QueryParameter::new(name, value)
    }
}

/// Whether a caller-supplied parameter takes part in the signature.
///
/// Protocol parameters are generated by the signer, so caller copies are
/// dropped. `oauth_access_type` is the one exception: some providers expect it
/// as an ordinary request parameter and it must stay signed.
pub fn is_signable(name: &str) -> bool {
    !name.is_empty()
        && (!name.starts_with(OAUTH_PARAMETER_PREFIX) || name.starts_with(OAUTH_ACCESS_TYPE))
}

/// Copies the parameters that take part in the signature.
pub fn signable_parameters<'a, 'b, I>(params: I) -> Vec<QueryParameter<'a>>
where
    I: IntoIterator<Item = &'b QueryParameter<'a>>,
    'a: 'b,
{
    params
        .into_iter()
        .filter(|param| {
            let keep = is_signable(param.name());
            if !keep {
                warn!("dropping request parameter {:?}", param.name());
            }
            keep
        })
        .cloned()
        .collect()
}

/// Renders parameters as the normalized parameter string.
///
/// Values are percent-encoded here, once, then pairs are ordered by name and
/// then by encoded value. Names are used verbatim and compared by UTF-16 code
/// unit, which differs from byte order only past U+FFFF.
pub fn normalize_parameters<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = QueryParameter<'a>>,
{
    let mut pairs = params
        .into_iter()
        .map(|param| (param.name, encode(&param.value)))
        .collect::<Vec<_>>();
    pairs.sort_by(|(a_name, a_value), (b_name, b_value)| {
        a_name
            .encode_utf16()
            .cmp(b_name.encode_utf16())
            .then_with(|| a_value.cmp(b_value))
    });
    join_pairs(pairs.iter().map(|(name, value)| (&**name, &**value)))
}

fn join_pairs<'b, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'b str, &'b str)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&")
}
