// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Percent-encoding as used by OAuth signatures.
//!
//! Generic URL encoders are not interchangeable with this one: they emit
//! lowercase hex or `+` for space, and the remote side then computes a
//! different signature base.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::fmt::Write;

/// Characters that are never escaped.
pub const UNRESERVED_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_.~";

/// Characters escaped as `%XX` of their code point.
///
/// This list is fixed; it is not derived from RFC 3986 and must not be
/// regenerated from one.
pub const RESERVED_CHARS: &str = "`!@#$%^&*()_-+=.~,:;'?/|\\[] ";

/// Percent-encodes `value` for use in a signature base or an OAuth header.
pub fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if UNRESERVED_CHARS.contains(ch) {
            out.push(ch);
        } else if RESERVED_CHARS.contains(ch) {
            let _ = write!(out, "%{:02X}", u32::from(ch));
        } else {
            let mut buf = [0; 4];
            let escaped = utf8_percent_encode(ch.encode_utf8(&mut buf), NON_ALPHANUMERIC);
            out.push_str(&escaped.to_string().to_uppercase());
        }
    }
    out
}
