// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#![warn(
    bad_style,
    unused,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

use log::LevelFilter;
use oauth_signer::{Credentials, SignatureMethod, SignatureRequest, Signer, Token};
use simple_logger::SimpleLogger;
use std::error::Error;

mod api {
    pub const REQUEST_TOKEN: &str = "http://oauthbin.com/v1/request-token";
    pub const ECHO: &str = "http://oauthbin.com/v1/echo";
}

fn request_token_header(consumer: &Token<'_>) -> Result<String, Box<dyn Error>> {
    let credentials = Credentials::new(consumer.clone()).with_callback("oob");
    let request = SignatureRequest::new("GET", api::REQUEST_TOKEN)?;
    let signed = Signer::new(SignatureMethod::HmacSha1).sign(&request, &credentials)?;
    Ok(signed.authorization_header())
}

fn echo(consumer: &Token<'_>, access: &Token<'_>) -> Result<(), Box<dyn Error>> {
    let credentials = Credentials::new(consumer.clone()).with_token(access.clone());
    let request = SignatureRequest::new("POST", api::ECHO)?
        .with_parameter(("testFOO", "testFoo"))
        .with_form_body(b"status=hello+world&tag=a&tag=b")?;

    let signed = Signer::new(SignatureMethod::HmacSha1).sign(&request, &credentials)?;
    println!("POST {}", signed.normalized_url());
    println!("Authorization: {}", signed.authorization_header());
    println!("body: {}", signed.request_parameters());

    let signed = Signer::new(SignatureMethod::PlainText).sign(&request, &credentials)?;
    println!("query-string form: {}?{}", signed.normalized_url(), signed.signed_query());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().with_level(LevelFilter::Debug).init()?;

    let consumer = Token::new("key", "secret");
    println!("consumer: {:?}", consumer);
    println!("Authorization: {}", request_token_header(&consumer)?);

    let access = Token::new("accesskey", "accesssecret");
    echo(&consumer, &access)?;

    println!("OK");
    Ok(())
}
