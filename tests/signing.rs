// Copyright 2016 oauth-client-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use oauth_signer::{
    build_signature_base, encode, sign, Credentials, ErrorKind, FixedNonceProvider,
    SignatureMethod, SignatureRequest, Signer, Token,
};
use simple_logger::SimpleLogger;

const CONSUMER_KEY: &str = "xvz1evFS4wEEPTGEFPHBog";
const CONSUMER_SECRET: &str = "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw";
const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
const TIMESTAMP: &str = "1318622958";

fn init_logger() {
    let _ = SimpleLogger::new().init();
}

fn fixed_signer(method: SignatureMethod) -> Signer<FixedNonceProvider<'static>> {
    Signer::with_provider(method, FixedNonceProvider::new(TIMESTAMP, NONCE))
}

#[test]
fn application_only_get() {
    init_logger();
    let request = SignatureRequest::new("GET", "https://api.example.com/1.1/resource.json")
        .unwrap()
        .with_parameter(("status", "hello world"));
    let credentials = Credentials::new(Token::new(CONSUMER_KEY, CONSUMER_SECRET));

    let signed = fixed_signer(SignatureMethod::HmacSha1)
        .sign(&request, &credentials)
        .unwrap();

    assert_eq!(
        "GET&https%3A%2F%2Fapi.example.com%2F1.1%2Fresource.json&oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_version%3D1.0%26status%3Dhello%2520world",
        signed.signature_base()
    );
    assert_eq!("WyAWkamFO8fxU5AcEco9Rc9Y0WI=", signed.signature());
}

#[test]
fn user_context_post() {
    init_logger();
    let request = SignatureRequest::new("POST", "https://api.twitter.com/1/statuses/update.json")
        .unwrap()
        .with_form_body(b"status=Hello%20Ladies%20%2b%20Gentlemen%2c%20a%20signed%20OAuth%20request%21")
        .unwrap()
        .with_parameter(("include_entities", "true"));
    let credentials = Credentials::new(Token::new(CONSUMER_KEY, CONSUMER_SECRET)).with_token(
        Token::new(
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        ),
    );

    let signed = fixed_signer(SignatureMethod::HmacSha1)
        .sign(&request, &credentials)
        .unwrap();

    assert_eq!(
        "POST&https%3A%2F%2Fapi.twitter.com%2F1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521",
        signed.signature_base()
    );
    assert_eq!("tnnArxj06cWHq44gCs1OSKk/jLY=", signed.signature());
    assert_eq!(
        "OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", \
         oauth_nonce=\"kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\", \
         oauth_signature=\"tnnArxj06cWHq44gCs1OSKk%2FjLY%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1318622958\", \
         oauth_token=\"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\", \
         oauth_version=\"1.0\"",
        signed.authorization_header()
    );
    assert_eq!(
        "include_entities=true&status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21",
        signed.request_parameters()
    );
}

#[test]
fn token_exchange_with_callback_and_verifier() {
    init_logger();
    let request = SignatureRequest::new(
        "post",
        "http://example.com:8080/oauth/access_token?oauth_access_type=read",
    )
    .unwrap()
    .with_parameters(vec![("oauth_signature", "x"), ("a", "2"), ("a", "1")]);
    let credentials = Credentials::new(Token::new("key", "secret"))
        .with_token(Token::new("rt", "tsec"))
        .with_callback("oob")
        .with_verifier("v123");

    let signed = Signer::with_provider(
        SignatureMethod::HmacSha1,
        FixedNonceProvider::new("1700000000", "12345"),
    )
    .sign(&request, &credentials)
    .unwrap();

    assert_eq!(
        "POST&http%3A%2F%2Fexample.com%3A8080%2Foauth%2Faccess_token&a%3D1%26a%3D2%26oauth_access_type%3Dread%26oauth_callback%3Doob%26oauth_consumer_key%3Dkey%26oauth_nonce%3D12345%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1700000000%26oauth_token%3Drt%26oauth_verifier%3Dv123%26oauth_version%3D1.0",
        signed.signature_base()
    );
    assert_eq!("NdmORj+A0aTbLzwnMJGGjvprm0w=", signed.signature());
    let header = signed.authorization_header();
    assert!(header.contains("oauth_callback=\"oob\""));
    assert!(header.contains("oauth_verifier=\"v123\""));
    assert!(header.contains("oauth_signature=\"NdmORj%2BA0aTbLzwnMJGGjvprm0w%3D\""));
    assert_eq!(
        "a=1&a=2&oauth_access_type=read&oauth_callback=oob&oauth_consumer_key=key&oauth_nonce=12345&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1700000000&oauth_token=rt&oauth_verifier=v123&oauth_version=1.0&oauth_signature=NdmORj%2BA0aTbLzwnMJGGjvprm0w%3D",
        signed.signed_query()
    );
}

#[test]
fn low_level_pipeline_matches_signer() {
    init_logger();
    let request = SignatureRequest::new("GET", "https://api.example.com/1.1/resource.json")
        .unwrap()
        .with_parameter(("status", "hello world"));
    let credentials = Credentials::new(Token::new(CONSUMER_KEY, CONSUMER_SECRET));

    let base = build_signature_base(&request, &credentials, NONCE, TIMESTAMP, "HMAC-SHA1").unwrap();
    let signature = sign(
        base.as_str(),
        credentials.consumer_secret(),
        credentials.token_secret(),
        SignatureMethod::HmacSha1,
    )
    .unwrap();
    let signed = fixed_signer(SignatureMethod::HmacSha1)
        .sign(&request, &credentials)
        .unwrap();

    assert_eq!(signed.signature(), signature);
    assert_eq!(signed.normalized_url(), base.normalized_url());
    assert_eq!(signed.normalized_parameters(), base.normalized_parameters());
}

#[test]
fn failures_are_typed() {
    init_logger();
    let request = SignatureRequest::new("GET", "https://api.example.com/").unwrap();
    let credentials = Credentials::new(Token::new(CONSUMER_KEY, CONSUMER_SECRET));

    let err = fixed_signer(SignatureMethod::RsaSha1)
        .sign(&request, &credentials)
        .unwrap_err();
    assert_eq!(ErrorKind::Unsupported, err.kind());

    let anonymous = Credentials::new(Token::new("", CONSUMER_SECRET));
    let err = fixed_signer(SignatureMethod::HmacSha1)
        .sign(&request, &anonymous)
        .unwrap_err();
    assert_eq!(ErrorKind::InvalidInput, err.kind());

    let err = "RSA-SHA256".parse::<SignatureMethod>().unwrap_err();
    assert_eq!(ErrorKind::InvalidInput, err.kind());
}

#[test]
fn plaintext() {
    init_logger();
    assert_eq!("abc%26", sign("", "abc", None, SignatureMethod::PlainText).unwrap());
    assert_eq!(encode("abc&"), sign("", "abc", Some(""), SignatureMethod::PlainText).unwrap());
}

#[test]
fn concurrent_signing() {
    init_logger();
    let handles = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let request = SignatureRequest::new("GET", "https://api.example.com/r")
                    .unwrap()
                    .with_parameter(("page", i.to_string()));
                let credentials = Credentials::new(Token::new(CONSUMER_KEY, CONSUMER_SECRET));
                Signer::new(SignatureMethod::HmacSha1)
                    .sign(&request, &credentials)
                    .unwrap()
            })
        })
        .collect::<Vec<_>>();
    let mut signatures = handles
        .into_iter()
        .map(|h| h.join().unwrap().signature().to_owned())
        .collect::<Vec<_>>();
    signatures.sort();
    signatures.dedup();
    assert_eq!(8, signatures.len());
}
