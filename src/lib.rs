//! Client for the PowerSchool public portal SOAP service.
//!
//! The service sits behind HTTP Digest authentication (RFC 2617, `qop=auth`).
//! Every call is made in two phases: an unauthenticated probe harvests the
//! server's challenge, then the SOAP envelope is posted with an
//! `Authorization` header computed from it. Responses are decoded into the
//! caller's record, or surfaced as a SOAP Fault.
//!
//! The layers can be used separately: [`Challenge`](struct.Challenge.html)
//! and [`AuthContext`](struct.AuthContext.html) compute Digest headers,
//! [`encode`](fn.encode.html) / [`decode`](fn.decode.html) handle envelopes,
//! [`Transport`](struct.Transport.html) performs one call and
//! [`PortalService`](struct.PortalService.html) offers one method per remote
//! operation.
//!
//! # Examples
//!
//! Answering a challenge:
//!
//! ```
//! use powerschool::{AuthContext, Challenge, Credentials};
//!
//! // Value from the WWW-Authenticate header of the probe response
//! let www_authenticate = r#"Digest realm="r", nonce="abc", qop="auth""#;
//! let challenge = Challenge::parse(www_authenticate);
//!
//! // The portal is always addressed with an empty digest URI. A random client
//! // nonce is generated unless one is injected, as done here for a stable result.
//! let credentials = Credentials::new("pearson", "m0bApP5");
//! let mut context = AuthContext::new(&credentials, "");
//! context.set_custom_cnonce("0a4f113b0a4f113b");
//!
//! let answer = challenge.respond(&context).to_string();
//! assert_eq!(answer, r#"Digest username="pearson", realm="r", nonce="abc", uri="", cnonce="0a4f113b0a4f113b", nc=00000001, qop=auth, response="131aa0dcb20c9abbee26c3df6a359186""#);
//!
//! // The nonce count is part of the hash
//! context.set_nonce_count(2);
//! let answer2 = challenge.respond(&context).to_string();
//! assert!(answer2.ends_with(r#"nc=00000002, qop=auth, response="d5bc87e9574ec9f1de2b2f7888769cbe""#));
//! ```
//!
//! Fetching a student record:
//!
//! ```no_run
//! use powerschool::PortalService;
//!
//! let portal = PortalService::for_server("https://ps.example.org");
//! let student = portal.get_student("parent-login", "parent-password")?;
//! println!("{:?}", student.student.and_then(|s| s.first_name));
//! # Ok::<(), powerschool::Error>(())
//! ```

mod config;
mod digest;
mod enums;
mod envelope;
mod error;
pub mod models;
mod service;
mod transport;
mod utils;

pub use error::{Error, Result};

pub use crate::config::TransportConfig;
pub use crate::digest::{
    compute_authorization_header, AuthContext, AuthorizationHeader, Challenge, Credentials,
};
pub use crate::envelope::{decode, decode_outcome, encode, Fault, Outcome, SOAP_ENV_NS};
pub use crate::service::{PortalService, SERVICE_PATH};
pub use crate::transport::Transport;

pub use crate::enums::*;

/// Parse a `WWW-Authenticate` header value.
/// It's just a convenience method to call [`Challenge::parse()`](struct.Challenge.html#method.parse).
pub fn parse(www_authenticate: &str) -> Challenge {
    Challenge::parse(www_authenticate)
}

#[test]
fn test_parse_respond() {
    let src = r#"
    Digest
       realm="PublicPortal",
       qop="auth",
       nonce="MTU2NzE5MjQ1MzAwMDo2ZjQ4"
    "#;

    let credentials = Credentials::new("pearson", "m0bApP5");
    let mut context = AuthContext::new(&credentials, "");
    context.set_custom_cnonce("0a4f113b0a4f113b");

    let prompt = crate::parse(src);
    assert_eq!(prompt.realm, "PublicPortal");
    assert_eq!(prompt.nonce, "MTU2NzE5MjQ1MzAwMDo2ZjQ4");

    let answer = prompt.respond(&context);
    let str = answer.to_string().replace(", ", ",\n  ");

    assert!(str.starts_with(
        r#"
Digest username="pearson",
  realm="PublicPortal",
  nonce="MTU2NzE5MjQ1MzAwMDo2ZjQ4",
  uri="",
  cnonce="0a4f113b0a4f113b",
  nc=00000001,
  qop=auth,
  response=""#
            .trim()
    ));
    assert_eq!(answer.response.len(), 32);
}
